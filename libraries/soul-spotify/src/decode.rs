//! Typed decoding of API response bodies.

use crate::error::{Result, SpotifyError};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::cell::RefCell;
use tracing::{debug, warn};

thread_local! {
    /// Path inside a buffered value that failed in [`nested`], relative to
    /// the field the value was read from.
    static NESTED_PATH: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Decode a response body into `T`.
///
/// `resource` is the request path and only ends up in `NotFound` errors.
/// Failures report the path of the offending field, e.g.
/// `device.volume_percent` or `items[3].track.album`.
pub fn decode<T: DeserializeOwned>(resource: &str, body: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    take_nested_path();

    match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
        Ok(value) => {
            take_nested_path();
            Ok(value)
        }
        Err(error) => {
            let nested_path = take_nested_path();

            if let Some(status) = embedded_error_status(body) {
                if status == 404 {
                    return Err(SpotifyError::NotFound {
                        resource: resource.to_string(),
                    });
                }
                return Err(SpotifyError::Status {
                    status,
                    body: body.to_string(),
                });
            }

            let path = join_path(error.path().to_string(), nested_path);
            let message = error.into_inner().to_string();
            warn!(resource = %resource, path = %path, error = %message, "Failed to decode response");

            Err(SpotifyError::Decode { path, message })
        }
    }
}

/// Decode a body that must be present.
pub(crate) fn decode_required<T: DeserializeOwned>(
    resource: &str,
    body: Option<String>,
) -> Result<T> {
    match body {
        Some(body) => decode(resource, &body),
        None => Err(SpotifyError::Decode {
            path: ".".to_string(),
            message: "empty response body".to_string(),
        }),
    }
}

/// Decode a body where "no content" means "nothing to report".
pub(crate) fn decode_optional<T: DeserializeOwned>(
    resource: &str,
    body: Option<String>,
) -> Result<Option<T>> {
    match body {
        Some(body) => decode(resource, &body).map(Some),
        None => {
            debug!(resource = %resource, "No content");
            Ok(None)
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Deserialize)]
struct ErrorObject {
    status: u16,
}

/// Status of the `{"error": {"status": ..}}` envelope some endpoints return with 200.
fn embedded_error_status(body: &str) -> Option<u16> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.status)
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Deserialize `T` from an already buffered value, keeping the path of a
/// failure so [`decode`] can report it below the enclosing field.
pub(crate) fn nested<T, E>(value: Value) -> std::result::Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_path_to_error::deserialize(value).map_err(|error| {
        let path = error.path().to_string();
        NESTED_PATH.with(|slot| *slot.borrow_mut() = Some(path));
        E::custom(error.into_inner())
    })
}

fn take_nested_path() -> Option<String> {
    NESTED_PATH.with(|slot| slot.borrow_mut().take())
}

fn join_path(outer: String, nested: Option<String>) -> String {
    match nested {
        Some(inner) if inner != "." => {
            if outer == "." {
                inner
            } else {
                format!("{}.{}", outer, inner)
            }
        }
        _ => outer,
    }
}

/// Deserialize a list, dropping `null` entries.
pub(crate) fn skip_nulls<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<Option<T>>::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}
