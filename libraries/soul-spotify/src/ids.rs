//! Identifier helpers.

use crate::error::{Result, SpotifyError};

/// Bare identifier from either an id or a `spotify:<kind>:<id>` URI.
pub fn identifier(uri: &str) -> &str {
    uri.rsplit(':').next().unwrap_or(uri)
}

/// Percent-encode a caller-supplied value for use as one path segment.
pub(crate) fn path_segment(value: &str) -> String {
    // Form encoding writes spaces as `+` and escapes a literal `+` as `%2B`.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Comma-joined identifiers for batch endpoints.
///
/// Returns `None` for an empty batch so callers can skip the request.
pub(crate) fn join_ids<S: AsRef<str>>(
    ids: &[S],
    max: usize,
    noun: &str,
    verb: &str,
) -> Result<Option<String>> {
    if ids.len() > max {
        return Err(SpotifyError::InvalidInput(format!(
            "Maximum of {} {} can be {} at once",
            max, noun, verb
        )));
    }

    if ids.is_empty() {
        return Ok(None);
    }

    let joined = ids
        .iter()
        .map(|id| identifier(id.as_ref()))
        .collect::<Vec<_>>()
        .join(",");

    Ok(Some(joined))
}
