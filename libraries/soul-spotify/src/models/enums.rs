//! Enumerations reported by the API.
//!
//! Spotify adds values to these sets without notice, so every enum keeps an
//! `Unknown` variant carrying the original string instead of failing the
//! whole response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string enum that decodes unrecognised values into `Unknown`.
///
/// Known values are matched ignoring ASCII case and always encode back to
/// their canonical spelling.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this version of the client
            Unknown(String),
        }

        impl $name {
            /// Wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $(
                    if value.eq_ignore_ascii_case($value) {
                        return Self::$variant;
                    }
                )+
                Self::Unknown(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Kind of playback device.
    pub enum DeviceType {
        AudioDongle => "AudioDongle",
        AudioVideoReceiver => "AVR",
        Automobile => "Automobile",
        CastAudio => "CastAudio",
        CastVideo => "CastVideo",
        Computer => "Computer",
        GameConsole => "GameConsole",
        SetTopBox => "STB",
        Smartphone => "Smartphone",
        Smartwatch => "Smartwatch",
        Speaker => "Speaker",
        Tablet => "Tablet",
        Tv => "TV",
    }
}

open_enum! {
    /// Repeat setting of the player.
    pub enum RepeatMode {
        Off => "off",
        Track => "track",
        Context => "context",
    }
}

open_enum! {
    /// Source a playing item was started from.
    pub enum ContextType {
        Album => "album",
        Artist => "artist",
        Playlist => "playlist",
        Collection => "collection",
        Show => "show",
    }
}

open_enum! {
    pub enum AlbumType {
        Album => "album",
        Single => "single",
        Compilation => "compilation",
        Ep => "ep",
    }
}

open_enum! {
    /// Granularity of an album or episode release date.
    pub enum ReleaseDatePrecision {
        Year => "year",
        Month => "month",
        Day => "day",
    }
}

open_enum! {
    /// What the player is currently playing.
    pub enum CurrentlyPlayingType {
        Track => "track",
        Episode => "episode",
        Ad => "ad",
        /// The service itself reports the item as unknown
        Unspecified => "unknown",
    }
}

open_enum! {
    /// Subscription level of a user.
    pub enum ProductType {
        Premium => "premium",
        Free => "free",
    }
}
