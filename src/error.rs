// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The parameters passed to an operation were not an object.
    InvalidParameters(&'static str),
    /// The parent is not a container known to the rendering surface.
    InvalidParent,
    /// A supplied field has the wrong type.
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    /// `hide` or `set_label` was called before any notification was shown.
    NotInitialized,
    Store(String),
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(shape) => {
                write!(f, "<parameters> must be a valid Object {}", shape)
            }
            Error::InvalidParent => write!(f, "<parent> must be a valid container"),
            Error::InvalidField { field, expected } => {
                write!(f, "<{}> must be {}", field, expected)
            }
            Error::NotInitialized => write!(
                f,
                "An error occurred: the notification has not been initialized correctly."
            ),
            Error::Store(e) => write!(f, "Store Error: {}", e),
            Error::Serialization(e) => write!(f, "Serialization Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
