//! Error aliases and the classification of recoverable failures into user-facing notices.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The kinds of failure a user is told about when reading a statement file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The file does not exist.
    NotFound,
    /// The file exists but its content is not valid UTF-8.
    Encoding,
    /// Anything else, such as a malformed amount.
    Unexpected,
}

serde_plain::derive_display_from_serialize!(ErrorType);
serde_plain::derive_fromstr_from_deserialize!(ErrorType);

impl ErrorType {
    /// Walks the error chain looking for an I/O or CSV cause that identifies the failure.
    pub fn classify(e: &Error) -> Self {
        for cause in e.chain() {
            if let Some(io) = cause.downcast_ref::<std::io::Error>() {
                return match io.kind() {
                    ErrorKind::NotFound => ErrorType::NotFound,
                    ErrorKind::InvalidData => ErrorType::Encoding,
                    _ => ErrorType::Unexpected,
                };
            }
            if let Some(csv) = cause.downcast_ref::<csv::Error>() {
                return match csv.kind() {
                    csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound => {
                        ErrorType::NotFound
                    }
                    csv::ErrorKind::Utf8 { .. } => ErrorType::Encoding,
                    csv::ErrorKind::Deserialize { err, .. }
                        if matches!(err.kind(), csv::DeserializeErrorKind::InvalidUtf8(_)) =>
                    {
                        ErrorType::Encoding
                    }
                    _ => ErrorType::Unexpected,
                };
            }
        }
        ErrorType::Unexpected
    }
}

/// A recovered failure, reported to the user as plain text in place of a result.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Notice {
    error_type: ErrorType,
    message: String,
}

impl Notice {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }

    /// Builds the notice text for `e` based on its classification.
    pub fn from_error(e: &Error) -> Self {
        let error_type = ErrorType::classify(e);
        let message = match error_type {
            ErrorType::NotFound => NOT_FOUND.to_string(),
            ErrorType::Encoding => format!("Error reading file: {}", root_cause(e)),
            ErrorType::Unexpected => format!("An unexpected error occurred: {}", root_cause(e)),
        };
        Self::new(error_type, message)
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

pub(crate) const NOT_FOUND: &str = "Bank statement file not found!";

fn root_cause(e: &Error) -> String {
    e.root_cause().to_string()
}
