use std::fmt;

/// A raw record after validation. Every field has a concrete value except the
/// two that are genuinely optional on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLogEntry {
    pub timestamp: String,
    pub path: String,
    pub status: i64,
    /// Always upper-case.
    pub method: String,
    pub response_time: Option<f64>,
    pub message: Option<String>,
}

impl ValidatedLogEntry {
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.status)
    }
}

/// Why a single record was dropped during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    NotAnObject,
    InvalidInteger { field: &'static str, value: String },
    InvalidFloat { field: &'static str, value: String },
    InvalidString { field: &'static str },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAnObject => write!(f, "record is not a JSON object"),
            RejectReason::InvalidInteger { field, value } => {
                write!(f, "field '{field}' is not an integer: {value}")
            }
            RejectReason::InvalidFloat { field, value } => {
                write!(f, "field '{field}' is not a number: {value}")
            }
            RejectReason::InvalidString { field } => {
                write!(f, "field '{field}' is not a string")
            }
        }
    }
}
