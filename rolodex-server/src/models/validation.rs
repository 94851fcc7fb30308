//! Validation error types

use std::fmt;

/// Validation error for domain models and request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone number contains something other than decimal digits
    InvalidPhone,

    /// Group name exceeds maximum length
    NameTooLong { max: usize },

    /// Query parameter is missing or not a decimal integer
    InvalidId { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone => write!(f, "phone number should contain only digits"),
            Self::NameTooLong { max } => {
                write!(f, "group name should not exceed {} characters", max)
            }
            Self::InvalidId { field, value } => {
                write!(f, "invalid {}: '{}' is not an integer", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
