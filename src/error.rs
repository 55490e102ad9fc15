//! Error types for tabmath
//!
//! Floating-point functions never return these: domain and range errors are
//! encoded in-band as NaN, infinities and signed zeros. `Error` covers the
//! remaining cases where no in-band encoding exists (integer overflow,
//! invalid integer arguments) and the fatal initialization failures.

use thiserror::Error;

/// Result type alias using tabmath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the floating-point hot path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Integer arithmetic overflowed the target type
    #[error("Integer overflow in '{op}'")]
    Overflow {
        /// The operation that overflowed
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Lookup tables failed validation after construction
    #[error("Lookup table initialization failed: {0}")]
    TableInit(String),

    /// A different configuration has already been resolved for this process
    #[error("Configuration already resolved as {current}, cannot install {requested}")]
    ConfigConflict {
        /// Configuration in effect
        current: String,
        /// Configuration that was rejected
        requested: String,
    },
}

impl Error {
    /// Create an integer overflow error
    pub fn overflow(op: &'static str) -> Self {
        Self::Overflow { op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a table initialization error
    pub fn table_init(reason: impl Into<String>) -> Self {
        Self::TableInit(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::overflow("add_exact").to_string(),
            "Integer overflow in 'add_exact'"
        );
        assert_eq!(
            Error::invalid_argument("value", "must be positive").to_string(),
            "Invalid argument 'value': must be positive"
        );
        assert_eq!(
            Error::table_init("sin table has 3 entries").to_string(),
            "Lookup table initialization failed: sin table has 3 entries"
        );
    }
}
