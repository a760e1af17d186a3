//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! Provides functional combinators for Result types, enabling clean error handling
//! without unwrap/expect/panic.

use crate::error::Error;

/// The standard Result type for Orin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing safe combinators for Results.
///
/// Browser callbacks have nowhere to propagate an error to, so they use these
/// to log and carry on.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<i32> = Err(Error::EmptyEmail);
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_or_default_logged_falls_back() {
        let result: Result<i32> = Err(Error::UnknownSection("x".to_string()));
        assert_eq!(result.or_default_logged(7), 7);
    }
}
