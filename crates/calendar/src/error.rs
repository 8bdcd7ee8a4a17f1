//! Error types for the bridgeday-calendar crate.

/// Error type for the fallible operations in the bridgeday-calendar crate.
///
/// Calendar arithmetic and classification are total; only parsing textual
/// day keys can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day key is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid day key: {key:?} (expected YYYY-MM-DD)")]
    InvalidDayKey {
        /// The text that failed to parse.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_day_key() {
        let err = CalendarError::InvalidDayKey {
            key: "2025-02-30".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid day key: \"2025-02-30\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InvalidDayKey {
            key: "x".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
