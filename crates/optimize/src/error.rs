//! Error types for the bridgeday-optimize crate.

/// Error type for optimizer configuration validation.
///
/// The optimizer itself is total; these errors are only produced by
/// [`OptimizerConfig::validate`](crate::OptimizerConfig::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    /// Returned when the consecutive working-day leave cap is zero.
    #[error("max_consecutive_leave must be >= 1, got {value}")]
    InvalidMaxConsecutiveLeave {
        /// The invalid cap.
        value: usize,
    },

    /// Returned when the before/after seed window is zero.
    #[error("seed_window must be >= 1, got {value}")]
    InvalidSeedWindow {
        /// The invalid window length.
        value: usize,
    },

    /// Returned when the holiday-anchor radius is zero.
    #[error("anchor_radius must be >= 1, got {value}")]
    InvalidAnchorRadius {
        /// The invalid radius in days.
        value: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_max_consecutive_leave() {
        let e = OptimizeError::InvalidMaxConsecutiveLeave { value: 0 };
        assert_eq!(e.to_string(), "max_consecutive_leave must be >= 1, got 0");
    }

    #[test]
    fn error_invalid_seed_window() {
        let e = OptimizeError::InvalidSeedWindow { value: 0 };
        assert_eq!(e.to_string(), "seed_window must be >= 1, got 0");
    }

    #[test]
    fn error_invalid_anchor_radius() {
        let e = OptimizeError::InvalidAnchorRadius { value: 0 };
        assert_eq!(e.to_string(), "anchor_radius must be >= 1, got 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<OptimizeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<OptimizeError>();
    }
}
