//! Configuration for date extraction.

/// Configuration for [`Extractor`](crate::Extractor).
///
/// # Example
///
/// ```
/// use bridgeday_extract::ExtractConfig;
///
/// let config = ExtractConfig::new().with_day_first(false);
/// assert!(!config.day_first());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    day_first: bool,
}

impl ExtractConfig {
    /// Creates a config that reads `03/04/2025` as 3 April.
    pub fn new() -> Self {
        Self { day_first: true }
    }

    /// Sets whether ambiguous numeric dates are day-first (`DD/MM/YYYY`)
    /// or month-first (`MM/DD/YYYY`).
    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.day_first = day_first;
        self
    }

    /// Returns whether numeric dates are read day-first.
    pub fn day_first(&self) -> bool {
        self.day_first
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new()
    }
}
