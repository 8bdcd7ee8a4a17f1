//! Error types for the bridgeday-extract crate.

/// Typed extraction failure.
///
/// Every variant carries a human-readable `message` and an optional
/// `detail` (the underlying decoder or I/O message, the detected format).
/// [`ExtractError::code`] gives the stable machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The document decoded fine but contains no recognisable dates.
    #[error("{message}")]
    NoDates {
        /// Human-readable message.
        message: String,
        /// Optional detail.
        detail: Option<String>,
    },

    /// A PDF without any font resources, i.e. scanned images only.
    #[error("{message}")]
    ScannedPdf {
        /// Human-readable message.
        message: String,
        /// Optional detail.
        detail: Option<String>,
    },

    /// The extractor could not be initialized.
    #[error("{message}")]
    WorkerFailed {
        /// Human-readable message.
        message: String,
        /// Optional detail.
        detail: Option<String>,
    },

    /// A binary format this extractor cannot read.
    #[error("{message}")]
    UnsupportedFormat {
        /// Human-readable message.
        message: String,
        /// Optional detail.
        detail: Option<String>,
    },

    /// The document could not be read or decoded as text.
    #[error("{message}")]
    ParseError {
        /// Human-readable message.
        message: String,
        /// Optional detail.
        detail: Option<String>,
    },
}

impl ExtractError {
    pub(crate) fn no_dates() -> Self {
        Self::NoDates {
            message: "no dates found in document".to_string(),
            detail: None,
        }
    }

    pub(crate) fn scanned_pdf() -> Self {
        Self::ScannedPdf {
            message: "PDF contains no text layer".to_string(),
            detail: Some("scanned documents need OCR before extraction".to_string()),
        }
    }

    pub(crate) fn worker_failed(detail: impl Into<String>) -> Self {
        Self::WorkerFailed {
            message: "failed to initialize date extractor".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: "unsupported document format".to_string(),
            detail: Some(format.into()),
        }
    }

    pub(crate) fn parse_error(detail: impl Into<String>) -> Self {
        Self::ParseError {
            message: "failed to read document".to_string(),
            detail: Some(detail.into()),
        }
    }

    /// Stable machine-readable code, e.g. `"NO_DATES"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoDates { .. } => "NO_DATES",
            Self::ScannedPdf { .. } => "SCANNED_PDF",
            Self::WorkerFailed { .. } => "WORKER_FAILED",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::ParseError { .. } => "PARSE_ERROR",
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::NoDates { message, .. }
            | Self::ScannedPdf { message, .. }
            | Self::WorkerFailed { message, .. }
            | Self::UnsupportedFormat { message, .. }
            | Self::ParseError { message, .. } => message,
        }
    }

    /// Optional detail string.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::NoDates { detail, .. }
            | Self::ScannedPdf { detail, .. }
            | Self::WorkerFailed { detail, .. }
            | Self::UnsupportedFormat { detail, .. }
            | Self::ParseError { detail, .. } => detail.as_deref(),
        }
    }
}
