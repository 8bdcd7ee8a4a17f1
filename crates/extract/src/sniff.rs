//! Magic-byte format detection.

/// Document format detected from the leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Anything without a recognised binary signature.
    Text,
    /// `%PDF-`; `has_fonts` is false for image-only (scanned) files.
    Pdf {
        /// Whether any `/Font` resource appears in the file.
        has_fonts: bool,
    },
    /// `PK\x03\x04`: docx, xlsx, odt and friends.
    Zip,
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
}

impl DocumentFormat {
    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "plain text",
            Self::Pdf { .. } => "PDF document",
            Self::Zip => "ZIP-based office document",
            Self::Png => "PNG image",
            Self::Jpeg => "JPEG image",
        }
    }
}

/// Detects the format of `bytes`.
pub fn sniff(bytes: &[u8]) -> DocumentFormat {
    if bytes.starts_with(b"%PDF-") {
        let has_fonts = bytes.windows(5).any(|w| w == b"/Font");
        DocumentFormat::Pdf { has_fonts }
    } else if bytes.starts_with(b"PK\x03\x04") {
        DocumentFormat::Zip
    } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        DocumentFormat::Png
    } else if bytes.starts_with(b"\xff\xd8\xff") {
        DocumentFormat::Jpeg
    } else {
        DocumentFormat::Text
    }
}
