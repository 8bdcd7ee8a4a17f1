//! Candidate holiday dates from uploaded documents.
//!
//! The planner only needs dates; this crate turns a holiday list exported
//! from an HR system, a spreadsheet saved as CSV or a pasted web page into
//! [`HolidayEntry`] values, or a typed [`ExtractError`].
//!
//! | Code | Cause |
//! |------|-------|
//! | `NO_DATES` | Text decoded but nothing date-like found |
//! | `SCANNED_PDF` | PDF without a text layer |
//! | `WORKER_FAILED` | Extractor initialization failed |
//! | `UNSUPPORTED_FORMAT` | PDF with text, office archive or image |
//! | `PARSE_ERROR` | Unreadable file or invalid UTF-8 |
//!
//! # Quick start
//!
//! ```
//! use bridgeday_extract::{ExtractConfig, Extractor, entry_dates};
//!
//! let extractor = Extractor::new(ExtractConfig::new()).unwrap();
//! let entries = extractor.extract(b"New Year's Day, 1 January 2025\n").unwrap();
//! assert_eq!(entry_dates(&entries).len(), 1);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod parse;
pub mod sniff;

pub use config::ExtractConfig;
pub use entry::{HolidayEntry, entry_dates};
pub use error::ExtractError;
pub use parse::Extractor;
pub use sniff::{DocumentFormat, sniff};
