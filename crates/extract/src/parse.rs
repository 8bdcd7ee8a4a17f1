//! Line-oriented date harvesting.

use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::entry::HolidayEntry;
use crate::error::ExtractError;
use crate::sniff::{DocumentFormat, sniff};

const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|\
                      aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Characters trimmed from both ends of a label.
const LABEL_SEPARATORS: &[char] = &['-', '\u{2013}', '\u{2014}', ':', ',', ';', '|', '*', '\u{2022}'];

/// Which textual shape a pattern recognises.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`
    YearFirst,
    /// `DD/MM/YYYY` or `MM/DD/YYYY`
    YearLast,
    /// `D Month YYYY`
    DayMonthName,
    /// `Month D, YYYY`
    MonthNameDay,
}

/// Extracts holiday dates from documents.
///
/// Construct once with [`Extractor::new`] and reuse; the date patterns are
/// compiled up front and the handle holds no mutable state.
///
/// # Example
///
/// ```
/// use bridgeday_extract::{ExtractConfig, Extractor};
///
/// let extractor = Extractor::new(ExtractConfig::new()).unwrap();
/// let entries = extractor
///     .extract(b"2025-12-25  Christmas Day\n26 December 2025 - Boxing Day\n")
///     .unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].name.as_deref(), Some("Boxing Day"));
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractConfig,
    patterns: Vec<(Shape, Regex)>,
}

impl Extractor {
    /// Compiles the date patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::WorkerFailed`] if a pattern fails to compile.
    pub fn new(config: ExtractConfig) -> Result<Self, ExtractError> {
        let sources = [
            (
                Shape::YearFirst,
                r"\b(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})\b".to_string(),
            ),
            (
                Shape::YearLast,
                r"\b(\d{1,2})[-/.](\d{1,2})[-/.](\d{4})\b".to_string(),
            ),
            (
                Shape::DayMonthName,
                format!(r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTHS})\b\.?,?\s+(\d{{4}})\b"),
            ),
            (
                Shape::MonthNameDay,
                format!(r"(?i)\b({MONTHS})\b\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"),
            ),
        ];
        let patterns = sources
            .into_iter()
            .map(|(shape, src)| {
                Regex::new(&src)
                    .map(|re| (shape, re))
                    .map_err(|e| ExtractError::worker_failed(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { config, patterns })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts dated entries from a document's bytes.
    ///
    /// Entries are de-duplicated by date (the first label seen wins) and
    /// sorted ascending.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::ScannedPdf`] for a PDF without fonts.
    /// - [`ExtractError::UnsupportedFormat`] for other PDFs, ZIP-based
    ///   office files and images.
    /// - [`ExtractError::ParseError`] if the bytes are not UTF-8.
    /// - [`ExtractError::NoDates`] if nothing date-like is found.
    #[tracing::instrument(skip_all, fields(n_bytes = bytes.len()))]
    pub fn extract(&self, bytes: &[u8]) -> Result<Vec<HolidayEntry>, ExtractError> {
        match sniff(bytes) {
            DocumentFormat::Text => {}
            DocumentFormat::Pdf { has_fonts: false } => return Err(ExtractError::scanned_pdf()),
            other => return Err(ExtractError::unsupported_format(other.name())),
        }

        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let text =
            std::str::from_utf8(body).map_err(|e| ExtractError::parse_error(e.to_string()))?;

        let mut found: BTreeMap<NaiveDate, Option<String>> = BTreeMap::new();
        for line in text.lines() {
            let (dates, label) = self.scan_line(line);
            for date in dates {
                found.entry(date).or_insert_with(|| label.clone());
            }
        }

        if found.is_empty() {
            return Err(ExtractError::no_dates());
        }

        info!(n_entries = found.len(), "extracted holiday dates");
        Ok(found
            .into_iter()
            .map(|(date, name)| HolidayEntry { date, name })
            .collect())
    }

    /// Reads `path` and extracts from its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ParseError`] if the file cannot be read,
    /// otherwise whatever [`Extractor::extract`] returns.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Vec<HolidayEntry>, ExtractError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ExtractError::parse_error(format!("{}: {e}", path.display())))?;
        self.extract(&bytes)
    }

    /// Finds the dates on one line and the leftover text as a label.
    fn scan_line(&self, line: &str) -> (Vec<NaiveDate>, Option<String>) {
        let mut hits: Vec<(Range<usize>, NaiveDate)> = Vec::new();
        for (shape, re) in &self.patterns {
            for caps in re.captures_iter(line) {
                let Some(whole) = caps.get(0) else { continue };
                let range = whole.range();
                if hits.iter().any(|(r, _)| overlaps(r, &range)) {
                    continue;
                }
                match self.date_from(*shape, &caps) {
                    Some(date) => hits.push((range, date)),
                    None => debug!(text = whole.as_str(), "skipping impossible date"),
                }
            }
        }
        if hits.is_empty() {
            return (Vec::new(), None);
        }

        hits.sort_by_key(|(r, _)| r.start);
        let mut rest = String::with_capacity(line.len());
        let mut cursor = 0;
        for (r, _) in &hits {
            rest.push_str(&line[cursor..r.start]);
            rest.push(' ');
            cursor = r.end;
        }
        rest.push_str(&line[cursor..]);

        let label = rest.split_whitespace().collect::<Vec<_>>().join(" ");
        let label = label
            .trim_matches(|c: char| c.is_whitespace() || LABEL_SEPARATORS.contains(&c))
            .to_string();
        let label = (!label.is_empty()).then_some(label);

        (hits.into_iter().map(|(_, d)| d).collect(), label)
    }

    fn date_from(&self, shape: Shape, caps: &Captures<'_>) -> Option<NaiveDate> {
        let num = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
        let (year, month, day) = match shape {
            Shape::YearFirst => (num(1)?, num(2)?, num(3)?),
            Shape::YearLast if self.config.day_first() => (num(3)?, num(2)?, num(1)?),
            Shape::YearLast => (num(3)?, num(1)?, num(2)?),
            Shape::DayMonthName => (num(3)?, month_number(caps.get(2)?.as_str())?, num(1)?),
            Shape::MonthNameDay => (num(3)?, month_number(caps.get(1)?.as_str())?, num(2)?),
        };
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Month number from an English month name or its abbreviation.
fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).flat_map(char::to_lowercase).collect();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
