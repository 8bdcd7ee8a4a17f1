//! # bridgeday-calendar
//!
//! Pure day-granularity date utilities for leave planning.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDateTime / DateTime"] -->|"normalize()"| B["NaiveDate"]
//!     B -->|"add_days()"| B
//!     B -->|"day_key()"| C["YYYY-MM-DD"]
//!     C -->|"parse_day_key()"| B
//!     D["holiday dates"] -->|"HolidaySet::from_iter()"| E["HolidaySet"]
//!     B -->|"classify()"| F["DayKind"]
//!     E --> F
//!     B -->|"date_range()"| G["Vec of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bridgeday_calendar::{DayKind, HolidaySet, classify, date_range, parse_day_key};
//! use std::collections::BTreeSet;
//!
//! let new_year = parse_day_key("2025-01-01").unwrap(); // a Wednesday
//! let holidays: HolidaySet = [new_year].into_iter().collect();
//!
//! let week = date_range(new_year, parse_day_key("2025-01-05").unwrap());
//! let kinds: Vec<DayKind> = week
//!     .iter()
//!     .map(|&d| classify(d, &holidays, &BTreeSet::new()))
//!     .collect();
//! assert_eq!(kinds[0], DayKind::Holiday);
//! assert_eq!(kinds[1], DayKind::WorkingDay);
//! assert_eq!(kinds[3], DayKind::Weekend);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Normalization, functional day arithmetic, day keys |
//! | `holidays` | De-duplicated, sorted holiday set |
//! | `classify` | Holiday / weekend / leave / working-day classification |
//! | `sequence` | Inclusive date ranges |
//! | `error` | Error types |

mod classify;
mod date;
mod error;
mod holidays;
mod sequence;

pub use classify::{DayKind, classify, is_holiday, is_weekend, is_working_day};
pub use date::{ToDay, add_days, day_key, days_between, normalize, parse_day_key};
pub use error::CalendarError;
pub use holidays::HolidaySet;
pub use sequence::date_range;
