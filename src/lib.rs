// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil Time
//!
//! This crate provides local (civil) date and time values: calendar fields
//! with no attached instant or time zone.
//!
//! # Core types
//!
//! - [`LocalDate`] — a `{year, month, day}` date.
//! - [`LocalDateTime`] — a date plus `{hour, minute, second}`.
//! - [`CivilInstant`] — trait shared by both, used for ordering and ranges.
//! - [`Range<T>`] — closed range with intersection; aliases
//!   [`LocalDateRange`] and [`LocalDateTimeRange`].
//! - [`AbsoluteTimeBridge`] — conversion to and from `DateTime<Utc>` for a
//!   given time zone, [`CalendarSystem`] and [`CurrentTimeProvider`].
//!
//! # Cheap and expensive operations
//!
//! Construction from fields, comparison, hashing, [`is_same_day`](LocalDateTime::is_same_day),
//! the `midnight` / `end_of_day` / `start_of_year` projections and ISO text
//! all work on stored fields only.
//!
//! Weekday, weekend, derived fields such as the ISO week, and calendar
//! arithmetic depend on a calendar and a time zone. They take an
//! [`AbsoluteTimeBridge`] argument and should be treated as expensive.
//!
//! # Ordering
//!
//! Values order by a mixed-radix key over their fields (31-day months,
//! 12-month years), which is monotonic for in-range fields but is not a
//! duration. Use [`Range::duration_days`] / [`Range::duration_seconds`] for
//! elapsed time.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | values encode as their ISO string, ranges as `{from, to}` |
//! | `logging` | bridge and cache diagnostics through the `log` crate |

#[macro_use]
mod logging;

mod bridge;
mod calendar;
mod clock;
mod date;
mod datetime;
mod error;
mod fields;
mod format;
mod instant;
mod iso;
mod range;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use bridge::AbsoluteTimeBridge;
pub use calendar::{CalendarSystem, CalendarUnit, DateComponent, Gregorian};
pub use clock::{CurrentTimeProvider, FixedClock, SystemClock};
pub use date::LocalDate;
pub use datetime::LocalDateTime;
pub use error::{BridgeError, FieldError, ParseError};
pub use fields::{CivilFields, DateFields, TimeFields};
pub use format::{DateStyle, FormattingService, HourCycleCache, TimeFormatter};
pub use instant::CivilInstant;
pub use range::{intersect_ranges, LocalDateRange, LocalDateTimeRange, Range};
