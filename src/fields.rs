// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field-complete civil records.
//!
//! A [`DateFields`] always carries a year, a month and a day; a
//! [`TimeFields`] always carries an hour, a minute and a second. There is
//! no way to express a partially-specified record: every constructor
//! takes every field.
//!
//! Values are **not** range-checked on construction. [`DateFields::validate`]
//! and [`TimeFields::validate`] check them against the proleptic Gregorian
//! calendar, and every absolute-time conversion runs those checks first.

use crate::error::FieldError;
use chrono::NaiveDate;

/// Width of a month in the ordering key. Deliberately not a real month length.
const KEY_DAYS_PER_MONTH: i64 = 31;
const KEY_MONTHS_PER_YEAR: i64 = 12;
const KEY_HOURS_PER_DAY: i64 = 24;
const KEY_MINUTES_PER_HOUR: i64 = 60;
const KEY_SECONDS_PER_MINUTE: i64 = 60;

/// Calendar date fields: `{year, month, day}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateFields {
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Mixed-radix ordering key `day + 31 * (month + 12 * year)`.
    ///
    /// Monotonic in `(year, month, day)` for in-range fields. It is not a
    /// day count and must not be used for duration arithmetic.
    #[inline]
    pub const fn linear_timestamp(&self) -> i64 {
        self.day as i64
            + KEY_DAYS_PER_MONTH * (self.month as i64 + KEY_MONTHS_PER_YEAR * self.year as i64)
    }

    /// Checks the fields name a real day of the proleptic Gregorian calendar.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !(1..=12).contains(&self.month) {
            return Err(FieldError::OutOfRange {
                field: "month",
                value: self.month as i64,
            });
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, 1).is_none() {
            return Err(FieldError::OutOfRange {
                field: "year",
                value: self.year as i64,
            });
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(FieldError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }
}

/// Time-of-day fields: `{hour, minute, second}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeFields {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeFields {
    /// `00:00:00`.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);
    /// `23:59:59`.
    pub const END_OF_DAY: Self = Self::new(23, 59, 59);

    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Seconds into the day under the ordering key's radix.
    #[inline]
    const fn key_seconds(&self) -> i64 {
        self.second as i64
            + KEY_SECONDS_PER_MINUTE
                * (self.minute as i64 + KEY_MINUTES_PER_HOUR * self.hour as i64)
    }

    /// Checks `hour < 24`, `minute < 60` and `second < 60`.
    ///
    /// Leap seconds are not representable.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (field, value, limit) in [
            ("hour", self.hour, 24),
            ("minute", self.minute, 60),
            ("second", self.second, 60),
        ] {
            if value >= limit {
                return Err(FieldError::OutOfRange {
                    field,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }
}

impl Default for TimeFields {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

/// A complete civil record: either date-only or date plus time-of-day.
///
/// This is the currency of the absolute-time bridge. Which variant a value
/// is also tells the bridge which fields to overwrite and which to inherit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CivilFields {
    Date(DateFields),
    DateTime(DateFields, TimeFields),
}

impl CivilFields {
    #[inline]
    pub const fn date(&self) -> DateFields {
        match self {
            CivilFields::Date(date) | CivilFields::DateTime(date, _) => *date,
        }
    }

    /// Time-of-day fields, `None` for the date-only variant.
    #[inline]
    pub const fn time(&self) -> Option<TimeFields> {
        match self {
            CivilFields::Date(_) => None,
            CivilFields::DateTime(_, time) => Some(*time),
        }
    }

    /// Same variant as `self`, carrying `date` (and `time` when date-time).
    pub fn with_fields(&self, date: DateFields, time: TimeFields) -> Self {
        match self {
            CivilFields::Date(_) => CivilFields::Date(date),
            CivilFields::DateTime(..) => CivilFields::DateTime(date, time),
        }
    }

    /// Mixed-radix ordering key for whichever variant this is.
    ///
    /// `second + 60 * (minute + 60 * (hour + 24 * (day + 31 * (month + 12 * year))))`
    /// for date-times, [`DateFields::linear_timestamp`] for dates.
    pub const fn linear_timestamp(&self) -> i64 {
        match self {
            CivilFields::Date(date) => date.linear_timestamp(),
            CivilFields::DateTime(date, time) => {
                time.key_seconds()
                    + KEY_SECONDS_PER_MINUTE
                        * KEY_MINUTES_PER_HOUR
                        * KEY_HOURS_PER_DAY
                        * date.linear_timestamp()
            }
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        self.date().validate()?;
        if let Some(time) = self.time() {
            time.validate()?;
        }
        Ok(())
    }
}
