// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar systems.
//!
//! A [`CalendarSystem`] interprets civil fields against a wall-clock
//! timeline: it overlays fields onto a base moment, extracts them back,
//! performs calendar-aware arithmetic and derives fields that are not
//! stored (weekday, week of year, ...).
//!
//! All operations work on zone-less [`NaiveDateTime`] values. Time-zone
//! resolution is the job of the [`AbsoluteTimeBridge`](crate::AbsoluteTimeBridge).
//!
//! | Calendar | Description |
//! |----------|-------------|
//! | [`Gregorian`] | Proleptic Gregorian calendar, no leap seconds |

use crate::error::{BridgeError, FieldError};
use crate::fields::{CivilFields, DateFields, TimeFields};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};

// chrono encodes a leap second as nanoseconds past 1e9.
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Unit of calendar-aware arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// A calendar field derived on demand rather than stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DateComponent {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    /// 1 = Monday … 7 = Sunday.
    Weekday,
    /// 1-based ordinal day within the year.
    DayOfYear,
    /// ISO 8601 week number (1–53).
    WeekOfYear,
    /// Year the ISO week belongs to; differs from `Year` around New Year.
    IsoWeekYear,
    /// 1–4.
    Quarter,
}

/// A calendar system usable by the absolute-time bridge.
pub trait CalendarSystem {
    /// Overwrites the fields present in `fields` onto `base`.
    ///
    /// Fields outside the record's set (sub-second precision always, the
    /// time of day for date-only records) keep the value they have in `base`.
    fn overlay(
        &self,
        base: NaiveDateTime,
        fields: &CivilFields,
    ) -> Result<NaiveDateTime, BridgeError>;

    /// Extracts the full field set of `local`.
    fn extract(&self, local: NaiveDateTime) -> (DateFields, TimeFields);

    /// Calendar-aware addition of `amount` units (negative to subtract).
    fn add(
        &self,
        local: NaiveDateTime,
        unit: CalendarUnit,
        amount: i64,
    ) -> Result<NaiveDateTime, BridgeError>;

    fn weekday(&self, date: NaiveDate) -> Weekday;

    fn component(&self, local: NaiveDateTime, component: DateComponent) -> i64;

    /// Whether `weekday` is a rest day. Saturday and Sunday by default.
    fn is_weekend(&self, weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Whole days from `from` to `to` (negative when `to` is earlier).
    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> i64;
}

/// The proleptic Gregorian calendar, as implemented by `chrono`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Gregorian {
    fn add_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
        let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
        if months >= 0 {
            local.checked_add_months(Months::new(magnitude))
        } else {
            local.checked_sub_months(Months::new(magnitude))
        }
    }

    fn add_delta(local: NaiveDateTime, delta: Option<TimeDelta>) -> Option<NaiveDateTime> {
        local.checked_add_signed(delta?)
    }
}

impl CalendarSystem for Gregorian {
    fn overlay(
        &self,
        base: NaiveDateTime,
        fields: &CivilFields,
    ) -> Result<NaiveDateTime, BridgeError> {
        fields.validate()?;
        let DateFields { year, month, day } = fields.date();
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(FieldError::InvalidDay { year, month, day })?;
        let nanos = base.nanosecond() % NANOS_PER_SECOND;
        let time = match fields.time() {
            Some(TimeFields {
                hour,
                minute,
                second,
            }) => NaiveTime::from_hms_nano_opt(hour, minute, second, nanos).ok_or(
                FieldError::OutOfRange {
                    field: "second",
                    value: second as i64,
                },
            )?,
            None => base.time(),
        };
        Ok(date.and_time(time))
    }

    fn extract(&self, local: NaiveDateTime) -> (DateFields, TimeFields) {
        (
            DateFields::new(local.year(), local.month(), local.day()),
            TimeFields::new(local.hour(), local.minute(), local.second()),
        )
    }

    fn add(
        &self,
        local: NaiveDateTime,
        unit: CalendarUnit,
        amount: i64,
    ) -> Result<NaiveDateTime, BridgeError> {
        let shifted = match unit {
            CalendarUnit::Year => amount.checked_mul(12).and_then(|m| Self::add_months(local, m)),
            CalendarUnit::Month => Self::add_months(local, amount),
            CalendarUnit::Week => Self::add_delta(local, TimeDelta::try_weeks(amount)),
            CalendarUnit::Day => Self::add_delta(local, TimeDelta::try_days(amount)),
            CalendarUnit::Hour => Self::add_delta(local, TimeDelta::try_hours(amount)),
            CalendarUnit::Minute => Self::add_delta(local, TimeDelta::try_minutes(amount)),
            CalendarUnit::Second => Self::add_delta(local, TimeDelta::try_seconds(amount)),
        };
        shifted.ok_or(BridgeError::Overflow { unit, amount })
    }

    fn weekday(&self, date: NaiveDate) -> Weekday {
        date.weekday()
    }

    fn component(&self, local: NaiveDateTime, component: DateComponent) -> i64 {
        match component {
            DateComponent::Year => local.year() as i64,
            DateComponent::Month => local.month() as i64,
            DateComponent::Day => local.day() as i64,
            DateComponent::Hour => local.hour() as i64,
            DateComponent::Minute => local.minute() as i64,
            DateComponent::Second => local.second() as i64,
            DateComponent::Weekday => self.weekday(local.date()).number_from_monday() as i64,
            DateComponent::DayOfYear => local.ordinal() as i64,
            DateComponent::WeekOfYear => local.iso_week().week() as i64,
            DateComponent::IsoWeekYear => local.iso_week().year() as i64,
            DateComponent::Quarter => ((local.month() - 1) / 3 + 1) as i64,
        }
    }

    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        to.signed_duration_since(from).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_nano_opt(h, min, s, 0)
            .unwrap()
    }

    #[test]
    fn test_overlay_date_keeps_base_time() {
        let base = NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_hms_nano_opt(14, 15, 16, 123_000_000)
            .unwrap();
        let fields = CivilFields::Date(DateFields::new(2022, 2, 28));
        let out = Gregorian.overlay(base, &fields).unwrap();
        assert_eq!(out.date(), NaiveDate::from_ymd_opt(2022, 2, 28).unwrap());
        assert_eq!(out.time(), base.time());
    }

    #[test]
    fn test_overlay_date_time_keeps_base_nanos_only() {
        let base = NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_hms_nano_opt(14, 15, 16, 500)
            .unwrap();
        let fields = CivilFields::DateTime(DateFields::new(2022, 2, 28), TimeFields::new(1, 2, 3));
        let out = Gregorian.overlay(base, &fields).unwrap();
        assert_eq!((out.hour(), out.minute(), out.second()), (1, 2, 3));
        assert_eq!(out.nanosecond(), 500);
    }

    #[test]
    fn test_overlay_rejects_invalid_fields() {
        let base = at(2030, 6, 1, 0, 0, 0);
        let fields = CivilFields::Date(DateFields::new(2022, 13, 1));
        assert!(matches!(
            Gregorian.overlay(base, &fields),
            Err(BridgeError::InvalidFields(FieldError::OutOfRange { field: "month", .. }))
        ));
    }

    #[test]
    fn test_extract_drops_subseconds() {
        let local = NaiveDate::from_ymd_opt(2022, 5, 7)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap();
        assert_eq!(
            Gregorian.extract(local),
            (DateFields::new(2022, 5, 7), TimeFields::new(23, 59, 59))
        );
    }

    #[test]
    fn test_add_month_clamps_to_month_end() {
        let jan31 = at(2022, 1, 31, 10, 0, 0);
        let out = Gregorian.add(jan31, CalendarUnit::Month, 1).unwrap();
        assert_eq!(out, at(2022, 2, 28, 10, 0, 0));

        let leap = Gregorian.add(at(2024, 1, 31, 0, 0, 0), CalendarUnit::Month, 1).unwrap();
        assert_eq!(leap, at(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn test_add_rolls_over_year() {
        let out = Gregorian.add(at(2022, 12, 15, 0, 0, 0), CalendarUnit::Month, 2).unwrap();
        assert_eq!(out, at(2023, 2, 15, 0, 0, 0));

        let back = Gregorian.add(at(2022, 1, 15, 0, 0, 0), CalendarUnit::Month, -1).unwrap();
        assert_eq!(back, at(2021, 12, 15, 0, 0, 0));

        let leap_year = Gregorian.add(at(2024, 2, 29, 0, 0, 0), CalendarUnit::Year, 1).unwrap();
        assert_eq!(leap_year, at(2025, 2, 28, 0, 0, 0));
    }

    #[test]
    fn test_add_time_units() {
        let start = at(2022, 5, 7, 23, 59, 59);
        assert_eq!(
            Gregorian.add(start, CalendarUnit::Second, 1).unwrap(),
            at(2022, 5, 8, 0, 0, 0)
        );
        assert_eq!(
            Gregorian.add(start, CalendarUnit::Hour, -24).unwrap(),
            at(2022, 5, 6, 23, 59, 59)
        );
        assert_eq!(
            Gregorian.add(start, CalendarUnit::Week, 1).unwrap(),
            at(2022, 5, 14, 23, 59, 59)
        );
    }

    #[test]
    fn test_add_overflow_is_error() {
        let start = at(2022, 5, 7, 0, 0, 0);
        assert_eq!(
            Gregorian.add(start, CalendarUnit::Year, i64::MAX),
            Err(BridgeError::Overflow {
                unit: CalendarUnit::Year,
                amount: i64::MAX
            })
        );
        assert!(Gregorian.add(start, CalendarUnit::Day, i64::MAX).is_err());
    }

    #[test]
    fn test_components() {
        // Sunday 2023-01-01 belongs to ISO week 52 of 2022.
        let day = at(2023, 1, 1, 9, 30, 0);
        assert_eq!(Gregorian.component(day, DateComponent::Weekday), 7);
        assert_eq!(Gregorian.component(day, DateComponent::WeekOfYear), 52);
        assert_eq!(Gregorian.component(day, DateComponent::IsoWeekYear), 2022);
        assert_eq!(Gregorian.component(day, DateComponent::Year), 2023);
        assert_eq!(Gregorian.component(day, DateComponent::DayOfYear), 1);
        assert_eq!(Gregorian.component(day, DateComponent::Quarter), 1);
        assert_eq!(Gregorian.component(at(2023, 12, 31, 0, 0, 0), DateComponent::DayOfYear), 365);
        assert_eq!(Gregorian.component(at(2023, 10, 1, 0, 0, 0), DateComponent::Quarter), 4);
    }

    #[test]
    fn test_weekend() {
        let saturday = NaiveDate::from_ymd_opt(2022, 5, 7).unwrap();
        assert_eq!(Gregorian.weekday(saturday), Weekday::Sat);
        assert!(Gregorian.is_weekend(Weekday::Sat));
        assert!(Gregorian.is_weekend(Weekday::Sun));
        assert!(!Gregorian.is_weekend(Weekday::Mon));
    }

    #[test]
    fn test_days_between() {
        let a = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(Gregorian.days_between(a, b), 365);
        assert_eq!(Gregorian.days_between(b, a), -365);
    }
}
