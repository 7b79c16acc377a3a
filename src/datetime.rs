// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date and time of day.

use crate::bridge::AbsoluteTimeBridge;
use crate::calendar::{CalendarSystem, CalendarUnit, DateComponent};
use crate::clock::CurrentTimeProvider;
use crate::date::LocalDate;
use crate::error::{BridgeError, FieldError, ParseError};
use crate::fields::{CivilFields, DateFields, TimeFields};
use crate::format::{FormattingService, TimeFormatter};
use crate::instant::CivilInstant;
use crate::iso;
use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc, Weekday};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date plus a time of day (second precision), without a zone.
///
/// Like [`LocalDate`], every field is always present and construction from
/// explicit fields never validates them; bridge operations do.
///
/// # Examples
///
/// ```
/// use civiltime::LocalDateTime;
///
/// let late = LocalDateTime::new(2022, 5, 7, 23, 59, 59);
/// let next = LocalDateTime::new(2022, 5, 8, 0, 0, 0);
/// assert!(late < next);
/// assert!(late.is_same_day(&late.midnight()));
/// assert_eq!(late.to_iso(), "2022-05-07T23:59:59");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LocalDateTime {
    date: DateFields,
    time: TimeFields,
}

impl LocalDateTime {
    // ── constructors ──────────────────────────────────────────────────

    #[inline]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            date: DateFields::new(year, month, day),
            time: TimeFields::new(hour, minute, second),
        }
    }

    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, FieldError> {
        let value = Self::new(year, month, day, hour, minute, second);
        value.civil_fields().validate()?;
        Ok(value)
    }

    #[inline]
    pub const fn from_fields(date: DateFields, time: TimeFields) -> Self {
        Self { date, time }
    }

    /// The current civil date and time as read from `clock`.
    pub fn now<P: CurrentTimeProvider>(clock: &P) -> Self {
        Self::from(clock.now().naive_local())
    }

    /// Today's date from `clock` at the given time of day.
    pub fn today_at<P: CurrentTimeProvider>(
        clock: &P,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        LocalDate::today(clock).at(hour, minute, second)
    }

    /// The civil date and time of `instant` in the bridge's zone.
    pub fn from_absolute<Tz, C, P>(
        instant: DateTime<Utc>,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Self
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        let fields = bridge.from_absolute(instant);
        Self::from_fields(fields.date(), fields.time().unwrap_or_default())
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS`.
    pub fn parse_iso(text: &str) -> Result<Self, ParseError> {
        let (date, time) = iso::parse_date_time(text)?;
        Ok(Self::from_fields(date, time))
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.date.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.date.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.date.day
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.time.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.time.minute
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.time.second
    }

    #[inline]
    pub const fn date_fields(&self) -> DateFields {
        self.date
    }

    #[inline]
    pub const fn time_fields(&self) -> TimeFields {
        self.time
    }

    #[inline]
    pub const fn civil_fields(&self) -> CivilFields {
        CivilFields::DateTime(self.date, self.time)
    }

    /// See [`CivilFields::linear_timestamp`].
    #[inline]
    pub const fn linear_timestamp(&self) -> i64 {
        self.civil_fields().linear_timestamp()
    }

    // ── pure projections ──────────────────────────────────────────────

    /// The date, time of day dropped.
    #[inline]
    pub const fn date(&self) -> LocalDate {
        LocalDate::from_fields(self.date)
    }

    /// `00:00:00` on the same date.
    #[inline]
    pub const fn midnight(&self) -> Self {
        Self::from_fields(self.date, TimeFields::MIDNIGHT)
    }

    /// `23:59:59` on the same date.
    #[inline]
    pub const fn end_of_day(&self) -> Self {
        Self::from_fields(self.date, TimeFields::END_OF_DAY)
    }

    #[inline]
    pub fn is_same_day<O: CivilInstant>(&self, other: &O) -> bool {
        CivilInstant::is_same_day(self, other)
    }

    // ── bridge operations (expensive) ─────────────────────────────────

    pub fn to_absolute<Tz, C, P>(
        &self,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<DateTime<Utc>, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        bridge.to_absolute(&self.civil_fields())
    }

    pub fn date_component<Tz, C, P>(
        &self,
        component: DateComponent,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<i64, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        bridge.component(&self.civil_fields(), component)
    }

    pub fn add_calendar_unit<Tz, C, P>(
        &self,
        unit: CalendarUnit,
        amount: i64,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<Self, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        let shifted = bridge.add(&self.civil_fields(), unit, amount)?;
        Ok(Self::from_fields(shifted.date(), shifted.time().unwrap_or_default()))
    }

    pub fn weekday<Tz, C, P>(
        &self,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<Weekday, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        bridge.weekday(&self.civil_fields())
    }

    pub fn is_weekend<Tz, C, P>(
        &self,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<bool, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        bridge.is_weekend(&self.civil_fields())
    }

    // ── text ──────────────────────────────────────────────────────────

    /// Fixed-width `YYYY-MM-DDTHH:MM:SS`.
    pub fn to_iso(&self) -> String {
        self.to_string()
    }

    /// Minute-precision, locale-aware time of day (`"19:05"`, `"7:05 PM"`).
    pub fn hour_minutes<F: FormattingService>(
        &self,
        locale: &str,
        formatter: &TimeFormatter<F>,
    ) -> String {
        formatter.hour_minutes(&self.time, locale)
    }
}

impl CivilInstant for LocalDateTime {
    #[inline]
    fn year(&self) -> i32 {
        self.date.year
    }

    #[inline]
    fn month(&self) -> u32 {
        self.date.month
    }

    #[inline]
    fn day(&self) -> u32 {
        self.date.day
    }

    #[inline]
    fn linear_timestamp(&self) -> i64 {
        self.civil_fields().linear_timestamp()
    }
}

impl Ord for LocalDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.linear_timestamp()
            .cmp(&other.linear_timestamp())
            .then_with(|| (self.date, self.time).cmp(&(other.date, other.time)))
    }
}

impl PartialOrd for LocalDateTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        iso::write_date_time(f, &self.date, &self.time)
    }
}

impl FromStr for LocalDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }
}

impl From<LocalDate> for LocalDateTime {
    #[inline]
    fn from(date: LocalDate) -> Self {
        date.midnight()
    }
}

impl TryFrom<LocalDateTime> for NaiveDateTime {
    type Error = FieldError;

    fn try_from(value: LocalDateTime) -> Result<Self, Self::Error> {
        let date = chrono::NaiveDate::try_from(value.date())?;
        let TimeFields {
            hour,
            minute,
            second,
        } = value.time;
        value.time.validate()?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(FieldError::OutOfRange {
            field: "second",
            value: second as i64,
        })?;
        Ok(date.and_time(time))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Serialized as the [`to_iso`](LocalDateTime::to_iso) text; like
/// [`LocalDate`], negative years do not round-trip.
#[cfg(feature = "serde")]
impl Serialize for LocalDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for LocalDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse_iso(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Gregorian;
    use crate::clock::FixedClock;
    use crate::format::tests::StubFormatting;
    use chrono::FixedOffset;

    fn fixed_bridge(offset_hours: i32) -> AbsoluteTimeBridge<FixedOffset, Gregorian, FixedClock> {
        let now = DateTime::parse_from_rfc3339("2030-06-01T08:00:00.5Z").unwrap();
        let zone = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        AbsoluteTimeBridge::new(zone).with_clock(FixedClock(now))
    }

    #[test]
    fn test_ordering_across_day_boundary() {
        let late = LocalDateTime::new(2022, 5, 7, 23, 59, 59);
        assert!(late < LocalDateTime::new(2022, 5, 8, 0, 0, 0));
    }

    #[test]
    fn test_ordering_across_years() {
        let feb_2022 = LocalDateTime::new(2022, 2, 1, 0, 0, 0);
        let dec_2021 = LocalDateTime::new(2021, 12, 12, 0, 0, 0);
        let feb_2021 = LocalDateTime::new(2021, 2, 1, 0, 0, 0);
        assert!(feb_2022 > dec_2021);
        assert!(feb_2021 < dec_2021);
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let late = LocalDateTime::new(2022, 5, 7, 23, 59, 59);
        let early = LocalDateTime::new(2022, 5, 7, 0, 0, 0);
        assert!(late.is_same_day(&early));
        assert!(!late.is_same_day(&LocalDateTime::new(2022, 5, 8, 0, 0, 0)));
        assert!(late.is_same_day(&LocalDate::new(2022, 5, 7)));
    }

    #[test]
    fn test_midnight_and_end_of_day() {
        let dt = LocalDateTime::new(2022, 5, 7, 13, 14, 15);
        let midnight = dt.midnight();
        let end = dt.end_of_day();
        assert_eq!((midnight.year(), midnight.month(), midnight.day()), (2022, 5, 7));
        assert_eq!((midnight.hour(), midnight.minute(), midnight.second()), (0, 0, 0));
        assert_eq!((end.year(), end.month(), end.day()), (2022, 5, 7));
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
    }

    #[test]
    fn test_date_projection() {
        let dt = LocalDateTime::new(2022, 5, 7, 13, 14, 15);
        assert_eq!(dt.date(), LocalDate::new(2022, 5, 7));
        assert_eq!(LocalDate::from(dt), LocalDate::new(2022, 5, 7));
        assert_eq!(LocalDateTime::from(LocalDate::new(2022, 5, 7)), dt.midnight());
    }

    #[test]
    fn test_iso_encode_and_parse() {
        let dt = LocalDateTime::new(5, 1, 2, 3, 4, 5);
        assert_eq!(dt.to_iso(), "0005-01-02T03:04:05");
        assert_eq!("0005-01-02T03:04:05".parse::<LocalDateTime>(), Ok(dt));
        assert!(matches!(
            LocalDateTime::parse_iso("2022-05-07T10:00"),
            Err(ParseError::TokenCount {
                expected: 6,
                found: 5
            })
        ));
    }

    #[test]
    fn test_now_and_today_at() {
        let clock = FixedClock(DateTime::parse_from_rfc3339("2022-05-07T23:30:10-04:00").unwrap());
        assert_eq!(LocalDateTime::now(&clock), LocalDateTime::new(2022, 5, 7, 23, 30, 10));
        assert_eq!(
            LocalDateTime::today_at(&clock, 9, 0, 0),
            LocalDateTime::new(2022, 5, 7, 9, 0, 0)
        );
    }

    #[test]
    fn test_absolute_round_trip() {
        let b = fixed_bridge(-3);
        let dt = LocalDateTime::new(2022, 5, 7, 22, 15, 0);
        let instant = dt.to_absolute(&b).unwrap();
        let expected = Utc.with_ymd_and_hms(2022, 5, 8, 1, 15, 0).unwrap();
        assert_eq!(instant, expected + chrono::TimeDelta::milliseconds(500));
        assert_eq!(LocalDateTime::from_absolute(instant, &b), dt);
    }

    #[test]
    fn test_add_calendar_unit() {
        let b = fixed_bridge(0);
        let dt = LocalDateTime::new(2022, 1, 31, 23, 59, 59);
        assert_eq!(
            dt.add_calendar_unit(CalendarUnit::Second, 1, &b).unwrap(),
            LocalDateTime::new(2022, 2, 1, 0, 0, 0)
        );
        assert_eq!(
            dt.add_calendar_unit(CalendarUnit::Month, 1, &b).unwrap(),
            LocalDateTime::new(2022, 2, 28, 23, 59, 59)
        );
        assert_eq!(
            dt.add_calendar_unit(CalendarUnit::Minute, -60, &b).unwrap(),
            LocalDateTime::new(2022, 1, 31, 22, 59, 59)
        );
    }

    #[test]
    fn test_weekend_and_component() {
        let b = fixed_bridge(0);
        let dt = LocalDateTime::new(2022, 5, 8, 12, 0, 0);
        assert_eq!(dt.weekday(&b).unwrap(), Weekday::Sun);
        assert!(dt.is_weekend(&b).unwrap());
        assert_eq!(dt.date_component(DateComponent::Hour, &b).unwrap(), 12);
        assert_eq!(dt.date_component(DateComponent::Quarter, &b).unwrap(), 2);
    }

    #[test]
    fn test_invalid_time_rejected_by_bridge() {
        let b = fixed_bridge(0);
        let bad = LocalDateTime::new(2022, 5, 8, 25, 0, 0);
        assert!(matches!(
            bad.to_absolute(&b),
            Err(BridgeError::InvalidFields(FieldError::OutOfRange { field: "hour", .. }))
        ));
        assert!(LocalDateTime::try_new(2022, 5, 8, 25, 0, 0).is_err());
    }

    #[test]
    fn test_hour_minutes() {
        let f = TimeFormatter::new(StubFormatting::default());
        let dt = LocalDateTime::new(2022, 5, 7, 19, 5, 42);
        assert_eq!(dt.hour_minutes("de_DE", &f), "19:05");
        assert_eq!(dt.hour_minutes("en_US", &f), "7:05 PM");
    }

    #[test]
    fn test_naive_conversions() {
        let naive = chrono::NaiveDate::from_ymd_opt(2022, 5, 7)
            .unwrap()
            .and_hms_opt(13, 14, 15)
            .unwrap();
        let dt = LocalDateTime::from(naive);
        assert_eq!(dt, LocalDateTime::new(2022, 5, 7, 13, 14, 15));
        assert_eq!(NaiveDateTime::try_from(dt), Ok(naive));
        assert!(NaiveDateTime::try_from(LocalDateTime::new(2022, 5, 7, 13, 60, 0)).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_single_string_field() {
        let dt = LocalDateTime::new(2022, 5, 7, 23, 59, 59);
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2022-05-07T23:59:59\"");
        assert_eq!(serde_json::from_str::<LocalDateTime>(&json).unwrap(), dt);
        assert!(serde_json::from_str::<LocalDateTime>("\"2022-05-07\"").is_err());
    }
}
