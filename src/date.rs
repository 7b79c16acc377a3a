// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar date.
//!
//! [`LocalDate`] is a `{year, month, day}` triple with no time of day and no
//! time zone. Construction, ordering, hashing and ISO text are pure field
//! operations. Anything that needs to know what weekday a date falls on, or
//! how long a month is, goes through an [`AbsoluteTimeBridge`] and is
//! comparatively expensive.

use crate::bridge::AbsoluteTimeBridge;
use crate::calendar::{CalendarSystem, CalendarUnit, DateComponent};
use crate::clock::CurrentTimeProvider;
use crate::datetime::LocalDateTime;
use crate::error::{BridgeError, FieldError, ParseError};
use crate::fields::{CivilFields, DateFields, TimeFields};
use crate::format::{DateStyle, FormattingService, TimeFormatter};
use crate::instant::CivilInstant;
use crate::iso;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date without time of day or time zone.
///
/// # Examples
///
/// ```
/// use civiltime::LocalDate;
///
/// let date = LocalDate::new(2022, 5, 7);
/// assert_eq!(date.to_iso(), "2022-05-07");
/// assert!(date < LocalDate::new(2022, 5, 8));
/// assert_eq!("2022-05-07".parse::<LocalDate>(), Ok(date));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LocalDate {
    fields: DateFields,
}

impl LocalDate {
    // ── constructors ──────────────────────────────────────────────────

    /// Creates a date from explicit fields.
    ///
    /// Fields are not range-checked: `LocalDate::new(2022, 13, 1)` is a
    /// valid value that orders and encodes, but every bridge operation on
    /// it fails with [`BridgeError::InvalidFields`]. Use
    /// [`try_new`](Self::try_new) to reject such values up front.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            fields: DateFields::new(year, month, day),
        }
    }

    /// Creates a date, rejecting fields that do not name a Gregorian day.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, FieldError> {
        let date = Self::new(year, month, day);
        date.fields.validate()?;
        Ok(date)
    }

    #[inline]
    pub const fn from_fields(fields: DateFields) -> Self {
        Self { fields }
    }

    /// Today's date as read from `clock`, in the clock's own zone.
    pub fn today<P: CurrentTimeProvider>(clock: &P) -> Self {
        Self::from(clock.now().date_naive())
    }

    /// The date `instant` falls on in the bridge's zone.
    pub fn from_absolute<Tz, C, P>(
        instant: DateTime<Utc>,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Self
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        Self::from_fields(bridge.from_absolute(instant).date())
    }

    /// Parses `YYYY-MM-DD`.
    pub fn parse_iso(text: &str) -> Result<Self, ParseError> {
        iso::parse_date(text).map(Self::from_fields)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.fields.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.fields.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.fields.day
    }

    #[inline]
    pub const fn fields(&self) -> DateFields {
        self.fields
    }

    #[inline]
    pub const fn civil_fields(&self) -> CivilFields {
        CivilFields::Date(self.fields)
    }

    /// See [`DateFields::linear_timestamp`].
    #[inline]
    pub const fn linear_timestamp(&self) -> i64 {
        self.fields.linear_timestamp()
    }

    // ── pure projections ──────────────────────────────────────────────

    /// January 1st of the same year.
    #[inline]
    pub const fn start_of_year(&self) -> Self {
        Self::new(self.fields.year, 1, 1)
    }

    /// December 31st of the same year.
    #[inline]
    pub const fn end_of_year(&self) -> Self {
        Self::new(self.fields.year, 12, 31)
    }

    #[inline]
    pub const fn at(&self, hour: u32, minute: u32, second: u32) -> LocalDateTime {
        LocalDateTime::from_fields(self.fields, TimeFields::new(hour, minute, second))
    }

    /// `00:00:00` on this date.
    #[inline]
    pub const fn midnight(&self) -> LocalDateTime {
        LocalDateTime::from_fields(self.fields, TimeFields::MIDNIGHT)
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

    /// Derives a calendar field that is not stored, e.g. the ISO week.
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

    /// Calendar-aware addition; month and year steps clamp the day to the
    /// end of the target month.
    ///
    /// Units smaller than a day move the inherited time of day and may or
    /// may not cross into another date.
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
        Ok(Self::from_fields(shifted.date()))
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

    /// Locale-formatted rendering, delegated to the formatting service.
    pub fn localized_string<F, Tz, C, P>(
        &self,
        locale: &str,
        style: DateStyle,
        formatter: &TimeFormatter<F>,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<String, BridgeError>
    where
        F: FormattingService,
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        let instant = self.to_absolute(bridge)?;
        Ok(formatter.localized_date(instant, locale, style))
    }

    // ── text ──────────────────────────────────────────────────────────

    /// Fixed-width `YYYY-MM-DD`.
    ///
    /// Negative years encode with a leading sign (`-044-03-15`), which
    /// [`parse_iso`](Self::parse_iso) does not accept.
    pub fn to_iso(&self) -> String {
        self.to_string()
    }
}

impl CivilInstant for LocalDate {
    #[inline]
    fn year(&self) -> i32 {
        self.fields.year
    }

    #[inline]
    fn month(&self) -> u32 {
        self.fields.month
    }

    #[inline]
    fn day(&self) -> u32 {
        self.fields.day
    }

    #[inline]
    fn linear_timestamp(&self) -> i64 {
        self.fields.linear_timestamp()
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.linear_timestamp()
            .cmp(&other.linear_timestamp())
            .then_with(|| self.fields.cmp(&other.fields))
    }
}

impl PartialOrd for LocalDate {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        iso::write_date(f, &self.fields)
    }
}

impl FromStr for LocalDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl From<LocalDateTime> for LocalDate {
    #[inline]
    fn from(date_time: LocalDateTime) -> Self {
        date_time.date()
    }
}

impl TryFrom<LocalDate> for NaiveDate {
    type Error = FieldError;

    fn try_from(date: LocalDate) -> Result<Self, Self::Error> {
        let DateFields { year, month, day } = date.fields;
        date.fields.validate()?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::InvalidDay { year, month, day })
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Serialized as the [`to_iso`](LocalDate::to_iso) text. Negative years do
/// not round-trip: their text fails to deserialize with a token count error.
#[cfg(feature = "serde")]
impl Serialize for LocalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse_iso(&text).map_err(serde::de::Error::custom)
    }
}
