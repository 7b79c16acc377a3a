// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversion boundary between civil fields and absolute instants.
//!
//! [`AbsoluteTimeBridge`] is the only place where civil values meet a time
//! zone and a calendar system. Everything that needs it (weekday, derived
//! fields, calendar arithmetic, durations) is comparatively expensive and
//! depends on the environment the bridge was built for; ordering, equality
//! and ISO text never touch it.
//!
//! # Overlay onto now
//!
//! Turning fields into an instant starts from the provider's current moment
//! expressed in the bridge's zone and overwrites only the fields the record
//! carries. Sub-second precision is therefore inherited from "now", and a
//! date-only record inherits the current time of day as well.
//!
//! An inherited time of day can land in a gap skipped by a forward offset
//! transition. A date-only record then resolves past the gap, using the
//! offset in effect before it; an explicit date and time in a gap is an
//! error. Weekday, derived fields and arithmetic read the wall-clock fields
//! directly and never fail on a gap.

use crate::calendar::{CalendarSystem, CalendarUnit, DateComponent, Gregorian};
use crate::clock::{CurrentTimeProvider, SystemClock};
use crate::error::BridgeError;
use crate::fields::{CivilFields, DateFields};
use chrono::{DateTime, Local, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc, Weekday};

/// Converts between civil fields and `DateTime<Utc>` instants in a given
/// time zone `Tz` and calendar system `C`, reading "now" from `P`.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use civiltime::{AbsoluteTimeBridge, FixedClock, LocalDate};
///
/// let now = DateTime::parse_from_rfc3339("2030-06-01T12:00:00+00:00").unwrap();
/// let bridge = AbsoluteTimeBridge::new(FixedOffset::east_opt(3600).unwrap())
///     .with_clock(FixedClock(now));
///
/// assert!(LocalDate::new(2022, 5, 7).is_weekend(&bridge).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct AbsoluteTimeBridge<
    Tz: TimeZone,
    C: CalendarSystem = Gregorian,
    P: CurrentTimeProvider = SystemClock,
> {
    time_zone: Tz,
    calendar: C,
    clock: P,
}

impl<Tz: TimeZone> AbsoluteTimeBridge<Tz> {
    /// Gregorian bridge for `time_zone`, reading the system clock.
    pub fn new(time_zone: Tz) -> Self {
        Self {
            time_zone,
            calendar: Gregorian,
            clock: SystemClock,
        }
    }
}

impl AbsoluteTimeBridge<Utc> {
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl AbsoluteTimeBridge<Local> {
    /// Bridge for the caller's ambient zone and calendar.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz, C, P> AbsoluteTimeBridge<Tz, C, P>
where
    Tz: TimeZone,
    C: CalendarSystem,
    P: CurrentTimeProvider,
{
    pub fn with_calendar<C2: CalendarSystem>(self, calendar: C2) -> AbsoluteTimeBridge<Tz, C2, P> {
        AbsoluteTimeBridge {
            time_zone: self.time_zone,
            calendar,
            clock: self.clock,
        }
    }

    pub fn with_clock<P2: CurrentTimeProvider>(self, clock: P2) -> AbsoluteTimeBridge<Tz, C, P2> {
        AbsoluteTimeBridge {
            time_zone: self.time_zone,
            calendar: self.calendar,
            clock,
        }
    }

    #[inline]
    pub fn time_zone(&self) -> &Tz {
        &self.time_zone
    }

    #[inline]
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    #[inline]
    pub fn clock(&self) -> &P {
        &self.clock
    }

    /// The provider's current instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }

    // ── civil → absolute ──────────────────────────────────────────────

    /// Resolves `fields` to an instant, overlaying them onto the clock's now.
    pub fn to_absolute(&self, fields: &CivilFields) -> Result<DateTime<Utc>, BridgeError> {
        self.to_absolute_at(fields, self.now())
    }

    /// Resolves `fields` to an instant, overlaying them onto `now`.
    ///
    /// Ambiguous wall-clock times resolve to the earliest instant.
    pub fn to_absolute_at(
        &self,
        fields: &CivilFields,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, BridgeError> {
        trace!("to_absolute {:?} over {}", fields, now);
        let local = self.local_at(fields, now)?;
        self.resolve_fields(fields, local)
    }

    // ── absolute → civil ──────────────────────────────────────────────

    /// Full civil field set of `instant` in this bridge's zone.
    pub fn from_absolute(&self, instant: DateTime<Utc>) -> CivilFields {
        trace!("from_absolute {}", instant);
        let (date, time) = self.calendar.extract(self.wall_clock(instant));
        CivilFields::DateTime(date, time)
    }

    // ── calendar-dependent queries ────────────────────────────────────

    /// Adds `amount` calendar units to `fields`, returning a record of the
    /// same variant.
    pub fn add(
        &self,
        fields: &CivilFields,
        unit: CalendarUnit,
        amount: i64,
    ) -> Result<CivilFields, BridgeError> {
        trace!("add {} {:?} to {:?}", amount, unit, fields);
        let local = self.local_at(fields, self.now())?;
        self.resolve_fields(fields, local)?;
        let shifted = self.calendar.add(local, unit, amount)?;
        self.resolve_fields(fields, shifted)?;
        let (date, time) = self.calendar.extract(shifted);
        Ok(fields.with_fields(date, time))
    }

    pub fn weekday(&self, fields: &CivilFields) -> Result<Weekday, BridgeError> {
        let local = self.local_at(fields, self.now())?;
        Ok(self.calendar.weekday(local.date()))
    }

    pub fn is_weekend(&self, fields: &CivilFields) -> Result<bool, BridgeError> {
        Ok(self.calendar.is_weekend(self.weekday(fields)?))
    }

    pub fn component(
        &self,
        fields: &CivilFields,
        component: DateComponent,
    ) -> Result<i64, BridgeError> {
        let local = self.local_at(fields, self.now())?;
        Ok(self.calendar.component(local, component))
    }

    /// Whole calendar days from `from` to `to`.
    pub fn days_between(&self, from: &DateFields, to: &DateFields) -> Result<i64, BridgeError> {
        let now = self.now();
        let start = self.local_at(&CivilFields::Date(*from), now)?;
        let end = self.local_at(&CivilFields::Date(*to), now)?;
        Ok(self.calendar.days_between(start.date(), end.date()))
    }

    /// Elapsed seconds from `from` to `to`, both resolved against one clock
    /// reading so inherited sub-fields cancel out.
    pub fn seconds_between(
        &self,
        from: &CivilFields,
        to: &CivilFields,
    ) -> Result<i64, BridgeError> {
        let now = self.now();
        let start = self.to_absolute_at(from, now)?;
        let end = self.to_absolute_at(to, now)?;
        Ok(end.signed_duration_since(start).num_seconds())
    }

    // ── helpers ───────────────────────────────────────────────────────

    #[inline]
    fn wall_clock(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.time_zone).naive_local()
    }

    /// `fields` overlaid onto the wall clock at `now`.
    #[inline]
    fn local_at(
        &self,
        fields: &CivilFields,
        now: DateTime<Utc>,
    ) -> Result<NaiveDateTime, BridgeError> {
        self.calendar.overlay(self.wall_clock(now), fields)
    }

    fn resolve_fields(
        &self,
        fields: &CivilFields,
        local: NaiveDateTime,
    ) -> Result<DateTime<Utc>, BridgeError> {
        match fields {
            CivilFields::Date(_) => self.resolve_past_gap(local),
            CivilFields::DateTime(..) => self.resolve(local),
        }
    }

    fn resolve(&self, local: NaiveDateTime) -> Result<DateTime<Utc>, BridgeError> {
        match self.time_zone.from_local_datetime(&local).earliest() {
            Some(instant) => Ok(instant.with_timezone(&Utc)),
            None => {
                debug!("no instant for local time {}", local);
                Err(BridgeError::NonexistentLocalTime)
            }
        }
    }

    /// Like `resolve`, but a wall-clock time inside a gap maps through the
    /// offset in effect a day earlier, which lands as far past the gap as
    /// `local` was into it.
    fn resolve_past_gap(&self, local: NaiveDateTime) -> Result<DateTime<Utc>, BridgeError> {
        if let Some(instant) = self.time_zone.from_local_datetime(&local).earliest() {
            return Ok(instant.with_timezone(&Utc));
        }
        let before = local
            .checked_sub_signed(TimeDelta::days(1))
            .and_then(|earlier| self.time_zone.offset_from_local_datetime(&earlier).earliest())
            .map(|offset| i64::from(offset.fix().local_minus_utc()));
        match before.and_then(|seconds| local.checked_sub_signed(TimeDelta::seconds(seconds))) {
            Some(utc) => {
                debug!("local time {} falls in a gap, resolved past it", local);
                Ok(utc.and_utc())
            }
            None => {
                debug!("no instant for local time {}", local);
                Err(BridgeError::NonexistentLocalTime)
            }
        }
    }
}
