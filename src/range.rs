// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Closed ranges of civil values.
//!
//! This module provides:
//! - [`Range<T>`]: generic closed range `[from, to]` over any [`CivilInstant`]
//! - [`LocalDateRange`] / [`LocalDateTimeRange`]: aliases for the two value types
//! - [`intersect_ranges`]: merge-intersection of two sorted range lists

use crate::bridge::AbsoluteTimeBridge;
use crate::calendar::CalendarSystem;
use crate::clock::CurrentTimeProvider;
use crate::error::BridgeError;
use crate::instant::CivilInstant;
use crate::{LocalDate, LocalDateTime};
use chrono::TimeZone;
use qtty::{Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed range between two civil values.
///
/// Nothing forces `from <= to` at construction. An inverted range is simply
/// empty: it contains nothing and intersects nothing.
///
/// # Examples
///
/// ```
/// use civiltime::{LocalDate, LocalDateRange};
///
/// let january = LocalDateRange::new(LocalDate::new(2022, 1, 1), LocalDate::new(2022, 1, 31));
/// let overlap = LocalDateRange::new(LocalDate::new(2022, 1, 15), LocalDate::new(2022, 2, 15));
///
/// let common = january.intersect_with(&overlap).unwrap();
/// assert_eq!(common.from, LocalDate::new(2022, 1, 15));
/// assert_eq!(common.to, LocalDate::new(2022, 1, 31));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range<T: CivilInstant> {
    pub from: T,
    pub to: T,
}

/// Range of calendar dates.
pub type LocalDateRange = Range<LocalDate>;

/// Range of civil date-times.
pub type LocalDateTimeRange = Range<LocalDateTime>;

impl<T: CivilInstant> Range<T> {
    #[inline]
    pub fn new(from: T, to: T) -> Self {
        Range { from, to }
    }

    /// `true` when `from > to`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// Whether `value` lies within `[from, to]`, endpoints included.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.from <= *value && *value <= self.to
    }

    /// Returns the overlapping sub-range between `self` and `other`.
    ///
    /// Ranges are closed: if one ends exactly where the other starts, the
    /// result is the single-point range at that value. Inverted input on
    /// either side yields `None`.
    pub fn intersect_with(&self, other: &Self) -> Option<Self> {
        if self.is_inverted() || other.is_inverted() {
            return None;
        }
        let latest_start = self.from.max(other.from);
        let earliest_end = self.to.min(other.to);

        if latest_start <= earliest_end {
            Some(Self::new(latest_start, earliest_end))
        } else {
            None
        }
    }
}

impl<T: CivilInstant + fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

impl Range<LocalDate> {
    /// Calendar days from `from` to `to` (zero for a single-day range).
    ///
    /// Computed through the bridge, not from the ordering key.
    pub fn duration_days<Tz, C, P>(
        &self,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<Days, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        let days = bridge.days_between(&self.from.fields(), &self.to.fields())?;
        Ok(Days::new(days as f64))
    }
}

impl Range<LocalDateTime> {
    /// Elapsed time from `from` to `to` in the bridge's zone.
    pub fn duration_seconds<Tz, C, P>(
        &self,
        bridge: &AbsoluteTimeBridge<Tz, C, P>,
    ) -> Result<Seconds, BridgeError>
    where
        Tz: TimeZone,
        C: CalendarSystem,
        P: CurrentTimeProvider,
    {
        let seconds = bridge.seconds_between(&self.from.civil_fields(), &self.to.civil_fields())?;
        Ok(Seconds::new(seconds as f64))
    }
}

/// Returns the intersection of two sorted, non-overlapping range lists.
///
/// Uses an O(n+m) merge. Closed semantics apply to each pair, so touching
/// endpoints produce single-point ranges. Inverted ranges in either list
/// are skipped.
///
/// # Arguments
/// * `a` - First sorted, non-overlapping range list
/// * `b` - Second sorted, non-overlapping range list
///
/// # Returns
/// Ranges where both `a` and `b` overlap, in chronological order.
pub fn intersect_ranges<T: CivilInstant>(a: &[Range<T>], b: &[Range<T>]) -> Vec<Range<T>> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_inverted() {
            i += 1;
            continue;
        }
        if b[j].is_inverted() {
            j += 1;
            continue;
        }
        if let Some(overlap) = a[i].intersect_with(&b[j]) {
            result.push(overlap);
        }
        if a[i].to <= b[j].to {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}
