// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Capability shared by every civil value.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for civil values that carry a complete calendar date.
///
/// Types implementing this trait can be used as endpoints of a
/// [`Range`](crate::Range). Their [`Ord`] must agree with
/// [`linear_timestamp`](CivilInstant::linear_timestamp) wherever the keys
/// differ.
pub trait CivilInstant: Copy + Clone + Debug + Eq + Ord + Hash + Sized {
    fn year(&self) -> i32;

    fn month(&self) -> u32;

    fn day(&self) -> u32;

    /// Ordering-only key; never a duration.
    fn linear_timestamp(&self) -> i64;

    /// Whether both values fall on the same calendar day.
    ///
    /// Compares year, month and day only; time-of-day is ignored.
    fn is_same_day<O: CivilInstant>(&self, other: &O) -> bool {
        self.year() == other.year() && self.month() == other.month() && self.day() == other.day()
    }
}
