// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Current-time providers.

use chrono::{DateTime, FixedOffset, Local};

/// Source of "now": an absolute instant together with the offset of the
/// zone it should be read in.
pub trait CurrentTimeProvider {
    fn now(&self) -> DateTime<FixedOffset>;
}

impl<P: CurrentTimeProvider + ?Sized> CurrentTimeProvider for &P {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// The operating-system clock, read in the system's local zone.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl CurrentTimeProvider for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock stopped at a single moment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl CurrentTimeProvider for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
