// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Locale-aware presentation hooks.
//!
//! Locale data lives outside this crate behind [`FormattingService`]. This
//! module only decides *what* to ask it and memoizes the one answer that is
//! expensive to obtain: whether a locale uses a 12-hour (AM/PM) clock.

use crate::fields::TimeFields;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Length of a localized date rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateStyle {
    Short,
    #[default]
    Medium,
    Long,
    Full,
}

/// Platform formatting service.
///
/// Locales are passed as identifiers such as `"en_US"` or `"de-DE"`; their
/// interpretation is up to the implementation.
pub trait FormattingService {
    /// Whether `locale` renders hours on a 12-hour cycle with AM/PM markers.
    fn hour_cycle_uses_am_pm(&self, locale: &str) -> bool;

    fn am_symbol(&self, locale: &str) -> String;

    fn pm_symbol(&self, locale: &str) -> String;

    fn localized_date_string(
        &self,
        instant: DateTime<Utc>,
        locale: &str,
        style: DateStyle,
    ) -> String;
}

/// Single-slot memo of the last locale's hour cycle.
///
/// A lookup for the cached locale is answered from the slot; any other
/// locale queries the service and replaces the slot.
#[derive(Debug, Default)]
pub struct HourCycleCache {
    slot: Mutex<Option<(String, bool)>>,
}

impl HourCycleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uses_am_pm<F: FormattingService + ?Sized>(&self, locale: &str, service: &F) -> bool {
        if let Some((cached, uses_am_pm)) = self.slot.lock().as_ref() {
            if cached == locale {
                return *uses_am_pm;
            }
        }
        // The service is queried unlocked; it may format through this cache.
        debug!("hour cycle cache miss for locale {:?}", locale);
        let uses_am_pm = service.hour_cycle_uses_am_pm(locale);
        *self.slot.lock() = Some((locale.to_owned(), uses_am_pm));
        uses_am_pm
    }

    /// The locale currently held, if any.
    pub fn cached_locale(&self) -> Option<String> {
        self.slot.lock().as_ref().map(|(locale, _)| locale.clone())
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

/// A formatting service paired with its hour-cycle cache.
#[derive(Debug, Default)]
pub struct TimeFormatter<F> {
    service: F,
    cache: HourCycleCache,
}

impl<F: FormattingService> TimeFormatter<F> {
    pub fn new(service: F) -> Self {
        Self {
            service,
            cache: HourCycleCache::new(),
        }
    }

    #[inline]
    pub fn service(&self) -> &F {
        &self.service
    }

    #[inline]
    pub fn cache(&self) -> &HourCycleCache {
        &self.cache
    }

    /// Minute-precision time of day: `"19:05"` on 24-hour locales,
    /// `"7:05 PM"` on 12-hour ones (midnight and noon render as 12).
    pub fn hour_minutes(&self, time: &TimeFields, locale: &str) -> String {
        if !self.cache.uses_am_pm(locale, &self.service) {
            return format!("{:02}:{:02}", time.hour, time.minute);
        }
        let symbol = if time.hour % 24 < 12 {
            self.service.am_symbol(locale)
        } else {
            self.service.pm_symbol(locale)
        };
        let hour = match time.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, time.minute, symbol)
    }

    pub fn localized_date(&self, instant: DateTime<Utc>, locale: &str, style: DateStyle) -> String {
        self.service.localized_date_string(instant, locale, style)
    }
}
