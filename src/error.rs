// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.

use crate::calendar::CalendarUnit;
use thiserror::Error;

/// A civil field holds a value the Gregorian calendar cannot interpret.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
}

/// Failure to decode ISO-8601 text into a civil value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} numeric components, found {found}")]
    TokenCount { expected: usize, found: usize },

    #[error("expected separator '{expected}' at byte {position}, found '{found}'")]
    UnexpectedSeparator {
        position: usize,
        expected: char,
        found: char,
    },

    #[error("component {index} is not a number: {token:?}")]
    InvalidNumber { index: usize, token: String },

    #[error("invalid field: {0}")]
    Field(#[from] FieldError),
}

/// Failure while converting between civil fields and an absolute instant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    #[error("invalid civil fields: {0}")]
    InvalidFields(#[from] FieldError),

    #[error("local time does not exist in the target time zone")]
    NonexistentLocalTime,

    #[error("adding {amount} {unit:?} overflows the calendar range")]
    Overflow { unit: CalendarUnit, amount: i64 },
}
