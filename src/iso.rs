// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO-8601 subset codec.
//!
//! Encoding is fixed-width and zero-padded:
//!
//! ```text
//! YYYY-MM-DD
//! YYYY-MM-DDTHH:MM:SS
//! ```
//!
//! Decoding splits on `-`, `T` and `:`, then checks in order: the number of
//! components, the separator at each position, and that each component is
//! a run of ASCII digits fitting its field. The decoded fields must name a
//! real Gregorian date (and time of day).

use crate::error::ParseError;
use crate::fields::{DateFields, TimeFields};
use std::fmt;

const DATE_SEPARATORS: &[char] = &['-', '-'];
const DATE_TIME_SEPARATORS: &[char] = &['-', '-', 'T', ':', ':'];

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '-' | 'T' | ':')
}

/// Splits `input` on every separator, checking the shape against `expected`.
fn tokenize<'a>(input: &'a str, expected: &[char]) -> Result<Vec<&'a str>, ParseError> {
    let separators: Vec<(usize, char)> = input
        .char_indices()
        .filter(|(_, c)| is_separator(*c))
        .collect();
    if separators.len() != expected.len() {
        return Err(ParseError::TokenCount {
            expected: expected.len() + 1,
            found: separators.len() + 1,
        });
    }
    for (&(position, found), &expected) in separators.iter().zip(expected) {
        if found != expected {
            return Err(ParseError::UnexpectedSeparator {
                position,
                expected,
                found,
            });
        }
    }
    Ok(input.split(is_separator).collect())
}

fn number<T: std::str::FromStr>(index: usize, token: &str) -> Result<T, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        index,
        token: token.to_owned(),
    };
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

fn date_fields(tokens: &[&str]) -> Result<DateFields, ParseError> {
    Ok(DateFields::new(
        number(0, tokens[0])?,
        number(1, tokens[1])?,
        number(2, tokens[2])?,
    ))
}

/// Decodes `YYYY-MM-DD`.
pub(crate) fn parse_date(input: &str) -> Result<DateFields, ParseError> {
    let tokens = tokenize(input, DATE_SEPARATORS)?;
    let date = date_fields(&tokens)?;
    date.validate()?;
    Ok(date)
}

/// Decodes `YYYY-MM-DDTHH:MM:SS`.
pub(crate) fn parse_date_time(input: &str) -> Result<(DateFields, TimeFields), ParseError> {
    let tokens = tokenize(input, DATE_TIME_SEPARATORS)?;
    let date = date_fields(&tokens)?;
    let time = TimeFields::new(
        number(3, tokens[3])?,
        number(4, tokens[4])?,
        number(5, tokens[5])?,
    );
    date.validate()?;
    time.validate()?;
    Ok((date, time))
}

pub(crate) fn write_date(f: &mut fmt::Formatter<'_>, date: &DateFields) -> fmt::Result {
    write!(f, "{:04}-{:02}-{:02}", date.year, date.month, date.day)
}

pub(crate) fn write_date_time(
    f: &mut fmt::Formatter<'_>,
    date: &DateFields,
    time: &TimeFields,
) -> fmt::Result {
    write_date(f, date)?;
    write!(f, "T{:02}:{:02}:{:02}", time.hour, time.minute, time.second)
}
