// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns caller-entered strings into key material.
//!
//! Every failure is reported as [`Error::MalformedInput`] naming the
//! offending fragment.

use std::str::FromStr;

use num_bigint_dig::BigUint;

use crate::book::{BookCoordinate, UNKNOWN_WORD};
use crate::cipher::Matrix;
use crate::error::{Error, Result};

fn number<T: FromStr>(input: &str, what: &str) -> Result<T> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| Error::MalformedInput(format!("expected {what}, got `{trimmed}`")))
}

/// A single signed integer, surrounding whitespace ignored.
pub fn parse_int(input: &str) -> Result<i64> {
    number(input, "an integer")
}

/// A non-negative integer of any size.
pub fn parse_big(input: &str) -> Result<BigUint> {
    number(input, "a non-negative integer")
}

/// Comma-separated integers; empty entries are skipped.
pub fn parse_int_list<T: FromStr>(input: &str) -> Result<Vec<T>> {
    input
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| number(part, "a comma-separated integer"))
        .collect()
}

/// Nine whitespace-separated integers, read row by row into a 3×3 matrix.
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let values: Vec<i64> = input
        .split_whitespace()
        .map(|part| number(part, "a matrix entry"))
        .collect::<Result<_>>()?;

    if values.len() != 9 {
        return Err(Error::MalformedInput(format!(
            "a 3x3 matrix needs 9 entries, got {}",
            values.len()
        )));
    }

    let mut matrix = [[0i64; 3]; 3];
    for (cell, value) in matrix.iter_mut().flatten().zip(values) {
        *cell = value;
    }
    Ok(matrix)
}

/// Comma-separated `line/word` pairs such as `2/8, 1/4`.
///
/// Empty entries are skipped and `?` reads back as
/// [`BookCoordinate::UNMATCHED`], so the output of [`format_coordinates`]
/// parses again.
pub fn parse_coordinates(input: &str) -> Result<Vec<BookCoordinate>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part == UNKNOWN_WORD {
                return Ok(BookCoordinate::UNMATCHED);
            }
            let (line, word) = part.split_once('/').ok_or_else(|| {
                Error::MalformedInput(format!("expected `line/word`, got `{part}`"))
            })?;
            Ok(BookCoordinate::new(
                number(line, "a line number")?,
                number(word, "a word number")?,
            ))
        })
        .collect()
}

/// Renders coordinates as `3/5, 3/6`, with `?` for unmatched words.
pub fn format_coordinates(coords: &[BookCoordinate]) -> String {
    coords
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
