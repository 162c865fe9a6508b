// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Direction, TextCipher};
use crate::alphabet::{self, ALPHABET_LEN, letter_at, letter_at_signed};
use crate::error::Result;
use crate::util::modinv;

const M: i64 = ALPHABET_LEN as i64;

/// Shifts every letter of the normalized text by `shift` positions.
///
/// Decryption shifts the other way; any shift value, including negative
/// ones and multiples of 33, is accepted.
pub fn caesar(text: &str, shift: i64, direction: Direction) -> String {
    // Reduce before negating; `-i64::MIN` does not exist.
    let reduced = shift.rem_euclid(M);
    let shift = match direction {
        Direction::Encrypt => reduced,
        Direction::Decrypt => (M - reduced) % M,
    };

    alphabet::indices(text)
        .into_iter()
        .map(|x| letter_at_signed(x as i64 + shift))
        .collect()
}

/// Mirrors the alphabet: the first letter maps to the last and so on.
///
/// Atbash is its own inverse.
pub fn atbash(text: &str) -> String {
    alphabet::indices(text)
        .into_iter()
        .map(|x| letter_at(ALPHABET_LEN - 1 - x))
        .collect()
}

/// Affine substitution `x ↦ a·x + b (mod 33)`.
///
/// `a` must be coprime with 33 in both directions, otherwise the mapping
/// is not a bijection and [`Error::NoInverse`](crate::Error::NoInverse)
/// is returned.
pub fn affine(text: &str, a: i64, b: i64, direction: Direction) -> Result<String> {
    let a_inv = modinv(a, M)?;
    let (a, b) = (a.rem_euclid(M), b.rem_euclid(M));

    let out = alphabet::indices(text)
        .into_iter()
        .map(|x| {
            let x = x as i64;
            match direction {
                Direction::Encrypt => letter_at_signed(a * x + b),
                Direction::Decrypt => letter_at_signed(a_inv * (x - b)),
            }
        })
        .collect();

    Ok(out)
}

/// Caesar key: a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    pub shift: i64,
}

impl TextCipher for Caesar {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        Ok(caesar(text, self.shift, direction))
    }
}

/// Atbash has no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Atbash;

impl TextCipher for Atbash {
    fn apply(&self, text: &str, _direction: Direction) -> Result<String> {
        Ok(atbash(text))
    }
}

/// Affine key pair `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    pub a: i64,
    pub b: i64,
}

impl TextCipher for Affine {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        affine(text, self.a, self.b, direction)
    }
}
