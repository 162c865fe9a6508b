// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Direction, TextCipher};
use crate::alphabet::{self, ALPHABET_LEN, letter_at};
use crate::error::Result;

/// Polyalphabetic Caesar: letter `i` is shifted by key letter `i mod len(key)`.
///
/// Both text and key are normalized. A key with no alphabet letters yields
/// an empty string rather than an error.
pub fn vigenere(text: &str, key: &str, direction: Direction) -> String {
    let key = alphabet::indices(key);
    if key.is_empty() {
        return String::new();
    }

    alphabet::indices(text)
        .into_iter()
        .zip(key.iter().cycle())
        .map(|(x, &k)| match direction {
            Direction::Encrypt => letter_at(x + k),
            Direction::Decrypt => letter_at(x + ALPHABET_LEN - k),
        })
        .collect()
}

/// Vigenère key, kept as entered; normalization happens per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    pub key: String,
}

impl Vigenere {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TextCipher for Vigenere {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        Ok(vigenere(text, &self.key, direction))
    }
}
