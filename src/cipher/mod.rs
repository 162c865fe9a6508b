// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text ciphers over the Cyrillic alphabet.
//!
//! Every cipher is available as a plain function taking its key material
//! directly, and as a key type implementing [`TextCipher`] for callers that
//! pick an algorithm at runtime through [`Cipher`].

mod hill;
mod rail_fence;
mod richelieu;
mod substitution;
mod vigenere;

pub use hill::{HILL_PADDING, Hill, Matrix, hill};
pub use rail_fence::{RailFence, rail_fence_decode, rail_fence_encode};
pub use richelieu::{PermutationCycle, Richelieu, parse_cycles, richelieu_decode, richelieu_encode};
pub use substitution::{Affine, Atbash, Caesar, affine, atbash, caesar};
pub use vigenere::{Vigenere, vigenere};

use crate::error::Result;

/// Which way a cipher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// The opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}

/// A keyed text transformation with an inverse.
pub trait TextCipher {
    /// Run the cipher in the given direction.
    fn apply(&self, text: &str, direction: Direction) -> Result<String>;

    fn encrypt(&self, text: &str) -> Result<String> {
        self.apply(text, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        self.apply(text, Direction::Decrypt)
    }
}

/// Any of the text ciphers together with its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar(Caesar),
    Atbash(Atbash),
    Affine(Affine),
    Vigenere(Vigenere),
    RailFence(RailFence),
    Richelieu(Richelieu),
    Hill(Hill),
}

impl Cipher {
    /// Short human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Caesar(_) => "caesar",
            Cipher::Atbash(_) => "atbash",
            Cipher::Affine(_) => "affine",
            Cipher::Vigenere(_) => "vigenere",
            Cipher::RailFence(_) => "rail-fence",
            Cipher::Richelieu(_) => "richelieu",
            Cipher::Hill(_) => "hill",
        }
    }

    /// Whether the cipher keeps characters outside the alphabet.
    ///
    /// Transpositions work on raw text; substitutions normalize first.
    pub fn preserves_raw_text(&self) -> bool {
        matches!(self, Cipher::RailFence(_) | Cipher::Richelieu(_))
    }
}

impl TextCipher for Cipher {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        let out = match self {
            Cipher::Caesar(key) => key.apply(text, direction),
            Cipher::Atbash(key) => key.apply(text, direction),
            Cipher::Affine(key) => key.apply(text, direction),
            Cipher::Vigenere(key) => key.apply(text, direction),
            Cipher::RailFence(key) => key.apply(text, direction),
            Cipher::Richelieu(key) => key.apply(text, direction),
            Cipher::Hill(key) => key.apply(text, direction),
        }?;

        tracing::debug!(
            cipher = self.name(),
            ?direction,
            input_chars = text.chars().count(),
            output_chars = out.chars().count(),
            "applied cipher"
        );
        Ok(out)
    }
}

macro_rules! impl_from_key {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Cipher {
                fn from(key: $variant) -> Self {
                    Cipher::$variant(key)
                }
            }
        )*
    };
}

impl_from_key!(Caesar, Atbash, Affine, Vigenere, RailFence, Richelieu, Hill);
