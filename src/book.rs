// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Book cipher: words are replaced by their `(line, word)` position in a
//! reference text shared by both parties.

use std::fmt;

/// Reference text used when the caller does not supply one.
pub const DEFAULT_BOOK_TEXT: &str = "У лукоморья дуб зелёный;\n\
                                     Златая цепь на дубе том:\n\
                                     И днём и ночью кот учёный\n\
                                     Всё ходит по цепи кругом;";

/// Placeholder emitted by [`Book::decode`] for coordinates outside the text.
pub const UNKNOWN_WORD: &str = "?";

/// A 1-indexed `(line, word)` position in a reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookCoordinate {
    pub line: i64,
    pub word: i64,
}

impl BookCoordinate {
    /// Sentinel for a word that does not occur in the reference text.
    pub const UNMATCHED: Self = Self { line: -1, word: -1 };

    pub const fn new(line: i64, word: i64) -> Self {
        Self { line, word }
    }

    pub fn is_unmatched(&self) -> bool {
        *self == Self::UNMATCHED
    }
}

impl From<(i64, i64)> for BookCoordinate {
    fn from((line, word): (i64, i64)) -> Self {
        Self { line, word }
    }
}

impl fmt::Display for BookCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unmatched() {
            f.write_str(UNKNOWN_WORD)
        } else {
            write!(f, "{}/{}", self.line, self.word)
        }
    }
}

/// One occurrence of a searched word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookHit {
    pub line: usize,
    pub word: usize,
    /// The word as spelled in the reference text.
    pub matched: String,
}

/// One letter of a searched word, located down to its position in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHit {
    pub line: usize,
    pub word: usize,
    pub letter: usize,
    pub ch: char,
}

/// A tokenized reference text.
///
/// Blank lines are dropped, `;` and `:` are removed, and each remaining line
/// is split on whitespace. Lines and words are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    lines: Vec<Vec<String>>,
}

impl Book {
    pub fn new(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.replace(|c: char| c == ';' || c == ':', "")
                    .split_whitespace()
                    .map(str::to_owned)
                    .collect()
            })
            .collect();

        Self { lines }
    }

    /// Number of non-empty lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The word at a coordinate, case preserved.
    pub fn word_at(&self, coord: BookCoordinate) -> Option<&str> {
        let line = usize::try_from(coord.line).ok()?.checked_sub(1)?;
        let word = usize::try_from(coord.word).ok()?.checked_sub(1)?;
        self.lines.get(line)?.get(word).map(String::as_str)
    }

    fn occurrences<'a>(
        &'a self,
        needle: &str,
    ) -> impl Iterator<Item = (usize, usize, &'a str)> + 'a {
        let needle = needle.to_lowercase();
        self.lines.iter().enumerate().flat_map(move |(i, words)| {
            let needle = needle.clone();
            words
                .iter()
                .enumerate()
                .filter(move |(_, w)| w.to_lowercase() == needle)
                .map(move |(j, w)| (i + 1, j + 1, w.as_str()))
        })
    }

    /// Replaces each word of `message` by the coordinate of its first
    /// case-insensitive occurrence, or [`BookCoordinate::UNMATCHED`].
    pub fn encode(&self, message: &str) -> Vec<BookCoordinate> {
        message
            .split(|c: char| c.is_whitespace() || c == ';' || c == ':')
            .filter(|w| !w.is_empty())
            .map(|word| match self.occurrences(word).next() {
                Some((line, idx, _)) => BookCoordinate::new(line as i64, idx as i64),
                None => {
                    tracing::debug!(
                        chars = word.chars().count(),
                        "word not found in reference text"
                    );
                    BookCoordinate::UNMATCHED
                }
            })
            .collect()
    }

    /// All case-insensitive occurrences of `word`, in document order.
    ///
    /// A blank query finds nothing.
    pub fn find(&self, word: &str) -> Vec<BookHit> {
        let word = word.trim();
        if word.is_empty() {
            return Vec::new();
        }

        self.occurrences(word)
            .map(|(line, word, matched)| BookHit {
                line,
                word,
                matched: matched.to_owned(),
            })
            .collect()
    }

    /// Every letter of every occurrence of `word`, 1-indexed within the word.
    pub fn letters(&self, word: &str) -> Vec<LetterHit> {
        self.find(word)
            .into_iter()
            .flat_map(|hit| {
                hit.matched
                    .chars()
                    .enumerate()
                    .map(|(k, ch)| LetterHit {
                        line: hit.line,
                        word: hit.word,
                        letter: k + 1,
                        ch,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Looks every coordinate up and joins the words with single spaces.
    ///
    /// Coordinates outside the text, including the unmatched sentinel,
    /// become [`UNKNOWN_WORD`].
    pub fn decode(&self, coords: &[BookCoordinate]) -> String {
        coords
            .iter()
            .map(|&c| self.word_at(c).unwrap_or(UNKNOWN_WORD))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_TEXT)
    }
}

/// Encodes `message` against `key_text`.
pub fn book_encode(message: &str, key_text: &str) -> Vec<BookCoordinate> {
    Book::new(key_text).encode(message)
}

/// Finds all occurrences of `word` in `key_text`.
pub fn book_find(word: &str, key_text: &str) -> Vec<BookHit> {
    Book::new(key_text).find(word)
}

/// Decodes coordinates against `key_text`.
pub fn book_decode(coords: &[BookCoordinate], key_text: &str) -> String {
    Book::new(key_text).decode(coords)
}
