// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed 33-letter Cyrillic alphabet and text normalization.

/// Number of letters in the alphabet; every substitution works modulo this.
pub const ALPHABET_LEN: usize = 33;

/// The alphabet in collation order, `Ё` sitting between `Е` and `Ж`.
pub static ALPHABET: [char; ALPHABET_LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Position of an uppercase letter in [`ALPHABET`].
///
/// Lowercase input is not folded here; use [`normalize`] first.
#[inline]
pub fn index_of(letter: char) -> Option<usize> {
    // Unicode keeps А..Я contiguous but places Ё (U+0401) before the block.
    match letter {
        'А'..='Е' => Some(letter as usize - 'А' as usize),
        'Ё' => Some(6),
        'Ж'..='Я' => Some(letter as usize - 'Ж' as usize + 7),
        _ => None,
    }
}

/// Letter at `index`, reduced modulo the alphabet length.
#[inline]
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN]
}

/// Letter at a signed position, wrapping negatives around the alphabet.
#[inline]
pub(crate) fn letter_at_signed(index: i64) -> char {
    ALPHABET[index.rem_euclid(ALPHABET_LEN as i64) as usize]
}

/// Uppercases a single character and returns its alphabet position, if any.
///
/// Characters whose uppercase form expands to several characters are
/// never alphabet members.
fn fold(ch: char) -> Option<usize> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => index_of(single),
        _ => None,
    }
}

/// Maps text onto alphabet positions, dropping everything that is not a letter.
pub(crate) fn indices(text: &str) -> Vec<usize> {
    text.chars().filter_map(fold).collect()
}

/// Uppercases `text` and keeps only alphabet letters.
///
/// Spaces, punctuation, digits and Latin letters are dropped silently.
/// The operation is total and idempotent.
pub fn normalize(text: &str) -> String {
    text.chars().filter_map(fold).map(letter_at).collect()
}
