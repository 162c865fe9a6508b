// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use super::{Direction, TextCipher};
use crate::error::{Error, Result};

/// One parenthesized group of a Richelieu key, e.g. `(1342)`.
///
/// Holds 1-indexed positions forming a permutation of `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationCycle(Vec<usize>);

impl PermutationCycle {
    pub fn new(positions: Vec<usize>) -> Result<Self> {
        if positions.is_empty() {
            return Err(Error::InvalidKey("permutation cycle is empty".into()));
        }

        let mut seen = vec![false; positions.len()];
        for &pos in &positions {
            if pos == 0 || pos > positions.len() || seen[pos - 1] {
                return Err(Error::InvalidKey(format!(
                    "cycle {positions:?} is not a permutation of 1..={}",
                    positions.len()
                )));
            }
            seen[pos - 1] = true;
        }

        Ok(Self(positions))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// `source[i]` is the input index that lands at output index `i`.
    fn source_table(&self) -> Vec<usize> {
        let mut source = vec![0; self.0.len()];
        for (i, &pos) in self.0.iter().enumerate() {
            source[pos - 1] = i;
        }
        source
    }
}

/// An ordered list of cycles, one per consecutive block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Richelieu {
    cycles: Vec<PermutationCycle>,
}

impl Richelieu {
    pub fn new(cycles: Vec<PermutationCycle>) -> Result<Self> {
        if cycles.is_empty() {
            return Err(Error::InvalidKey("key contains no cycles".into()));
        }
        Ok(Self { cycles })
    }

    pub fn cycles(&self) -> &[PermutationCycle] {
        &self.cycles
    }

    /// Sum of all cycle lengths: how much text the key transposes.
    pub fn span(&self) -> usize {
        self.cycles.iter().map(PermutationCycle::len).sum()
    }

    fn transpose(&self, text: &str, direction: Direction) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::with_capacity(chars.len());
        let mut rest = chars.as_slice();

        for cycle in &self.cycles {
            // A block cut short by the end of the text is left as is.
            if rest.len() < cycle.len() {
                break;
            }
            let (block, tail) = rest.split_at(cycle.len());
            let source = cycle.source_table();

            match direction {
                Direction::Encrypt => out.extend(source.iter().map(|&s| block[s])),
                Direction::Decrypt => {
                    let mut plain = vec!['\0'; block.len()];
                    for (&s, &ch) in source.iter().zip(block) {
                        plain[s] = ch;
                    }
                    out.extend(plain);
                }
            }
            rest = tail;
        }

        out.extend_from_slice(rest);
        out.into_iter().collect()
    }
}

impl FromStr for Richelieu {
    type Err = Error;

    /// Parses keys such as `(1342)(31542)`.
    ///
    /// Every digit inside a group is one position, so cycles longer than
    /// nine are not expressible. Text outside parentheses and non-digits
    /// inside them are ignored; empty groups are skipped.
    fn from_str(key: &str) -> Result<Self> {
        let mut cycles = Vec::new();
        let mut group: Option<Vec<usize>> = None;

        for ch in key.chars() {
            match (ch, group.as_mut()) {
                ('(', None) => group = Some(Vec::new()),
                ('(', Some(_)) => {
                    return Err(Error::InvalidKey(format!("nested `(` in key `{key}`")));
                }
                (')', Some(_)) => {
                    if let Some(positions) = group.take().filter(|p| !p.is_empty()) {
                        cycles.push(PermutationCycle::new(positions)?);
                    }
                }
                (')', None) => {
                    return Err(Error::InvalidKey(format!("unbalanced `)` in key `{key}`")));
                }
                (_, Some(positions)) => {
                    if let Some(digit) = ch.to_digit(10) {
                        positions.push(digit as usize);
                    }
                }
                (_, None) => {}
            }
        }

        if group.is_some() {
            return Err(Error::InvalidKey(format!("unclosed `(` in key `{key}`")));
        }

        Self::new(cycles)
    }
}

impl TextCipher for Richelieu {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        Ok(self.transpose(text, direction))
    }
}

/// Parses a cycle key such as `(1342)(31542)` into its cycles.
pub fn parse_cycles(key: &str) -> Result<Vec<PermutationCycle>> {
    key.parse::<Richelieu>().map(|r| r.cycles)
}

/// Transposes consecutive blocks of `plain` according to the key's cycles.
///
/// Characters past the total cycle length pass through unchanged.
pub fn richelieu_encode(plain: &str, key: &str) -> Result<String> {
    Ok(key.parse::<Richelieu>()?.transpose(plain, Direction::Encrypt))
}

/// Inverse of [`richelieu_encode`].
pub fn richelieu_decode(cipher: &str, key: &str) -> Result<String> {
    Ok(key.parse::<Richelieu>()?.transpose(cipher, Direction::Decrypt))
}

#[cfg(test)]
mod test_richelieu {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const KEY: &str = "(1342)(31542)(132)(3124)";

    #[test]
    fn parses_cycles_in_order() {
        let cycles = parse_cycles(KEY).unwrap();
        let lens: Vec<usize> = cycles.iter().map(PermutationCycle::len).collect();
        assert_eq!(lens, [4, 5, 3, 4]);
        assert_eq!(cycles[1].positions(), [3, 1, 5, 4, 2]);
    }

    #[test]
    fn parser_ignores_noise() {
        let cycles = parse_cycles("key: (1 3-2) () (21)").unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].positions(), [1, 3, 2]);
    }

    #[test]
    fn rejects_malformed_keys() {
        for key in ["", "1342", "(1342", "(12))", "((12))", "(1224)", "(1350)", "(45)"] {
            assert!(
                matches!(parse_cycles(key), Err(Error::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn encodes_single_block() {
        // source table for (1342) is [0, 3, 1, 2]
        assert_eq!(richelieu_encode("АБВГ", "(1342)").unwrap(), "АГБВ");
        assert_eq!(richelieu_decode("АГБВ", "(1342)").unwrap(), "АБВГ");
    }

    #[test]
    fn roundtrip() {
        let plain = "ПЕРЕСТАНОВКА";
        let enc = richelieu_encode(plain, KEY).unwrap();
        assert_ne!(enc, plain);
        assert_eq!(richelieu_decode(&enc, KEY).unwrap(), plain);
    }

    #[test]
    fn trailing_text_passes_through() {
        let enc = richelieu_encode("АБВГДЕЖ", "(1342)").unwrap();
        assert_eq!(enc, "АГБВДЕЖ");
        assert_eq!(richelieu_decode(&enc, "(1342)").unwrap(), "АБВГДЕЖ");
    }

    #[test]
    fn short_block_is_left_alone() {
        let enc = richelieu_encode("АБВГДЕ", "(1342)(312)(4321)").unwrap();
        assert_eq!(enc, "АГБВДЕ");
        assert_eq!(richelieu_decode(&enc, "(1342)(312)(4321)").unwrap(), "АБВГДЕ");
    }

    #[test]
    fn keeps_spaces_and_underscores() {
        let text = "_виг янк_е оан икр_";
        let enc = richelieu_encode(text, KEY).unwrap();
        assert_eq!(richelieu_decode(&enc, KEY).unwrap(), text);
    }

    #[test]
    fn span_sums_cycle_lengths() {
        let key: Richelieu = KEY.parse().unwrap();
        assert_eq!(key.span(), 16);
    }
}
