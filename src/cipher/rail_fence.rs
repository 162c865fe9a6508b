// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Direction, TextCipher};
use crate::error::Result;

/// Rail index for each position: `0, 1, …, rails-1, rails-2, …, 1`, repeated.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let period = 2 * rails - 2;
    (0..len)
        .map(|i| {
            let step = i % period;
            if step < rails { step } else { period - step }
        })
        .collect()
}

/// Rails past the text length are never visited, so capping them keeps the
/// output identical while bounding the period and the per-rail buffers.
fn effective_rails(len: usize, rails: usize) -> usize {
    rails.min(len.max(2))
}

/// Writes the text in a zig-zag over `rails` rows and reads it row by row.
///
/// Works on raw characters, so spaces and punctuation are transposed too.
/// Fewer than two rails leaves the text untouched.
pub fn rail_fence_encode(text: &str, rails: usize) -> String {
    if rails < 2 {
        return text.to_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    let rails = effective_rails(chars.len(), rails);
    let pattern = zigzag(chars.len(), rails);

    let mut rows: Vec<String> = vec![String::new(); rails];
    for (&ch, &rail) in chars.iter().zip(&pattern) {
        rows[rail].push(ch);
    }
    rows.concat()
}

/// Inverse of [`rail_fence_encode`].
pub fn rail_fence_decode(cipher: &str, rails: usize) -> String {
    if rails < 2 {
        return cipher.to_owned();
    }

    let chars: Vec<char> = cipher.chars().collect();
    let rails = effective_rails(chars.len(), rails);
    let pattern = zigzag(chars.len(), rails);

    let mut counts = vec![0usize; rails];
    for &rail in &pattern {
        counts[rail] += 1;
    }

    // Each rail owns a contiguous chunk of the cipher text.
    let mut rows = Vec::with_capacity(rails);
    let mut rest = chars.as_slice();
    for &count in &counts {
        let (row, tail) = rest.split_at(count);
        rows.push(row.iter());
        rest = tail;
    }

    pattern
        .iter()
        .filter_map(|&rail| rows[rail].next().copied())
        .collect()
}

/// Rail fence key: the number of rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    pub rails: usize,
}

impl TextCipher for RailFence {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        Ok(match direction {
            Direction::Encrypt => rail_fence_encode(text, self.rails),
            Direction::Decrypt => rail_fence_decode(text, self.rails),
        })
    }
}
