// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! RC4 keystream generator.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Permutation table and cursors; lives for one call and is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Rc4State {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4State {
    /// Key scheduling: 256 swaps driven by the repeated key.
    fn new(key: &[u8]) -> Self {
        let mut s = [0u8; 256];
        for (slot, value) in s.iter_mut().zip(0u8..=255) {
            *slot = value;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        Self { s, i: 0, j: 0 }
    }

    /// One keystream byte; performs one swap.
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        let idx = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[idx as usize]
    }
}

/// XORs `data` with the RC4 keystream for `key`.
///
/// The operation is its own inverse. An empty key is rejected.
pub fn rc4(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::InvalidKey("RC4 key must not be empty".into()));
    }

    let mut state = Rc4State::new(key);
    Ok(data.iter().map(|&byte| byte ^ state.next_byte()).collect())
}

/// Shows cipher output as text when it is valid UTF-8, otherwise as
/// lowercase hex.
pub fn render_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => hex::encode(bytes),
    }
}
