// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A toy two-word Feistel network with an XOR round function.

use crate::error::{Error, Result};

/// Round count used when none is configured.
pub const DEFAULT_ROUNDS: usize = 2;

/// Subkeys and round count for the Feistel network.
///
/// Subkeys are consumed cyclically when there are more rounds than keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feistel {
    subkeys: Vec<u64>,
    rounds: usize,
}

impl Feistel {
    /// Network with the default round count.
    pub fn new(subkeys: Vec<u64>) -> Result<Self> {
        FeistelBuilder::new().subkeys(subkeys).build()
    }

    pub fn builder() -> FeistelBuilder {
        FeistelBuilder::new()
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn subkeys(&self) -> &[u64] {
        &self.subkeys
    }

    fn subkey(&self, round: usize) -> u64 {
        self.subkeys[round % self.subkeys.len()]
    }

    /// `(L, R) → (R, L ⊕ (R ⊕ k))` for each round.
    pub fn encrypt_block(&self, (mut left, mut right): (u64, u64)) -> (u64, u64) {
        for round in 0..self.rounds {
            let f = right ^ self.subkey(round);
            (left, right) = (right, left ^ f);
        }
        (left, right)
    }

    /// Undoes [`encrypt_block`](Self::encrypt_block) by running the rounds backwards.
    pub fn decrypt_block(&self, (mut left, mut right): (u64, u64)) -> (u64, u64) {
        for round in (0..self.rounds).rev() {
            let f = left ^ self.subkey(round);
            (left, right) = (right ^ f, left);
        }
        (left, right)
    }

    pub fn encrypt(&self, values: &[u64]) -> Result<[u64; 2]> {
        let (l, r) = self.encrypt_block(as_pair(values)?);
        Ok([l, r])
    }

    pub fn decrypt(&self, values: &[u64]) -> Result<[u64; 2]> {
        let (l, r) = self.decrypt_block(as_pair(values)?);
        Ok([l, r])
    }
}

fn as_pair(values: &[u64]) -> Result<(u64, u64)> {
    match values {
        &[left, right] => Ok((left, right)),
        _ => Err(Error::InvalidKey(format!(
            "Feistel block needs exactly two numbers, got {}",
            values.len()
        ))),
    }
}

/// Builder for [`Feistel`].
#[derive(Debug, Clone)]
pub struct FeistelBuilder {
    subkeys: Vec<u64>,
    rounds: usize,
}

impl FeistelBuilder {
    pub fn new() -> Self {
        Self {
            subkeys: Vec::new(),
            rounds: DEFAULT_ROUNDS,
        }
    }

    pub fn subkeys(mut self, subkeys: Vec<u64>) -> Self {
        self.subkeys = subkeys;
        self
    }

    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Zero rounds is allowed and leaves blocks untouched. Any positive
    /// round count needs at least one subkey.
    pub fn build(self) -> Result<Feistel> {
        if self.rounds > 0 && self.subkeys.is_empty() {
            return Err(Error::InvalidKey(format!(
                "{} rounds requested but no subkeys given",
                self.rounds
            )));
        }

        Ok(Feistel {
            subkeys: self.subkeys,
            rounds: self.rounds,
        })
    }
}

impl Default for FeistelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encrypts a `[left, right]` pair.
pub fn feistel_encrypt(values: &[u64], subkeys: &[u64], rounds: usize) -> Result<[u64; 2]> {
    Feistel::builder()
        .subkeys(subkeys.to_vec())
        .rounds(rounds)
        .build()?
        .encrypt(values)
}

/// Decrypts a `[left, right]` pair.
pub fn feistel_decrypt(values: &[u64], subkeys: &[u64], rounds: usize) -> Result<[u64; 2]> {
    Feistel::builder()
        .subkeys(subkeys.to_vec())
        .rounds(rounds)
        .build()?
        .decrypt(values)
}
