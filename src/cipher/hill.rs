// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Direction, TextCipher};
use crate::alphabet::{self, ALPHABET_LEN, letter_at};
use crate::error::Result;
use crate::util::modinv;

const M: i64 = ALPHABET_LEN as i64;
const SIZE: usize = 3;

/// Letter appended until the text length is a multiple of three.
///
/// Padding is not stripped on decryption.
pub const HILL_PADDING: char = 'Я';

pub type Matrix = [[i64; SIZE]; SIZE];

/// A 3×3 key matrix over Z/33.
///
/// Entries are stored reduced modulo 33, so arbitrary input values never
/// overflow during multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hill {
    key: Matrix,
}

impl Hill {
    pub fn new(matrix: Matrix) -> Self {
        Self {
            key: matrix.map(|row| row.map(|v| v.rem_euclid(M))),
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.key
    }

    /// Determinant of the key matrix, reduced into `[0, 33)`.
    pub fn determinant(&self) -> i64 {
        let m = &self.key;
        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        det.rem_euclid(M)
    }

    /// Inverse key matrix: `det⁻¹ · adj(K) mod 33`.
    ///
    /// Fails with [`Error::NoInverse`](crate::Error::NoInverse) when the
    /// determinant shares a factor with 33.
    pub fn inverse(&self) -> Result<Matrix> {
        let det_inv = modinv(self.determinant(), M)?;
        let adj = adjugate(&self.key);

        let mut inv = [[0i64; SIZE]; SIZE];
        for (r, row) in inv.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (adj[r][c] * det_inv).rem_euclid(M);
            }
        }

        tracing::trace!("derived inverse Hill key");
        Ok(inv)
    }

    pub fn encrypt(&self, text: &str) -> String {
        transform(&self.key, text)
    }

    pub fn decrypt(&self, text: &str) -> Result<String> {
        Ok(transform(&self.inverse()?, text))
    }
}

/// Transposed cofactor matrix. Inputs are already reduced mod 33, so the
/// products stay far from the `i64` limits.
fn adjugate(m: &Matrix) -> Matrix {
    let cofactor = |r: usize, c: usize| {
        let rows: Vec<usize> = (0..SIZE).filter(|&i| i != r).collect();
        let cols: Vec<usize> = (0..SIZE).filter(|&j| j != c).collect();
        let minor = m[rows[0]][cols[0]] * m[rows[1]][cols[1]]
            - m[rows[0]][cols[1]] * m[rows[1]][cols[0]];
        if (r + c) % 2 == 0 { minor } else { -minor }
    };

    let mut adj = [[0i64; SIZE]; SIZE];
    for (r, row) in adj.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = cofactor(c, r);
        }
    }
    adj
}

/// Normalizes, pads, and multiplies each 3-letter column vector by `key`.
fn transform(key: &Matrix, text: &str) -> String {
    let mut indices: Vec<usize> = alphabet::indices(text);
    let pad = alphabet::index_of(HILL_PADDING).unwrap_or(ALPHABET_LEN - 1);
    while indices.len() % SIZE != 0 {
        indices.push(pad);
    }

    indices
        .chunks_exact(SIZE)
        .flat_map(|block| {
            key.iter().map(move |row| {
                let sum: i64 = row.iter().zip(block).map(|(&k, &x)| k * x as i64).sum();
                letter_at(sum.rem_euclid(M) as usize)
            })
        })
        .collect()
}

/// Hill cipher over 3-letter blocks.
///
/// Input is normalized and padded with [`HILL_PADDING`]; the padding stays in
/// the decrypted output.
pub fn hill(text: &str, matrix: Matrix, direction: Direction) -> Result<String> {
    let key = Hill::new(matrix);
    match direction {
        Direction::Encrypt => Ok(key.encrypt(text)),
        Direction::Decrypt => key.decrypt(text),
    }
}

impl TextCipher for Hill {
    fn apply(&self, text: &str, direction: Direction) -> Result<String> {
        match direction {
            Direction::Encrypt => Ok(self.encrypt(text)),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}
