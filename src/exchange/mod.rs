// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textbook Diffie–Hellman and ElGamal over `Z/p`.
//!
//! Parameters are arbitrary-precision integers. Nothing here checks that
//! `p` is prime or that `g` generates a large subgroup; these are teaching
//! primitives.

mod diffie_hellman;
mod elgamal;

pub use diffie_hellman::{DhExchange, diffie_hellman};
pub use elgamal::{ElGamalCiphertext, ElGamalKeyPair, elgamal_decrypt, elgamal_encrypt};
