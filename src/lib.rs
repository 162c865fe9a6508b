// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Azbuka
//!
//! Classical ciphers over the 33-letter Russian alphabet, plus a toy
//! Feistel network, RC4 and textbook Diffie–Hellman / ElGamal.
//!
//! Everything here is deliberately weak and meant for teaching. Every
//! operation is a pure function of its inputs: no global state, no I/O.
//!
//! ## Text handling
//!
//! Substitution ciphers ([`caesar`], [`atbash`], [`affine`], [`vigenere`],
//! [`hill`]) first [`normalize`] their input: uppercase, then drop anything
//! outside `А..Я` (with `Ё`). Transpositions ([`rail_fence_encode`],
//! [`richelieu_encode`]) work on raw characters and keep punctuation.
//!
//! ## Example
//!
//! ```rust
//! use azbuka::{Direction, Hill, caesar};
//!
//! assert_eq!(caesar("Мтксфретвцкб", 2, Direction::Decrypt), "КРИПТОГРАФИЯ");
//!
//! let key = Hill::new([[14, 8, 3], [8, 5, 2], [3, 2, 1]]);
//! let sealed = key.encrypt("МИРЭА");
//! // padding added during encryption stays visible
//! assert_eq!(key.decrypt(&sealed).expect("key is invertible"), "МИРЭАЯ");
//! ```

mod alphabet;
mod book;
mod cipher;
mod error;
mod exchange;
mod feistel;
mod parse;
mod rc4;
mod util;

pub use alphabet::*;
pub use book::*;
pub use cipher::*;
pub use error::*;
pub use exchange::*;
pub use feistel::*;
pub use parse::*;
pub use rc4::*;
pub use util::{modinv, modinv_big, modpow};
