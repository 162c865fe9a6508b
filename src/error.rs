// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur while running a cipher or parsing its inputs.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("No invertible element: {value} has no inverse modulo {modulus}")]
    NoInverse { value: String, modulus: String },

    #[error("Key exchange failed: shared secrets do not match")]
    ProtocolMismatch,

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl Error {
    pub(crate) fn no_inverse(value: impl ToString, modulus: impl ToString) -> Self {
        Error::NoInverse {
            value: value.to_string(),
            modulus: modulus.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
