// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::util::{modinv_big, modpow};

/// An ElGamal ciphertext `(c1, c2) = (g^k, m·y^k) mod p`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElGamalCiphertext {
    pub c1: BigUint,
    pub c2: BigUint,
}

/// Encrypts `m` under the key derived from secret `x`, using session key `k`.
///
/// The public key is `y = g^x mod p`. Messages are not range-checked here;
/// anything `>= p` is reduced and cannot be recovered.
pub fn elgamal_encrypt(
    m: &BigUint,
    p: &BigUint,
    g: &BigUint,
    x: &BigUint,
    k: &BigUint,
) -> Result<ElGamalCiphertext> {
    let y = modpow(g, x, p)?;
    encrypt_with_public(m, p, g, &y, k)
}

fn encrypt_with_public(
    m: &BigUint,
    p: &BigUint,
    g: &BigUint,
    y: &BigUint,
    k: &BigUint,
) -> Result<ElGamalCiphertext> {
    let c1 = modpow(g, k, p)?;
    let c2 = (m * modpow(y, k, p)?) % p;
    Ok(ElGamalCiphertext { c1, c2 })
}

/// Recovers `m = c2 · (c1^x)⁻¹ mod p`.
///
/// Fails with [`Error::NoInverse`] when `c1^x` is not invertible, which
/// happens when `p` is not prime or `c1 ≡ 0`.
pub fn elgamal_decrypt(c1: &BigUint, c2: &BigUint, p: &BigUint, x: &BigUint) -> Result<BigUint> {
    let s = modpow(c1, x, p)?;
    let s_inv = modinv_big(&s, p)?;
    Ok((c2 * s_inv) % p)
}

/// Group parameters together with a secret exponent.
///
/// The secret is zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(any(test, feature = "expose-secret"), derive(Debug))]
pub struct ElGamalKeyPair {
    #[zeroize(skip)]
    p: BigUint,
    #[zeroize(skip)]
    g: BigUint,
    #[zeroize(skip)]
    y: BigUint,
    x: BigUint,
}

impl ElGamalKeyPair {
    /// Builds a key pair from a known secret exponent.
    ///
    /// The modulus must be at least 3 so that session keys can be drawn
    /// from `[1, p - 1)`.
    pub fn from_secret(p: BigUint, g: BigUint, x: BigUint) -> Result<Self> {
        if p < BigUint::from(3u8) {
            return Err(Error::InvalidKey(format!("modulus {p} is too small for session keys")));
        }
        let y = modpow(&g, &x, &p)?;
        Ok(Self { p, g, y, x })
    }

    /// Samples a secret exponent uniformly from `[1, p - 1)`.
    pub fn generate(p: BigUint, g: BigUint) -> Result<Self> {
        if p < BigUint::from(3u8) {
            return Err(Error::InvalidKey(format!("modulus {p} is too small to pick a secret")));
        }
        let x = random_exponent(&p);
        Self::from_secret(p, g, x)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// Public key `y = g^x mod p`.
    pub fn public_key(&self) -> &BigUint {
        &self.y
    }

    /// Encrypts with a fresh random session key.
    ///
    /// Unlike [`elgamal_encrypt`], rejects messages that do not fit below `p`.
    pub fn encrypt(&self, m: &BigUint) -> Result<ElGamalCiphertext> {
        if m >= &self.p {
            return Err(Error::MalformedInput(format!(
                "message {m} does not fit below the modulus {}",
                self.p
            )));
        }
        let k = random_exponent(&self.p);
        encrypt_with_public(m, &self.p, &self.g, &self.y, &k)
    }

    pub fn decrypt(&self, ciphertext: &ElGamalCiphertext) -> Result<BigUint> {
        elgamal_decrypt(&ciphertext.c1, &ciphertext.c2, &self.p, &self.x)
    }
}

/// Uniform in `[1, p - 1)`; callers guarantee `p >= 3`.
fn random_exponent(p: &BigUint) -> BigUint {
    let mut rng = OsRng;
    rng.gen_biguint_range(&BigUint::one(), &(p - BigUint::one()))
}
