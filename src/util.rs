// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modular arithmetic shared by the affine, Hill and public-key primitives.

use num_bigint_dig::{BigInt, BigUint, ModInverse, Sign};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Computes a⁻¹ mod m with the extended Euclidean algorithm.
///
/// `a` may be negative or larger than `m`; it is reduced first. The result
/// lies in `[0, m)`. Fails with [`Error::NoInverse`] when `gcd(a, m) != 1`.
pub fn modinv(a: i64, m: i64) -> Result<i64> {
    if m <= 0 {
        return Err(Error::InvalidKey(format!("modulus must be positive, got {m}")));
    }

    let modulus = i128::from(m);
    let (mut t, mut new_t) = (0i128, 1i128);
    let (mut r, mut new_r) = (modulus, i128::from(a).rem_euclid(modulus));

    while new_r != 0 {
        let q = r / new_r;
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }

    if r != 1 {
        return Err(Error::no_inverse(a, m));
    }

    // |t| < m, so the reduced value fits back into the input width.
    Ok(t.rem_euclid(modulus) as i64)
}

/// Computes a⁻¹ mod m for arbitrary-precision operands.
///
/// Returns [`Error::NoInverse`] if `a` and `m` share a factor.
pub fn modinv_big(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::InvalidKey("modulus must be positive, got 0".into()));
    }
    if m.is_one() {
        return Ok(BigUint::zero());
    }

    let inverse = a
        .mod_inverse(m)
        .ok_or_else(|| Error::no_inverse(a, m))?;

    // Normalise into [0, m) in case the inverse comes back negative.
    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    let inverse = ((inverse % &modulus) + &modulus) % &modulus;

    inverse.to_biguint().ok_or_else(|| Error::no_inverse(a, m))
}

/// Computes base^exp mod m.
///
/// A zero modulus is rejected; modulus 1 always yields 0 and exponent 0
/// yields `1 mod m`.
pub fn modpow(base: &BigUint, exp: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::InvalidKey("modulus must be positive, got 0".into()));
    }
    if m.is_one() {
        return Ok(BigUint::zero());
    }
    Ok(base.modpow(exp, m))
}
