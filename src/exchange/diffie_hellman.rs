// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::error::{Error, Result};
use crate::util::modpow;

/// Public values and the agreed secret of one Diffie–Hellman run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DhExchange {
    /// `A = g^a mod p`
    pub public_a: BigUint,
    /// `B = g^b mod p`
    pub public_b: BigUint,
    /// `K = B^a = A^b mod p`
    pub shared: BigUint,
}

/// Runs both sides of the exchange with secrets `a` and `b`.
///
/// Each side derives the key from the other's public value. The two keys
/// are compared and [`Error::ProtocolMismatch`] is returned if they
/// differ; with correct arithmetic that cannot happen.
pub fn diffie_hellman(g: &BigUint, p: &BigUint, a: &BigUint, b: &BigUint) -> Result<DhExchange> {
    let public_a = modpow(g, a, p)?;
    let public_b = modpow(g, b, p)?;

    let k1 = modpow(&public_b, a, p)?;
    let k2 = modpow(&public_a, b, p)?;
    if k1 != k2 {
        return Err(Error::ProtocolMismatch);
    }

    tracing::debug!(%public_a, %public_b, modulus_bits = p.bits(), "diffie-hellman keys agreed");

    Ok(DhExchange {
        public_a,
        public_b,
        shared: k1,
    })
}

#[cfg(test)]
mod test_diffie_hellman {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn textbook_example() {
        let dh = diffie_hellman(&big(5), &big(23), &big(6), &big(15)).unwrap();
        assert_eq!(dh.public_a, big(8));
        assert_eq!(dh.public_b, big(19));
        assert_eq!(dh.shared, big(2));
        assert_eq!(dh.public_a.modpow(&big(15), &big(23)), dh.shared);
        assert_eq!(dh.public_b.modpow(&big(6), &big(23)), dh.shared);
    }

    #[test]
    fn modulus_one_collapses_to_zero() {
        let dh = diffie_hellman(&big(11), &big(1), &big(7), &big(6)).unwrap();
        assert_eq!(dh.shared, big(0));
    }

    #[test]
    fn zero_exponents_agree_on_one() {
        let dh = diffie_hellman(&big(5), &big(23), &big(0), &big(0)).unwrap();
        assert_eq!(dh, DhExchange { public_a: big(1), public_b: big(1), shared: big(1) });
    }

    #[test]
    fn zero_modulus_is_rejected() {
        let err = diffie_hellman(&big(5), &big(0), &big(6), &big(15)).unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));
    }

    #[test]
    fn large_parameters() {
        // 2^127 - 1 is prime
        let p = (BigUint::from(1u8) << 127usize) - BigUint::from(1u8);
        let a = BigUint::from(0x1234_5678_9abc_def0u64);
        let b = BigUint::from(0x0fed_cba9_8765_4321u64);
        let dh = diffie_hellman(&big(3), &p, &a, &b).unwrap();
        assert!(dh.shared < p);
    }
}
