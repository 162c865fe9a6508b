// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based round-trip tests for every cipher.
//!
//! Uses proptest to check the inverse laws over random keys and texts.

#![allow(clippy::unwrap_used)]

use azbuka::{
    affine, atbash, caesar, diffie_hellman, elgamal_decrypt, elgamal_encrypt, index_of,
    letter_at, modinv, normalize, rail_fence_decode, rail_fence_encode, rc4, richelieu_decode,
    richelieu_encode, vigenere, feistel_decrypt, feistel_encrypt, Book, BookCoordinate,
    Direction, Error, Hill, ALPHABET_LEN, HILL_PADDING,
};
use num_bigint_dig::BigUint;
use proptest::prelude::*;

/// Strings drawn only from the 33-letter alphabet.
fn normalized_text() -> impl Strategy<Value = String> {
    prop::collection::vec(0usize..ALPHABET_LEN, 0..64)
        .prop_map(|idx| idx.into_iter().map(letter_at).collect())
}

/// Any text, mixing Cyrillic, Latin, digits, punctuation and whitespace.
fn raw_text() -> impl Strategy<Value = String> {
    "[а-яА-ЯёЁa-zA-Z0-9 _.,;:!?-]{0,64}"
}

/// A valid Richelieu key: 1 to 4 cycles, each a shuffled 1..=n with n ≤ 9.
fn cycle_key() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (1usize..=9).prop_flat_map(|n| Just((1..=n).collect::<Vec<_>>()).prop_shuffle()),
        1..4,
    )
    .prop_map(|cycles| {
        cycles
            .iter()
            .map(|c| format!("({})", c.iter().map(ToString::to_string).collect::<String>()))
            .collect()
    })
}

fn invertible_a() -> impl Strategy<Value = i64> {
    (-1000i64..1000).prop_filter("a must be coprime with 33", |a| modinv(*a, 33).is_ok())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in raw_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(once.chars().all(|c| index_of(c).is_some()));
    }

    #[test]
    fn caesar_roundtrip(
        text in normalized_text(),
        shift in prop_oneof![Just(i64::MIN), Just(i64::MAX), any::<i64>()],
    ) {
        let enc = caesar(&text, shift, Direction::Encrypt);
        prop_assert_eq!(caesar(&enc, shift, Direction::Decrypt), text);
    }

    #[test]
    fn atbash_involution(text in normalized_text()) {
        prop_assert_eq!(atbash(&atbash(&text)), text);
    }

    #[test]
    fn affine_roundtrip(text in normalized_text(), a in invertible_a(), b in -1000i64..1000) {
        let enc = affine(&text, a, b, Direction::Encrypt).unwrap();
        prop_assert_eq!(affine(&enc, a, b, Direction::Decrypt).unwrap(), text);
    }

    #[test]
    fn affine_rejects_shared_factor(text in normalized_text(), k in -300i64..300, b in any::<i8>()) {
        let a = k * 3;
        let err = affine(&text, a, i64::from(b), Direction::Encrypt).unwrap_err();
        let is_no_inverse = matches!(err, Error::NoInverse { .. });
        prop_assert!(is_no_inverse);
    }

    #[test]
    fn vigenere_roundtrip(text in normalized_text(), key in raw_text()) {
        let enc = vigenere(&text, &key, Direction::Encrypt);
        let dec = vigenere(&enc, &key, Direction::Decrypt);
        if normalize(&key).is_empty() {
            prop_assert!(dec.is_empty());
        } else {
            prop_assert_eq!(dec, text);
        }
    }

    #[test]
    fn rail_fence_roundtrip(
        text in raw_text(),
        rails in prop_oneof![2usize..20, Just(usize::MAX), any::<usize>()],
    ) {
        let enc = rail_fence_encode(&text, rails);
        prop_assert_eq!(enc.chars().count(), text.chars().count());
        prop_assert_eq!(rail_fence_decode(&enc, rails), text);
    }

    #[test]
    fn richelieu_roundtrip(text in raw_text(), key in cycle_key()) {
        let enc = richelieu_encode(&text, &key).unwrap();
        prop_assert_eq!(richelieu_decode(&enc, &key).unwrap(), text);
    }

    #[test]
    fn hill_roundtrip_keeps_padding(text in normalized_text()) {
        let key = Hill::new([[14, 8, 3], [8, 5, 2], [3, 2, 1]]);
        let dec = key.decrypt(&key.encrypt(&text)).unwrap();
        prop_assert!(dec.starts_with(&text));
        prop_assert_eq!(dec.chars().count() % 3, 0);
        prop_assert!(dec.chars().skip(text.chars().count()).all(|c| c == HILL_PADDING));
    }

    #[test]
    fn hill_random_invertible_keys(text in normalized_text(), m in prop::array::uniform3(prop::array::uniform3(-50i64..50))) {
        let key = Hill::new(m);
        prop_assume!(modinv(key.determinant(), 33).is_ok());
        let dec = key.decrypt(&key.encrypt(&text)).unwrap();
        prop_assert!(dec.starts_with(&text));
    }

    #[test]
    fn feistel_roundtrip(
        left in any::<u64>(),
        right in any::<u64>(),
        keys in prop::collection::vec(any::<u64>(), 1..8),
        rounds in 0usize..16,
    ) {
        let enc = feistel_encrypt(&[left, right], &keys, rounds).unwrap();
        prop_assert_eq!(feistel_decrypt(&enc, &keys, rounds).unwrap(), [left, right]);
    }

    #[test]
    fn rc4_self_inverse(
        key in prop::collection::vec(any::<u8>(), 1..64),
        data in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let enc = rc4(&key, &data).unwrap();
        prop_assert_eq!(rc4(&key, &enc).unwrap(), data);
    }

    #[test]
    fn elgamal_roundtrip(m in 0u64..467, x in 1u64..466, k in 1u64..466) {
        let p = BigUint::from(467u32);
        let g = BigUint::from(2u32);
        let m = BigUint::from(m);
        let ct = elgamal_encrypt(&m, &p, &g, &BigUint::from(x), &BigUint::from(k)).unwrap();
        prop_assert_eq!(elgamal_decrypt(&ct.c1, &ct.c2, &p, &BigUint::from(x)).unwrap(), m);
    }

    #[test]
    fn diffie_hellman_agrees(a in 0u64..10_000, b in 0u64..10_000) {
        let p = BigUint::from(7919u32);
        let g = BigUint::from(7u32);
        let dh = diffie_hellman(&g, &p, &BigUint::from(a), &BigUint::from(b)).unwrap();
        prop_assert_eq!(dh.public_b.modpow(&BigUint::from(a), &p), dh.shared.clone());
        prop_assert_eq!(dh.public_a.modpow(&BigUint::from(b), &p), dh.shared);
    }

    #[test]
    fn book_roundtrip_for_reference_words(picks in prop::collection::vec((1i64..=4, 1i64..=5), 1..10)) {
        let book = Book::default();
        let message = book.decode(&picks.iter().map(|&(l, w)| BookCoordinate::new(l, w)).collect::<Vec<_>>());
        let decoded = book.decode(&book.encode(&message));
        prop_assert_eq!(decoded.to_lowercase(), message.to_lowercase());
    }
}
