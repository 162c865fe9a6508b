#![no_main]

use std::sync::OnceLock;

use azbuka::{elgamal_decrypt, elgamal_encrypt, ElGamalKeyPair};
use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;

// 2^61 - 1 is prime
const P: u64 = 2_305_843_009_213_693_951;

static KEYPAIR: OnceLock<ElGamalKeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let p = BigUint::from(P);
    let g = BigUint::from(3u32);
    let pair = KEYPAIR.get_or_init(|| ElGamalKeyPair::generate(p.clone(), g.clone()).unwrap());

    let plaintext = BigUint::from_bytes_be(&data[..data.len().min(8)]) % &p;
    let ciphertext = pair.encrypt(&plaintext).expect("plaintext reduced below p");
    let decrypted = pair.decrypt(&ciphertext).expect("prime modulus always invertible");
    assert_eq!(plaintext, decrypted);

    // Same scheme through the free functions with caller-chosen exponents
    if data.len() >= 16 {
        let x = BigUint::from_bytes_be(&data[..8]) % &p;
        let k = BigUint::from_bytes_be(&data[8..16]) % &p;
        let m = BigUint::from_bytes_be(&data[16..]) % &p;
        let ct = elgamal_encrypt(&m, &p, &g, &x, &k).unwrap();
        if let Ok(opened) = elgamal_decrypt(&ct.c1, &ct.c2, &p, &x) {
            assert_eq!(opened, m, "x={x} k={k}");
        }
    }
});
