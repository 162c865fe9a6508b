#![no_main]

use azbuka::{richelieu_decode, richelieu_encode};
use libfuzzer_sys::fuzz_target;

// The first line of input is the key, the rest is the text.
fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let input: &str = &input;
    let (key, text) = input.split_once('\n').unwrap_or((input, ""));

    // Arbitrary keys must be rejected, never panic
    let Ok(encoded) = richelieu_encode(text, key) else {
        return;
    };
    let decoded = richelieu_decode(&encoded, key).expect("key parsed once already");

    assert_eq!(decoded, text, "Richelieu roundtrip failed for key {key:?}");
});
