#![no_main]

use azbuka::{rail_fence_decode, rail_fence_encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&rails, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);

    let encoded = rail_fence_encode(&text, rails as usize);
    assert_eq!(encoded.chars().count(), text.chars().count());

    let decoded = rail_fence_decode(&encoded, rails as usize);
    assert_eq!(decoded, text, "rail fence roundtrip failed with {rails} rails");
});
