#![no_main]

use azbuka::rc4;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&key_len, rest)) = data.split_first() else {
        return;
    };
    let key_len = (key_len as usize).min(rest.len());
    let (key, plain) = rest.split_at(key_len);

    let Ok(sealed) = rc4(key, plain) else {
        assert!(key.is_empty());
        return;
    };
    let opened = rc4(key, &sealed).expect("same key accepted twice");

    assert_eq!(opened, plain);
});
