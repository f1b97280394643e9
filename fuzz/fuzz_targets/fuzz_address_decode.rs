#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Any address that decodes must re-encode to itself, modulo the legacy prefix.
    if let Some((network, key)) = custody_crypto::decode_address(s) {
        let encoded = custody_crypto::encode_address(&key, network);
        let body = &s[s.find('_').map_or(0, |i| i + 1)..];
        assert!(encoded.as_str().ends_with(body));
    }
});
