#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Never panics; a 64-byte key that parses must carry its own public half.
    if let Ok(kp) = custody_crypto::keypair_from_private(data) {
        if data.len() == 64 {
            assert_eq!(&data[32..], kp.public.as_bytes());
        }
        assert_eq!(kp.expanded_hex().len(), 128);
    }
});
