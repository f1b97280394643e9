#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 32 bytes of hash, then 8 of work, then optionally 8 of difficulty.
    if data.len() < 40 {
        return;
    }
    let mut hash_bytes = [0u8; 32];
    hash_bytes.copy_from_slice(&data[..32]);
    let mut work_bytes = [0u8; 8];
    work_bytes.copy_from_slice(&data[32..40]);
    let work = u64::from_le_bytes(work_bytes);
    let block_hash = custody_types::BlockHash::new(hash_bytes);

    let difficulty = match data.get(40..48) {
        Some(d) => {
            let mut b = [0u8; 8];
            b.copy_from_slice(d);
            u64::from_le_bytes(b)
        }
        None => 0xFFFF_FFF8_0000_0000,
    };

    let valid = custody_work::validate_work(&block_hash, work, difficulty);
    assert_eq!(valid, custody_work::work_value(&block_hash, work) >= difficulty);
    assert_eq!(custody_work::parse_work(&format!("{work:016x}")), Some(work));
});
