#![no_main]
use libfuzzer_sys::fuzz_target;
use oxirle::rle::{RunIndex, decode_all};

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary bytes may fail, but must never panic.
    let encoded: Vec<i8> = data.iter().map(|&b| b as i8).collect();
    if let Ok(index) = RunIndex::parse(&encoded) {
        let stored: usize = index.runs().map(|r| r.stored()).sum();
        assert_eq!(stored, index.literal_count());

        let decoded = decode_all(&encoded).unwrap();
        assert_eq!(decoded.len(), index.virtual_len());
    }
});
