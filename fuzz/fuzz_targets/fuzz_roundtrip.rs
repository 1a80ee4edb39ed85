#![no_main]

use libfuzzer_sys::fuzz_target;
use minlz::{compress, decode};

fuzz_target!(|data: &[u8]| {
    // Skip very large inputs to avoid OOM under the fuzzer's memory limit.
    if data.len() > 1_000_000 {
        return;
    }

    let compressed = compress(data);
    let decompressed = decode(&compressed).expect("compress output must always decode");
    assert_eq!(data, &decompressed[..], "roundtrip failed");
});
