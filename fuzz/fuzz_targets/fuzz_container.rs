#![no_main]

use libfuzzer_sys::fuzz_target;
use minlz::container::{read_container, write_container, Snappy};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 1_000_000 {
        return;
    }

    // First byte picks a page size in a small range so both stored-block
    // and compressed-block paths get exercised; the rest is the payload.
    let page_size = 64 + (data[0] as usize) * 16;
    let payload = &data[1..];

    let mut archive = Cursor::new(Vec::new());
    write_container(&Snappy, payload, page_size, &mut archive).expect("write_container failed");

    let mut archive = Cursor::new(archive.into_inner());
    let restored =
        read_container(&Snappy, &mut archive, page_size).expect("read_container failed");
    assert_eq!(payload, &restored[..], "container roundtrip failed");
});
