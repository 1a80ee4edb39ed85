// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::{compress, decode, max_compressed_length};

/// Deterministic LCG, not a dependency on `rand`; lets every test run
/// produce identical "incompressible" input without bringing in an
/// external generator.
fn lcg_bytes(seed: u32, len: usize) -> Vec<u8> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12345);
            (x >> 16) as u8
        })
        .collect()
}

fn roundtrip(data: &[u8]) -> Result<(), String> {
    let compressed = compress(data);
    if compressed.len() > max_compressed_length(data.len()) {
        return Err(format!(
            "compressed length {} exceeds max_compressed_length {}",
            compressed.len(),
            max_compressed_length(data.len())
        ));
    }
    let decompressed = decode(&compressed).map_err(|e| format!("decode error: {e}"))?;
    if decompressed != data {
        return Err(format!(
            "roundtrip mismatch: original len={}, decoded len={}",
            data.len(),
            decompressed.len()
        ));
    }
    Ok(())
}

#[test]
fn test_round_trip_common_cases() {
    let cases: Vec<(&str, Vec<u8>)> = vec![
        ("empty", Vec::new()),
        ("single_byte", vec![b'x']),
        ("small_text", b"Hello, World!".to_vec()),
        ("repeated", vec![b'a'; 1000]),
        ("pattern", (0..1000).map(|i| (i % 256) as u8).collect()),
        (
            "lorem",
            b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(100),
        ),
        ("lcg_10k", lcg_bytes(42, 10_000)),
    ];

    for (name, data) in cases {
        roundtrip(&data).unwrap_or_else(|e| panic!("{name}: {e}"));
    }
}

#[test]
fn test_empty_input_exact_bytes() {
    assert_eq!(compress(&[]), vec![0x00]);
    assert_eq!(decode(&[0x00]).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_single_60_byte_literal_exact_bytes() {
    let input = vec![b'a'; 60];
    let compressed = compress(&input);
    assert_eq!(compressed[0], 60);
    assert_eq!(compressed[1], 0xec);
    assert_eq!(&compressed[2..], &input[..]);
}

#[test]
fn test_all_zero_kilobyte_roundtrips_small() {
    let input = vec![0u8; 1024];
    let compressed = compress(&input);
    assert!(compressed.len() < 32, "got {} bytes", compressed.len());
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn test_repeated_four_byte_pattern_compresses_small() {
    let input = b"abcd".repeat(512); // 2 KiB
    let compressed = compress(&input);
    assert!(compressed.len() < 32, "got {} bytes", compressed.len());
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn test_large_data_compresses() {
    let data: Vec<u8> = (0u32..100 * 1024)
        .map(|i| (i.wrapping_mul(7919) % 256) as u8)
        .collect();

    let compressed = compress(&data);
    assert_eq!(decode(&compressed).unwrap(), data);
    assert!(
        compressed.len() < data.len(),
        "should achieve some compression on 100KB of a repeating ramp"
    );
}

#[test]
fn test_highly_compressible_ratio() {
    let data = vec![b'A'; 10_000];
    let compressed = compress(&data);
    assert_eq!(decode(&compressed).unwrap(), data);
    assert!(
        compressed.len() < data.len() / 10,
        "should achieve >90% compression ratio on repeated data"
    );
}

#[test]
fn test_incompressible_data_still_roundtrips() {
    let data = lcg_bytes(0xdead_beef, 1000);
    let compressed = compress(&data);
    assert_eq!(decode(&compressed).unwrap(), data);
    assert!(compressed.len() <= max_compressed_length(data.len()));
}

#[test]
fn test_edge_case_lengths_around_input_margin() {
    for len in [0, 1, 14, 15, 16, 17, 59, 60, 61, 255, 256] {
        let data = vec![0u8; len];
        roundtrip(&data).unwrap_or_else(|e| panic!("len={len}: {e}"));
    }
}

#[test]
fn test_multi_block_input_roundtrips() {
    let data: Vec<u8> = (0..crate::BLOCK_SIZE * 3 + 777)
        .map(|i| (i.wrapping_mul(2_654_435_761) % 256) as u8)
        .collect();
    roundtrip(&data).unwrap();
}

#[test]
fn test_bounded_output_property_across_sizes() {
    for &len in &[0usize, 1, 100, 1000, 10_000, 50_000] {
        let data = lcg_bytes(len as u32 + 7, len);
        let compressed = compress(&data);
        assert!(
            compressed.len() <= max_compressed_length(data.len()),
            "len={len}: compressed {} > bound {}",
            compressed.len(),
            max_compressed_length(data.len())
        );
    }
}

#[test]
fn test_determinism() {
    let data = lcg_bytes(99, 5000);
    assert_eq!(compress(&data), compress(&data));
}
