// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The 1..5 byte varint32 header that prefixes every Snappy stream with its
//! uncompressed length.

use crate::error::{Error, Result};

/// Decode a base-128 little-endian varint32 from the start of `src`.
/// Returns `(value, bytes_read)`. Fails with `HeaderBad` if the stream ends
/// mid-value, or if the 5th byte's top four bits would overflow 32 bits.
pub fn decode_varint(src: &[u8]) -> Result<(u32, usize)> {
    let mut result: u32 = 0;

    for i in 0..5 {
        let b = *src.get(i).ok_or(Error::HeaderBad)?;
        if i == 4 && b >= 0x10 {
            return Err(Error::HeaderBad);
        }
        result |= ((b & 0x7f) as u32) << (7 * i);
        if b < 0x80 {
            return Ok((result, i + 1));
        }
    }

    Err(Error::HeaderBad)
}

/// Encode `value` into `dst` as a varint32. Returns the number of bytes
/// written (1..5). `dst` must have at least 5 bytes of capacity.
pub fn encode_varint(dst: &mut [u8], mut value: u32) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        dst[i] = (value as u8) | 0x80;
        value >>= 7;
        i += 1;
    }
    dst[i] = value as u8;
    i + 1
}

/// Number of bytes `encode_varint` would write for `value`.
pub fn varint_size(mut value: u32) -> usize {
    let mut n = 1;
    while value >= 0x80 {
        value >>= 7;
        n += 1;
    }
    n
}
