// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Block compressor driver: chops input into `BLOCK_SIZE`-byte fragments,
//! prepends the varint uncompressed-length header, and drives the match
//! finder and emitter over each fragment in turn.

use crate::constants::{BLOCK_SIZE, DEFAULT_WORKMEM_POWER, MAX_WORKMEM_POWER, MIN_WORKMEM_POWER};
use crate::matcher::compress_fragment;
use crate::varint::encode_varint;

/// Upper bound on the compressed size of `source_len` bytes of input:
/// `32 + n + n/6`, matching the reference implementation's formula (not the
/// more elaborate estimate some derivative encoders use).
pub fn max_compressed_length(source_len: usize) -> usize {
    32 + source_len + source_len / 6
}

/// Number of `u16` working-memory entries required for a given `w`.
pub fn workmem_len(w: u32) -> usize {
    debug_assert!((MIN_WORKMEM_POWER..=MAX_WORKMEM_POWER).contains(&w));
    1 << (w - 1)
}

/// Compress `input` into `output` using the caller-supplied `table` as
/// working memory (`table.len() == workmem_len(w)`), writing the varint
/// length header followed by the compressed body. Returns the number of
/// bytes written to `output`, which must have at least
/// `max_compressed_length(input.len())` bytes of capacity.
///
/// `table` is zeroed once per fragment before the match finder runs over
/// it, since stored offsets are only meaningful within the fragment that
/// produced them.
pub fn compress_into(input: &[u8], output: &mut [u8], table: &mut [u16], w: u32) -> usize {
    let mut pos = encode_varint(output, input.len() as u32);

    let mut remaining = input;
    while !remaining.is_empty() {
        let frag_len = remaining.len().min(BLOCK_SIZE);
        let (fragment, rest) = remaining.split_at(frag_len);
        for entry in table.iter_mut() {
            *entry = 0;
        }
        pos = compress_fragment(fragment, output, pos, table, w);
        remaining = rest;
    }

    pos
}

/// Compress `input` into a freshly allocated Snappy stream, using the
/// default working-memory size. The allocation happens once here, at the
/// API boundary; the per-fragment hot loop performs none.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let w = DEFAULT_WORKMEM_POWER;
    let mut table = vec![0u16; workmem_len(w)];
    let mut output = vec![0u8; max_compressed_length(input.len())];
    let n = compress_into(input, &mut output, &mut table, w);
    output.truncate(n);
    output
}
