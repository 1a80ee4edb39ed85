// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The hash-table LZ77 match finder (`snappy_compress_fragment`): scans one
//! fragment of at most `BLOCK_SIZE` bytes and emits a byte-exact Snappy
//! opcode stream via `emit::emit_literal`/`emit::emit_copy`.
//!
//! This is the single hottest path in the compressor, so the control flow
//! below follows the reference algorithm line for line (heuristic skip,
//! tail-hash insertion) rather than a cleaned-up restatement — a faithful
//! port here is what keeps the output byte-exact.

use crate::constants::{BLOCK_SIZE, INPUT_MARGIN_BYTES};
use crate::emit::{emit_copy, emit_literal};
use crate::primitives::{find_match_length, hash, load_u32, load_u64};

/// Compress one fragment into `output` starting at `pos`, returning the new
/// cursor. `table` is the working-memory hash table, sized `1 << (w - 1)`
/// `u16` entries and zeroed by the caller before every fresh fragment
/// (stored offsets are relative to this fragment's start).
pub fn compress_fragment(
    input: &[u8],
    output: &mut [u8],
    pos: usize,
    table: &mut [u16],
    w: u32,
) -> usize {
    debug_assert!(input.len() <= BLOCK_SIZE);
    debug_assert!((9..=15).contains(&w));
    debug_assert_eq!(table.len(), 1 << (w - 1));

    let mut pos = pos;
    let ip_end = input.len();

    if ip_end < INPUT_MARGIN_BYTES {
        if ip_end > 0 {
            pos = emit_literal(output, pos, input, 0, ip_end, false);
        }
        return pos;
    }

    let shift = 33 - w;
    let ip_limit = ip_end - INPUT_MARGIN_BYTES;
    let mut next_emit = 0usize;
    let mut ip = 1usize;
    let mut next_hash = hash(load_u32(&input[ip..]), shift);

    'main_loop: loop {
        // Step 1: scan forward for a 4-byte match, with heuristic skipping
        // (the farther we get without a match, the faster we scan).
        let mut skip: u32 = 32;
        let mut next_ip = ip;
        let candidate;
        loop {
            ip = next_ip;
            let h = next_hash;
            let bytes_between_hash_lookups = skip >> 5;
            skip += 1;
            next_ip = ip + bytes_between_hash_lookups as usize;
            if next_ip > ip_limit {
                break 'main_loop;
            }
            next_hash = hash(load_u32(&input[next_ip..]), shift);
            let cand = table[h as usize] as usize;
            table[h as usize] = ip as u16;
            if load_u32(&input[ip..]) == load_u32(&input[cand..]) {
                candidate = cand;
                break;
            }
        }

        // Step 2: a 4-byte match was found; the bytes since the last emitted
        // position are unmatched literal bytes.
        pos = emit_literal(output, pos, input, next_emit, ip - next_emit, true);

        // Step 3: emit the match, then greedily keep matching from where it
        // left off before falling back to the full scan.
        let mut candidate = candidate;
        loop {
            let base = ip;
            let matched = 4 + find_match_length(&input[candidate + 4..], &input[ip + 4..ip_end]);
            ip += matched;
            let offset = (base - candidate) as u32;
            pos = emit_copy(output, pos, offset, matched);
            next_emit = ip;
            if ip >= ip_limit {
                break 'main_loop;
            }

            // Tail-hash insertion: index the byte just behind the copy too,
            // which measurably improves density at trivial cost.
            let insert_tail = ip - 1;
            let input_bytes = load_u64(&input[insert_tail..]);
            let prev_hash = hash(input_bytes as u32, shift);
            table[prev_hash as usize] = insert_tail as u16;
            let cur_bytes = (input_bytes >> 8) as u32;
            let cur_hash = hash(cur_bytes, shift);
            let cand = table[cur_hash as usize] as usize;
            let candidate_bytes = load_u32(&input[cand..]);
            table[cur_hash as usize] = ip as u16;

            if cur_bytes != candidate_bytes {
                next_hash = hash((input_bytes >> 16) as u32, shift);
                ip += 1;
                continue 'main_loop;
            }
            candidate = cand;
        }
    }

    if next_emit < ip_end {
        pos = emit_literal(output, pos, input, next_emit, ip_end - next_emit, false);
    }
    pos
}
