// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Tag for literal chunks.
pub const TAG_LITERAL: u8 = 0x00;

/// Tag for copy with 1-byte offset (11 bits).
pub const TAG_COPY1: u8 = 0x01;

/// Tag for copy with 2-byte offset (16 bits).
pub const TAG_COPY2: u8 = 0x02;

/// Tag for copy with 4-byte offset (32 bits). Recognised by the decoder;
/// never emitted by this encoder, since every block fits within a 32 KiB
/// window and so never needs an offset wider than 16 bits.
pub const TAG_COPY4: u8 = 0x03;

/// `kBlockSize`: every back-reference is confined to this many bytes of
/// input, so a 2-byte copy offset is always sufficient for encoder output.
/// Do not change this value: older decoders and this one both bake in the
/// assumption that it never has.
pub const BLOCK_SIZE: usize = 1 << 15;

/// `kInputMarginBytes`: below this many remaining input bytes the match
/// finder gives up and emits the rest of the fragment as one literal.
pub const INPUT_MARGIN_BYTES: usize = 15;

/// Smallest accepted working-memory power of two.
pub const MIN_WORKMEM_POWER: u32 = 9;

/// Largest accepted working-memory power of two.
pub const MAX_WORKMEM_POWER: u32 = 15;

/// Working-memory power of two used by the one-shot `compress`/`decode` API.
pub const DEFAULT_WORKMEM_POWER: u32 = MAX_WORKMEM_POWER;
