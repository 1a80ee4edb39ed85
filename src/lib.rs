// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! # Snappy
//!
//! A clean-room reimplementation of Google's Snappy byte-oriented lossless
//! compression codec, plus a page-indexed block container built on top of
//! it.
//!
//! The codec itself is purely in-memory: it never allocates in the hot
//! path (compression writes into a caller-supplied output buffer and a
//! caller-supplied working-memory scratch region; decompression writes
//! into a caller-supplied output buffer), never unwinds, and never
//! retains borrowed buffers past the call that took them. This makes it
//! usable from constrained environments as well as ordinary userspace
//! code — only the convenience entry points (`compress`, `decode`) do any
//! allocating, and they do it at the API boundary, not inside the match
//! finder or the opcode decoder.
//!
//! ## Block format example
//!
//! ```rust
//! use minlz::{compress, decode};
//!
//! let data = b"Hello, World! This is a test of Snappy compression.";
//! let compressed = compress(data);
//! let decompressed = decode(&compressed).expect("decompression failed");
//! assert_eq!(data, &decompressed[..]);
//! ```
//!
//! ## Container format example
//!
//! ```rust
//! use minlz::container::{read_container, write_container, Snappy};
//! use std::io::Cursor;
//!
//! let data = b"some data split across pages".repeat(200);
//! let mut archive = Cursor::new(Vec::new());
//! write_container(&Snappy, &data, 4096, &mut archive).unwrap();
//!
//! let mut archive = Cursor::new(archive.into_inner());
//! let restored = read_container(&Snappy, &mut archive, 4096).unwrap();
//! assert_eq!(data, restored);
//! ```

mod block;
mod constants;
pub mod container;
mod decode;
mod emit;
mod error;
mod matcher;
mod primitives;
mod varint;

pub use block::{compress, compress_into, max_compressed_length, workmem_len};
pub use constants::{BLOCK_SIZE, MAX_WORKMEM_POWER, MIN_WORKMEM_POWER};
pub use decode::{decode, decode_body_checked, decode_full, decode_into, decode_len};
pub use error::{Error, Result};
pub use varint::{decode_varint, encode_varint, varint_size};

#[cfg(test)]
mod tests;
