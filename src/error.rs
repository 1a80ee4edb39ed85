// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

/// Result type used throughout the codec.
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the Snappy codec.
///
/// Every failure mode the compressor or decompressor can hit maps to
/// exactly one of these; there is no catch-all variant. The container
/// driver additionally surfaces `std::io::Error` directly from its
/// `Read + Write + Seek` operations rather than wrapping them here, since
/// those are plain I/O failures rather than codec-format violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The varint length prefix was truncated or malformed.
    HeaderBad,
    /// The destination buffer is smaller than the declared uncompressed length.
    OutputInsufficient,
    /// Decoding a command would write past the declared uncompressed length.
    OutputOverrun,
    /// A copy offset was zero or exceeded the current output length, or an
    /// opcode's trailer bytes ran past the end of the input.
    DataMalformed,
    /// Input bytes remained after the declared length was reconstructed.
    InputNotConsumed,
    /// Reconstruction finished short of the declared uncompressed length.
    UnexpectedOutputLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::HeaderBad => "snappy: malformed or truncated length header",
            Error::OutputInsufficient => "snappy: destination too small for declared length",
            Error::OutputOverrun => "snappy: decode would write past declared output length",
            Error::DataMalformed => "snappy: malformed copy offset or truncated opcode trailer",
            Error::InputNotConsumed => "snappy: trailing bytes after reconstruction completed",
            Error::UnexpectedOutputLen => "snappy: output shorter than declared length",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}
