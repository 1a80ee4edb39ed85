// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Page-indexed container: a fixed-size-page file format with a compressed
//! size table up front, one block per page, and a stored-block fallback for
//! pages that don't compress. Generic over `Read + Seek` / `Write + Seek`
//! the way this crate's stream types have always preferred borrowing a
//! caller-owned handle over opening files themselves.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::block;
use crate::error::Result;

/// A compression codec pluggable into the container driver. `Snappy` is the
/// only production implementor; the trait exists so a second codec can be
/// added later without reshaping `write_container`/`read_container`.
///
/// `decompress` always receives the whole block as `compress` produced it
/// (header included) — the driver never parses a codec's own framing to
/// size its output buffer, since that framing is specific to each codec.
/// Implementors that need the output size ahead of time recover it from
/// `decompressed_len`.
pub trait Codec {
    /// Upper bound on the compressed size of `source_len` bytes of input.
    fn max_compressed_len(&self, source_len: usize) -> usize;

    /// Compress `input` into `output`, returning the number of bytes
    /// written. `output` is at least `max_compressed_len(input.len())`
    /// bytes long.
    fn compress(&self, input: &[u8], output: &mut [u8]) -> usize;

    /// The uncompressed size `decompress` will produce for this block, read
    /// from whatever header `compress` prepended. The driver uses this to
    /// size the destination buffer before calling `decompress`.
    fn decompressed_len(&self, input: &[u8]) -> Result<usize>;

    /// Decompress `input` (the full block, header included) into `output`,
    /// whose length is `decompressed_len(input)`.
    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<()>;
}

/// The codec this crate implements end to end.
#[derive(Debug, Default, Clone, Copy)]
pub struct Snappy;

impl Codec for Snappy {
    fn max_compressed_len(&self, source_len: usize) -> usize {
        block::max_compressed_length(source_len)
    }

    fn compress(&self, input: &[u8], output: &mut [u8]) -> usize {
        let w = crate::constants::DEFAULT_WORKMEM_POWER;
        let mut table = vec![0u16; block::workmem_len(w)];
        block::compress_into(input, output, &mut table, w)
    }

    fn decompressed_len(&self, input: &[u8]) -> Result<usize> {
        crate::decode::decode_len(input).map(|(len, _)| len)
    }

    fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        crate::decode::decode_full(input, output)
    }
}

fn io_err(e: impl std::error::Error + Send + Sync + 'static) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}

/// Write `input`, split into `page_size`-byte pages, as a container to `out`.
/// Pages that a compressed stream would not shrink are stored raw instead
/// (detected by `olen >= ilen`); the size table entry for such a page is set
/// to `ilen`, which for every page but a possibly-short final one equals
/// `page_size` — the same value the reader uses to recognise a stored page.
pub fn write_container<C: Codec, W: Write + Seek>(
    codec: &C,
    mut input: &[u8],
    page_size: usize,
    out: &mut W,
) -> io::Result<()> {
    assert!(page_size > 0, "page_size must be nonzero");

    let page_count = input.len().div_ceil(page_size);
    let page_count_u32 = u32::try_from(page_count)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many pages"))?;

    out.write_all(&page_count_u32.to_le_bytes())?;
    // Reserve the size table; real entries are overwritten as each page is sized.
    out.write_all(&vec![0u8; page_count * 4])?;

    let mut scratch = vec![0u8; 2 * page_size];

    for i in 0..page_count {
        let ilen = input.len().min(page_size);
        let (page, rest) = input.split_at(ilen);
        input = rest;

        if scratch.len() < codec.max_compressed_len(ilen) {
            scratch = vec![0u8; codec.max_compressed_len(ilen)];
        }
        let olen = codec.compress(page, &mut scratch);

        // Stored-block fallback: a page compression didn't shrink is kept raw.
        let (payload, len): (&[u8], usize) = if olen >= ilen {
            (page, ilen)
        } else {
            (&scratch[..olen], olen)
        };

        out.seek(SeekFrom::Start(u64::from(i as u32 + 1) * 4))?;
        out.write_all(&(len as u32).to_le_bytes())?;
        out.seek(SeekFrom::End(0))?;
        out.write_all(payload)?;
    }

    Ok(())
}

/// Read a container written by `write_container` back into a single
/// concatenated buffer.
pub fn read_container<C: Codec, R: Read + Seek>(
    codec: &C,
    input: &mut R,
    page_size: usize,
) -> io::Result<Vec<u8>> {
    assert!(page_size > 0, "page_size must be nonzero");

    let mut header = [0u8; 4];
    input.read_exact(&mut header)?;
    let page_count = u32::from_le_bytes(header) as u64;

    let mut ipos = (page_count + 1) * 4;
    let mut out = Vec::new();

    for i in 0..page_count {
        input.seek(SeekFrom::Start((i + 1) * 4))?;
        let mut len_bytes = [0u8; 4];
        input.read_exact(&mut len_bytes)?;
        let ilen = u32::from_le_bytes(len_bytes) as usize;

        input.seek(SeekFrom::Start(ipos))?;
        let mut payload = vec![0u8; ilen];
        input.read_exact(&mut payload)?;
        ipos += ilen as u64;

        if ilen == page_size {
            out.extend_from_slice(&payload);
        } else {
            let declared = codec.decompressed_len(&payload).map_err(io_err)?;
            let start = out.len();
            out.resize(start + declared, 0);
            codec.decompress(&payload, &mut out[start..]).map_err(io_err)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(input: &[u8], page_size: usize) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        write_container(&Snappy, input, page_size, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.into_inner());
        read_container(&Snappy, &mut cursor, page_size).unwrap()
    }

    #[test]
    fn empty_input_produces_zero_pages() {
        let mut buf = Cursor::new(Vec::new());
        write_container(&Snappy, &[], 4096, &mut buf).unwrap();
        let bytes = buf.into_inner();
        assert_eq!(u32::from_le_bytes(bytes[..4].try_into().unwrap()), 0);
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn single_partial_page_roundtrips() {
        let input = vec![b'x'; 100];
        assert_eq!(roundtrip(&input, 4096), input);
    }

    #[test]
    fn multi_page_mixed_compressibility_roundtrips() {
        let page_size = 4096;
        let mut input = vec![0u8; page_size]; // highly compressible
        let mut seed = 7u32;
        input.extend((0..page_size).map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            (seed >> 16) as u8
        })); // incompressible, likely triggers stored fallback
        input.extend(vec![b'z'; 10]); // short final page
        assert_eq!(roundtrip(&input, page_size), input);
    }

    #[test]
    fn incompressible_full_page_uses_stored_fallback() {
        let page_size = 512;
        let mut seed = 99u32;
        let input: Vec<u8> = (0..page_size)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
                (seed >> 16) as u8
            })
            .collect();

        let mut buf = Cursor::new(Vec::new());
        write_container(&Snappy, &input, page_size, &mut buf).unwrap();
        let bytes = buf.into_inner();
        let size0 = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;
        assert_eq!(size0, page_size, "incompressible page should fall back to stored");

        let mut cursor = Cursor::new(bytes);
        assert_eq!(read_container(&Snappy, &mut cursor, page_size).unwrap(), input);
    }

    #[test]
    fn exact_multiple_of_page_size_roundtrips() {
        let page_size = 256;
        let input = vec![b'a'; page_size * 3];
        assert_eq!(roundtrip(&input, page_size), input);
    }
}
