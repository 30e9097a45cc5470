use std::io::Write as _;

use anyhow::Context as _;
use flate2::{Compression, write::ZlibEncoder};

use crate::{
    foundation::core::Rgb8,
    foundation::error::ProbeResult,
    png::chunk::{PNG_SIGNATURE, write_chunk},
};

/// Width of every texture produced by [`encode_solid_png`].
pub const TEXTURE_WIDTH: u32 = 2;
/// Height of every texture produced by [`encode_solid_png`].
pub const TEXTURE_HEIGHT: u32 = 2;

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_TRUECOLOR: u8 = 2;
const COMPRESSION_DEFLATE: u8 = 0;
const FILTER_METHOD_ADAPTIVE: u8 = 0;
const INTERLACE_NONE: u8 = 0;
const FILTER_TYPE_NONE: u8 = 0;
const SAMPLES_PER_PIXEL: usize = 3;

#[derive(Clone, Copy, Debug)]
struct ImageHeader {
    width: u32,
    height: u32,
}

impl ImageHeader {
    fn to_bytes(self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = BIT_DEPTH;
        out[9] = COLOR_TYPE_TRUECOLOR;
        out[10] = COMPRESSION_DEFLATE;
        out[11] = FILTER_METHOD_ADAPTIVE;
        out[12] = INTERLACE_NONE;
        out
    }
}

/// Unfiltered scanlines for a solid texture: each row is a `None` filter byte followed by
/// `TEXTURE_WIDTH` copies of the color.
pub fn raw_scanlines(color: Rgb8) -> Vec<u8> {
    let width = TEXTURE_WIDTH as usize;
    let height = TEXTURE_HEIGHT as usize;
    let row_len = 1 + width * SAMPLES_PER_PIXEL;

    let mut raw = Vec::with_capacity(row_len * height);
    for _ in 0..height {
        raw.push(FILTER_TYPE_NONE);
        for _ in 0..width {
            raw.extend_from_slice(&color.samples());
        }
    }
    raw
}

fn zlib_compress(raw: &[u8]) -> ProbeResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::with_capacity(raw.len() + 16), Compression::default());
    enc.write_all(raw).context("deflate scanlines")?;
    Ok(enc.finish().context("finish zlib stream")?)
}

/// Encode a 2x2 truecolor PNG filled with `color`.
///
/// The result is deterministic for a given color. Every chunk CRC is computed from the bytes
/// actually written. Errors only surface if the in-memory compressor reports one.
#[tracing::instrument(level = "trace")]
pub fn encode_solid_png(color: Rgb8) -> ProbeResult<Vec<u8>> {
    let header = ImageHeader {
        width: TEXTURE_WIDTH,
        height: TEXTURE_HEIGHT,
    };
    let idat = zlib_compress(&raw_scanlines(color))?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 25 + 12 + idat.len() + 12);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &header.to_bytes())?;
    write_chunk(&mut out, b"IDAT", &idat)?;
    write_chunk(&mut out, b"IEND", &[])?;

    tracing::trace!(bytes = out.len(), %color, "encoded solid png");
    Ok(out)
}

/// Like [`encode_solid_png`], but takes unchecked integers and fails with
/// [`crate::ProbeError::InvalidArgument`] when any sample is outside `0..=255`.
pub fn encode_solid_png_checked(r: i64, g: i64, b: i64) -> ProbeResult<Vec<u8>> {
    encode_solid_png(Rgb8::try_from_ints(r, g, b)?)
}

#[cfg(test)]
#[path = "../../tests/unit/png/encode.rs"]
mod tests;
