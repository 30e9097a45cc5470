use crate::foundation::error::{ProbeError, ProbeResult};

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

// PNG caps chunk payloads at 2^31 - 1 bytes.
const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// CRC-32 (ISO 3309 polynomial) over a chunk's tag followed by its payload.
pub fn chunk_crc(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(tag);
    crc.update(data);
    crc.sum()
}

/// Append one `length | tag | data | crc` chunk to `out`.
pub(crate) fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) -> ProbeResult<()> {
    if data.len() > MAX_CHUNK_LEN {
        return Err(ProbeError::invalid_argument(format!(
            "{} chunk payload of {} bytes exceeds the PNG limit",
            String::from_utf8_lossy(tag),
            data.len()
        )));
    }
    let len = data.len() as u32;

    out.reserve(12 + data.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(tag, data).to_be_bytes());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/png/chunk.rs"]
mod tests;
