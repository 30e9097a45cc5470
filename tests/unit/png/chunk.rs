use super::*;

#[test]
fn iend_crc_matches_well_known_value() {
    assert_eq!(chunk_crc(b"IEND", &[]), 0xAE42_6082);
}

#[test]
fn crc_covers_tag_and_payload() {
    // IHDR of a 1x1 8-bit RGB image, a value every PNG toolkit agrees on.
    let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
    assert_eq!(chunk_crc(b"IHDR", &ihdr), 0x9077_53DE);
    assert_ne!(chunk_crc(b"IHDR", &ihdr), chunk_crc(b"IHDR", &ihdr[..12]));
}

#[test]
fn write_chunk_layout() {
    let mut out = Vec::new();
    write_chunk(&mut out, b"tEXt", b"abc").unwrap();

    assert_eq!(out.len(), 4 + 4 + 3 + 4);
    assert_eq!(&out[0..4], &[0, 0, 0, 3]);
    assert_eq!(&out[4..8], b"tEXt");
    assert_eq!(&out[8..11], b"abc");
    assert_eq!(&out[11..15], &chunk_crc(b"tEXt", b"abc").to_be_bytes());
}

#[test]
fn empty_chunk_is_twelve_bytes() {
    let mut out = Vec::new();
    write_chunk(&mut out, b"IEND", &[]).unwrap();
    assert_eq!(
        out,
        [0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82]
    );
}
