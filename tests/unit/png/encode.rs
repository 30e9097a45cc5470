use std::io::Read as _;

use super::*;
use crate::foundation::error::ProbeError;

fn inflate(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    flate2::read::ZlibDecoder::new(bytes)
        .read_to_end(&mut out)
        .unwrap();
    out
}

#[test]
fn header_bytes_declare_2x2_rgb8() {
    let h = ImageHeader {
        width: TEXTURE_WIDTH,
        height: TEXTURE_HEIGHT,
    };
    assert_eq!(h.to_bytes(), [0, 0, 0, 2, 0, 0, 0, 2, 8, 2, 0, 0, 0]);
}

#[test]
fn raw_scanlines_are_filter_none_rows() {
    let raw = raw_scanlines(Rgb8::new(1, 2, 3));
    assert_eq!(raw, [0, 1, 2, 3, 1, 2, 3, 0, 1, 2, 3, 1, 2, 3]);
}

#[test]
fn ihdr_crc_is_computed_not_copied() {
    let png = encode_solid_png(Rgb8::new(255, 0, 0)).unwrap();
    // signature (8) + length (4) + tag (4) + payload (13) -> crc at 29..33
    assert_eq!(&png[29..33], &[0xFD, 0xD4, 0x9A, 0x73]);
}

#[test]
fn idat_inflates_to_scanlines() {
    let color = Rgb8::new(12, 34, 56);
    let png = encode_solid_png(color).unwrap();

    let idat_len = u32::from_be_bytes(png[33..37].try_into().unwrap()) as usize;
    assert_eq!(&png[37..41], b"IDAT");
    let idat = &png[41..41 + idat_len];

    // zlib header: deflate method, default level
    assert_eq!(idat[0], 0x78);
    assert_eq!(inflate(idat), raw_scanlines(color));
}

#[test]
fn checked_entry_rejects_out_of_range_samples() {
    assert!(matches!(
        encode_solid_png_checked(256, 0, 0),
        Err(ProbeError::InvalidArgument(_))
    ));
    assert!(matches!(
        encode_solid_png_checked(0, -1, 0),
        Err(ProbeError::InvalidArgument(_))
    ));
    assert_eq!(
        encode_solid_png_checked(9, 8, 7).unwrap(),
        encode_solid_png(Rgb8::new(9, 8, 7)).unwrap()
    );
}
