use crate::{
    foundation::core::Rgb8,
    foundation::error::{ProbeError, ProbeResult},
};

/// What a decoder sees in a PNG byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PngSummary {
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
    /// The shared color when every pixel is identical, `None` otherwise (or for empty images).
    pub solid: Option<Rgb8>,
}

/// Decode `bytes` as PNG with the `image` crate and summarize the result.
pub fn inspect_png(bytes: &[u8]) -> ProbeResult<PngSummary> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| ProbeError::decode(e.to_string()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut pixels = rgb.pixels().map(|p| Rgb8::from(p.0));
    let solid = match pixels.next() {
        Some(first) => pixels.all(|p| p == first).then_some(first),
        None => None,
    };

    Ok(PngSummary {
        width,
        height,
        solid,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/png/inspect.rs"]
mod tests;
