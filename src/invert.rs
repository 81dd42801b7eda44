use std::path::Path;

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::InvertError;

/// Invert the color channels of `img`, leaving any alpha plane untouched.
///
/// Inputs that are neither 8-bit RGB nor 8-bit RGBA are first converted to
/// 8-bit RGB. That conversion is lossy for grayscale, palette, and
/// higher-bit-depth modes, and drops alpha from modes like 8-bit
/// luma-with-alpha.
pub fn invert(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(invert_rgba(buf)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(invert_rgb(buf)),
        other => DynamicImage::ImageRgb8(invert_rgb(other.to_rgb8())),
    }
}

fn invert_rgb(mut buf: RgbImage) -> RgbImage {
    for px in buf.pixels_mut() {
        let [r, g, b] = px.0;
        px.0 = [255 - r, 255 - g, 255 - b];
    }
    buf
}

fn invert_rgba(mut buf: RgbaImage) -> RgbaImage {
    for px in buf.pixels_mut() {
        let [r, g, b, a] = px.0;
        px.0 = [255 - r, 255 - g, 255 - b, a];
    }
    buf
}

/// Decode `input`, invert it, and encode the result to `output`.
/// The encoder is picked from the output file extension.
pub fn invert_file(input: &Path, output: &Path) -> Result<(), InvertError> {
    if !input.exists() {
        return Err(InvertError::MissingInput(input.to_path_buf()));
    }

    let img = image::open(input)?;
    invert(img).save(output)?;
    Ok(())
}
