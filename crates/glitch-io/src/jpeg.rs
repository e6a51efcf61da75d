//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. JPEG carries no alpha: decoded pixels are opaque and
//! alpha is dropped on write.

use crate::{IoError, IoResult};
use glitch_core::color::widen;
use glitch_core::{ImageFormat, Pix, PixMut, Rgba};
use jpeg_decoder::PixelFormat;
use log::trace;
use std::io::{Read, Write};

/// Quality used by [`write_jpeg`]
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// Grayscale (8 and 16 bit), RGB and CMYK streams are all converted
/// to RGBA.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    trace!("JPEG {}x{} {:?}", width, height, info.pixel_format);

    let pixels: Vec<Rgba> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&v| Rgba::gray(widen(v))).collect(),
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|c| Rgba::gray(u16::from_be_bytes([c[0], c[1]])))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|c| Rgba::from_rgb8(c[0], c[1], c[2]))
            .collect(),
        PixelFormat::CMYK32 => data.chunks_exact(4).map(cmyk_to_rgba).collect(),
    };

    if pixels.len() != width as usize * height as usize {
        return Err(IoError::InvalidData(format!(
            "JPEG data holds {} pixels, expected {}x{}",
            pixels.len(),
            width,
            height
        )));
    }

    let mut pix_mut = PixMut::from_pixels(width, height, pixels)?;
    pix_mut.set_informat(ImageFormat::Jpeg);
    Ok(pix_mut.into())
}

fn cmyk_to_rgba(c: &[u8]) -> Rgba {
    let k = 255 - c[3] as u32;
    let ink = |v: u8| ((255 - v as u32) * k / 255) as u8;
    Rgba::from_rgb8(ink(c[0]), ink(c[1]), ink(c[2]))
}

/// Write a JPEG image at [`DEFAULT_JPEG_QUALITY`].
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(pix, writer, DEFAULT_JPEG_QUALITY)
}

/// Write a JPEG image at the given quality (1-100).
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if either dimension exceeds 65535,
/// the JPEG limit.
pub fn write_jpeg_with_quality<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width {} too large", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height {} too large", pix.height())))?;

    let mut data = Vec::with_capacity(pix.data().len() * 3);
    for px in pix.data() {
        let [r, g, b, _] = px.to_rgba8();
        data.extend_from_slice(&[r, g, b]);
    }
    trace!("JPEG encode {}x{} quality {}", width, height, quality);

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}
