//! PNG image format support
//!
//! Every PNG color type is expanded to RGBA on read. 16-bit samples keep
//! their full precision; everything narrower is widened to 16 bits.

use crate::{IoError, IoResult};
use glitch_core::color::widen;
use glitch_core::{ImageFormat, Pix, PixMut, Rgba};
use log::trace;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    // palette -> RGB(A), low bit depths -> 8, tRNS -> alpha
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    let (color_type, bit_depth) = reader.output_color_type();

    let width = output_info.width;
    let height = output_info.height;
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let sample_bytes = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth after expansion: {:?}",
                other
            )));
        }
    };
    trace!(
        "PNG {}x{} {:?} {:?}",
        width, height, color_type, bit_depth
    );

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let sample = |idx: usize| -> u16 {
        if sample_bytes == 2 {
            u16::from_be_bytes([data[idx], data[idx + 1]])
        } else {
            widen(data[idx])
        }
    };

    let mut pix_mut = PixMut::new(width, height)?;
    pix_mut.set_informat(ImageFormat::Png);

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let row = pix_mut.row_data_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let idx = row_start + x * channels * sample_bytes;
            let s = |c: usize| sample(idx + c * sample_bytes);
            *px = match channels {
                1 => Rgba::gray(s(0)),
                2 => {
                    let g = s(0);
                    Rgba::new(g, g, g, s(1))
                }
                3 => Rgba::rgb(s(0), s(1), s(2)),
                _ => Rgba::new(s(0), s(1), s(2), s(3)),
            };
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// Writes 8-bit RGBA when every channel of every pixel is an exact
/// 8-bit value, 16-bit RGBA otherwise.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();
    let eight_bit = pix.data().iter().all(|px| px.is_8bit_exact());

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(if eight_bit {
        BitDepth::Eight
    } else {
        BitDepth::Sixteen
    });
    trace!("PNG encode {}x{} eight_bit={}", width, height, eight_bit);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_pixel = if eight_bit { 4 } else { 8 };
    let mut data = Vec::with_capacity(pix.data().len() * bytes_per_pixel);
    for px in pix.data() {
        if eight_bit {
            data.extend_from_slice(&px.to_rgba8());
        } else {
            for c in px.channels() {
                data.extend_from_slice(&c.to_be_bytes());
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
