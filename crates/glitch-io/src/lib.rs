//! glitch-io - Image I/O for glitch
//!
//! Reads PNG and JPEG into a [`Pix`] and writes a [`Pix`] back out.
//! Every format enabled via features can be read; the usual way out is
//! PNG, which keeps 16-bit channels intact.
//!
//! # Example
//!
//! ```
//! use glitch_core::{Pix, Rgba};
//! use glitch_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let pix = Pix::new_filled(4, 4, Rgba::from_rgb8(10, 20, 30)).unwrap();
//! let bytes = write_image_mem(&pix, ImageFormat::Png).unwrap();
//! let back = read_image_mem(&bytes).unwrap();
//! assert!(back.equals(&pix));
//! ```

mod error;
pub mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use glitch_core::ImageFormat;

#[cfg(feature = "jpeg")]
pub use jpeg::{read_jpeg, write_jpeg, write_jpeg_with_quality};
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use glitch_core::Pix;
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file, detecting its format from the header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    debug!("reading {} as {:?}", path.display(), format);
    let file = File::open(path)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from memory, detecting its format from the header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

#[allow(unused_variables)]
fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} reading not enabled",
            format
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!("writing {} as {:?}", path.display(), format);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_image_format(pix, &mut buf, format)?;
    Ok(buf)
}

#[allow(unused_variables)]
fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer),
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} writing not enabled",
            format
        ))),
    }
}
