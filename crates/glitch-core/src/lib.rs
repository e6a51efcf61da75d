//! Glitch Core - Basic data structures for pixel sorting
//!
//! This crate provides the fundamental data structures used throughout
//! the glitch workspace:
//!
//! - [`Rgba`] - A single pixel with 16-bit channels
//! - [`Pix`] / [`PixMut`] - The image grid (immutable / mutable)
//! - [`ImageFormat`] - Encoded image formats known to the I/O layer
//!
//! Decoders hand the sort engine a [`Pix`]; the engine produces a new
//! [`Pix`] of identical dimensions that the encoders consume.

pub mod error;
pub mod pix;

pub use color::Rgba;
pub use error::{Error, Result};
pub use pix::{ImageFormat, Pix, PixMut, PixelDiffResult};

/// Pixel value type and channel conversion helpers.
///
/// # Channel range
///
/// Every channel is stored as a `u16` in `0..=65535`, the precision a
/// 16-bit PNG carries. 8-bit sources are widened with `v * 257` so that
/// `0xff` becomes `0xffff` and narrowing is exact for widened values.
pub mod color {
    /// Largest representable channel intensity.
    pub const CHANNEL_MAX: u16 = u16::MAX;

    /// A single pixel.
    ///
    /// Pixels are plain values: two pixels with the same channels are
    /// indistinguishable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Rgba {
        pub red: u16,
        pub green: u16,
        pub blue: u16,
        pub alpha: u16,
    }

    impl Rgba {
        /// Opaque black.
        pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
        /// Opaque white.
        pub const WHITE: Rgba = Rgba::rgb(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

        /// Create a pixel from 16-bit channels.
        #[inline]
        pub const fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
            Self {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Create an opaque pixel from 16-bit channels.
        #[inline]
        pub const fn rgb(red: u16, green: u16, blue: u16) -> Self {
            Self::new(red, green, blue, CHANNEL_MAX)
        }

        /// Create a pixel from 8-bit channels.
        #[inline]
        pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self::new(widen(r), widen(g), widen(b), widen(a))
        }

        /// Create an opaque pixel from 8-bit channels.
        #[inline]
        pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
            Self::from_rgba8(r, g, b, 0xff)
        }

        /// Create an opaque gray pixel from a 16-bit level.
        #[inline]
        pub const fn gray(level: u16) -> Self {
            Self::rgb(level, level, level)
        }

        /// Channels in `[red, green, blue, alpha]` order.
        #[inline]
        pub const fn channels(self) -> [u16; 4] {
            [self.red, self.green, self.blue, self.alpha]
        }

        /// Narrow to 8-bit channels, rounding to the nearest value.
        #[inline]
        pub fn to_rgba8(self) -> [u8; 4] {
            [
                narrow(self.red),
                narrow(self.green),
                narrow(self.blue),
                narrow(self.alpha),
            ]
        }

        /// Whether every channel survives an 8-bit round trip unchanged.
        #[inline]
        pub fn is_8bit_exact(self) -> bool {
            self.channels().iter().all(|&c| c % 257 == 0)
        }
    }

    /// Widen an 8-bit channel to 16 bits.
    #[inline]
    pub const fn widen(v: u8) -> u16 {
        v as u16 * 257
    }

    /// Narrow a 16-bit channel to 8 bits, rounding to the nearest value.
    #[inline]
    pub fn narrow(v: u16) -> u8 {
        ((v as u32 + 128) / 257) as u8
    }

}
