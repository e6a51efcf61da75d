//! Pixel access functions
//!
//! Getting and setting individual pixels and whole rows.
//!
//! The `_unchecked` variants skip the `Option`/`Result` wrapping but still
//! panic on out-of-range coordinates through slice indexing.

use super::{Pix, PixMut};
use crate::color::Rgba;
use crate::error::{Error, Result};

#[inline]
fn offset(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without the bounds `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; `x >= width` reads into the next row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.data()[offset(self.width(), x, y)]
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[Rgba] {
        let start = offset(self.width(), 0, y);
        &self.data()[start..start + self.width() as usize]
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[offset(self.width(), x, y)])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: Rgba) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without the bounds `Result`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; `x >= width` writes into the next row.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: Rgba) {
        let idx = offset(self.width(), x, y);
        self.data_mut()[idx] = val;
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [Rgba] {
        let width = self.width() as usize;
        let start = offset(self.width(), 0, y);
        &mut self.data_mut()[start..start + width]
    }
}
