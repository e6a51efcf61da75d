//! Image comparison operations
//!
//! - Pixel equality checks
//! - Pixel difference counting

use super::Pix;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDiffResult {
    /// Number of pixels that differ
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Largest absolute difference of any single channel
    pub max_diff: u16,
}

impl Pix {
    /// Count the number of pixels that differ between two images.
    ///
    /// All four channels take part in the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the images differ in size.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<PixelDiffResult> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }

        let mut n_diff = 0u64;
        let mut max_diff = 0u16;
        for (a, b) in self.data().iter().zip(other.data()) {
            if a == b {
                continue;
            }
            n_diff += 1;
            for (ca, cb) in a.channels().into_iter().zip(b.channels()) {
                max_diff = max_diff.max(ca.abs_diff(cb));
            }
        }

        let total = self.data().len() as f64;
        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / total,
            max_diff,
        })
    }

    /// Check if two images are exactly equal.
    ///
    /// Images of different sizes are never equal.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }
}
