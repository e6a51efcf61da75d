//! Line iteration along either axis
//!
//! A line is one row (for [`Axis::X`]) or one column (for [`Axis::Y`]).
//! Both are walked by the same code: the axis only decides how a
//! `(fixed, index)` pair maps onto `(x, y)`.

use glitch_core::{Pix, Rgba};

/// Sweep direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row-wise: `fixed` is the row, `index` walks the columns
    X,
    /// Column-wise: `fixed` is the column, `index` walks the rows
    Y,
}

impl Axis {
    /// Number of pixels in one line along this axis.
    #[inline]
    pub fn extent(self, width: u32, height: u32) -> u32 {
        match self {
            Axis::X => width,
            Axis::Y => height,
        }
    }

    /// Number of lines a sweep along this axis visits.
    #[inline]
    pub fn line_count(self, width: u32, height: u32) -> u32 {
        match self {
            Axis::X => height,
            Axis::Y => width,
        }
    }

    /// Map a position on line `fixed` to `(x, y)` image coordinates.
    #[inline]
    pub fn coords(self, fixed: u32, index: u32) -> (u32, u32) {
        match self {
            Axis::X => (index, fixed),
            Axis::Y => (fixed, index),
        }
    }
}

/// Iterator over the pixels of one line, in increasing index order.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    pix: &'a Pix,
    axis: Axis,
    fixed: u32,
    index: u32,
    extent: u32,
}

impl<'a> Line<'a> {
    /// Walk line `fixed` of `pix` along `axis`.
    ///
    /// `fixed` must be below `axis.line_count(width, height)`.
    pub fn new(pix: &'a Pix, axis: Axis, fixed: u32) -> Self {
        debug_assert!(
            fixed < axis.line_count(pix.width(), pix.height()),
            "line {fixed} out of range for {axis:?}"
        );
        Line {
            pix,
            axis,
            fixed,
            index: 0,
            extent: axis.extent(pix.width(), pix.height()),
        }
    }
}

impl Iterator for Line<'_> {
    type Item = Rgba;

    fn next(&mut self) -> Option<Rgba> {
        if self.index >= self.extent {
            return None;
        }
        let (x, y) = self.axis.coords(self.fixed, self.index);
        self.index += 1;
        Some(self.pix.get_pixel_unchecked(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.extent - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Line<'_> {}
