//! Sweep orchestration
//!
//! A sweep runs the line routine over every row ([`Axis::X`]) or every
//! column ([`Axis::Y`]) of an image. Lines are independent, so each one
//! is a separate rayon task; the sweep returns only after all of them
//! have finished, and the next sweep reads that finished result.
//!
//! Columns are sorted into a column-major scratch grid, which is then
//! transposed into the row-major output, also in parallel.

use crate::distance::Threshold;
use crate::line::{Axis, Line};
use crate::segment::sort_line;
use crate::SortResult;
use glitch_core::{Pix, PixMut, Rgba};
use log::debug;
use rayon::prelude::*;

/// Default X threshold
pub const DEFAULT_THRESHOLD_X: f64 = 0.1;
/// Default Y threshold (Y sweep disabled)
pub const DEFAULT_THRESHOLD_Y: f64 = 0.0;

/// Which axis is swept first in each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisOrder {
    /// Rows first, then columns
    #[default]
    XThenY,
    /// Columns first, then rows
    YThenX,
}

impl AxisOrder {
    /// The two axes in sweep order.
    pub fn axes(self) -> [Axis; 2] {
        match self {
            AxisOrder::XThenY => [Axis::X, Axis::Y],
            AxisOrder::YThenX => [Axis::Y, Axis::X],
        }
    }

    /// The opposite order.
    pub fn flipped(self) -> AxisOrder {
        match self {
            AxisOrder::XThenY => AxisOrder::YThenX,
            AxisOrder::YThenX => AxisOrder::XThenY,
        }
    }
}

/// Options for [`pixel_sort`]
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Threshold for the row sweep ([`Threshold::DISABLED`] skips it)
    pub threshold_x: Threshold,
    /// Threshold for the column sweep ([`Threshold::DISABLED`] skips it)
    pub threshold_y: Threshold,
    /// Sweep order within one iteration
    pub order: AxisOrder,
    /// Number of two-axis cycles; each reads the previous cycle's output
    pub iterations: u32,
    /// Flip `order` after every iteration
    pub alternate: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            threshold_x: Threshold::new(DEFAULT_THRESHOLD_X),
            threshold_y: Threshold::new(DEFAULT_THRESHOLD_Y),
            order: AxisOrder::default(),
            iterations: 1,
            alternate: false,
        }
    }
}

impl SortOptions {
    /// Sort rows only.
    pub fn x_only(threshold: impl Into<Threshold>) -> Self {
        Self::both(threshold, Threshold::DISABLED)
    }

    /// Sort columns only.
    pub fn y_only(threshold: impl Into<Threshold>) -> Self {
        Self::both(Threshold::DISABLED, threshold)
    }

    /// Sort rows and columns with independent thresholds.
    pub fn both(threshold_x: impl Into<Threshold>, threshold_y: impl Into<Threshold>) -> Self {
        Self {
            threshold_x: threshold_x.into(),
            threshold_y: threshold_y.into(),
            ..Default::default()
        }
    }

    /// Set the sweep order
    pub fn order(mut self, order: AxisOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the number of iterations
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set whether the order flips between iterations
    pub fn alternate(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    /// Threshold configured for `axis`.
    pub fn threshold(&self, axis: Axis) -> Threshold {
        match axis {
            Axis::X => self.threshold_x,
            Axis::Y => self.threshold_y,
        }
    }
}

/// Run one sweep over every line of `pix` along `axis`.
///
/// Returns a new image of the same size. A disabled threshold returns
/// `pix` unchanged (sharing its data).
///
/// # Errors
///
/// Returns [`SortError::Core`](crate::SortError::Core) if the output
/// grid cannot be created.
pub fn sort_axis(pix: &Pix, axis: Axis, threshold: Threshold) -> SortResult<Pix> {
    let (width, height) = (pix.width(), pix.height());
    if !threshold.is_enabled() {
        debug!("skipping {axis:?} sweep: threshold disabled");
        return Ok(pix.clone());
    }
    debug!(
        "{axis:?} sweep over {} lines, threshold {}",
        axis.line_count(width, height),
        threshold.value()
    );

    let mut out = PixMut::new(width, height)?;
    out.set_informat(pix.informat());

    match axis {
        Axis::X => {
            out.data_mut()
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(y, row)| sort_line(Line::new(pix, axis, y as u32), threshold, row));
        }
        Axis::Y => {
            // column-major scratch grid: column x is columns[x * height..]
            let h = height as usize;
            let mut columns = vec![Rgba::default(); pix.data().len()];
            columns
                .par_chunks_mut(h)
                .enumerate()
                .for_each(|(x, column)| sort_line(Line::new(pix, axis, x as u32), threshold, column));
            out.data_mut()
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, px) in row.iter_mut().enumerate() {
                        *px = columns[x * h + y];
                    }
                });
        }
    }

    Ok(out.into())
}

/// Pixel-sort `pix` according to `options`.
///
/// Each iteration sweeps both axes in `options.order`, skipping disabled
/// ones; the second sweep reads the first one's output. Zero iterations
/// return `pix` unchanged.
///
/// # Examples
///
/// ```
/// use glitch_core::{Pix, Rgba};
/// use glitch_sort::{SortOptions, pixel_sort};
///
/// let row = [10u16, 50, 5, 80].map(Rgba::gray).to_vec();
/// let pix = Pix::from_pixels(4, 1, row).unwrap();
/// let sorted = pixel_sort(&pix, &SortOptions::x_only(1.0)).unwrap();
/// assert_eq!(sorted.row_data(0), [80u16, 50, 10, 5].map(Rgba::gray));
/// ```
///
/// # Errors
///
/// Returns [`SortError::Core`](crate::SortError::Core) if an output grid
/// cannot be created.
pub fn pixel_sort(pix: &Pix, options: &SortOptions) -> SortResult<Pix> {
    let mut current = pix.clone();
    let mut order = options.order;

    for iteration in 0..options.iterations {
        debug!(
            "pixel sort iteration {}/{} ({order:?})",
            iteration + 1,
            options.iterations
        );
        for axis in order.axes() {
            current = sort_axis(&current, axis, options.threshold(axis))?;
        }
        if options.alternate {
            order = order.flipped();
        }
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::brightness;

    fn gray_pix(width: u32, height: u32, levels: &[u16]) -> Pix {
        let data = levels.iter().map(|&l| Rgba::gray(l)).collect();
        Pix::from_pixels(width, height, data).unwrap()
    }

    fn levels(pix: &Pix) -> Vec<u16> {
        pix.data().iter().map(|px| px.red).collect()
    }

    #[test]
    fn test_options_default() {
        let opts = SortOptions::default();
        assert_eq!(opts.threshold_x.value(), DEFAULT_THRESHOLD_X);
        assert!(!opts.threshold_y.is_enabled());
        assert_eq!(opts.order, AxisOrder::XThenY);
        assert_eq!(opts.iterations, 1);
        assert!(!opts.alternate);
    }

    #[test]
    fn test_options_builders() {
        let opts = SortOptions::both(0.2, 0.3)
            .order(AxisOrder::YThenX)
            .iterations(3)
            .alternate(true);
        assert_eq!(opts.threshold(Axis::X).value(), 0.2);
        assert_eq!(opts.threshold(Axis::Y).value(), 0.3);
        assert_eq!(opts.order, AxisOrder::YThenX);
        assert_eq!(opts.iterations, 3);
        assert!(opts.alternate);

        assert!(!SortOptions::x_only(0.5).threshold_y.is_enabled());
        assert!(!SortOptions::y_only(0.5).threshold_x.is_enabled());
    }

    #[test]
    fn test_axis_order() {
        assert_eq!(AxisOrder::XThenY.axes(), [Axis::X, Axis::Y]);
        assert_eq!(AxisOrder::YThenX.axes(), [Axis::Y, Axis::X]);
        assert_eq!(AxisOrder::XThenY.flipped(), AxisOrder::YThenX);
    }

    #[test]
    fn test_sort_axis_x_single_row() {
        let pix = gray_pix(4, 1, &[10, 50, 5, 80]);
        let out = sort_axis(&pix, Axis::X, Threshold::WHOLE_LINE).unwrap();
        assert_eq!(levels(&out), vec![80, 50, 10, 5]);
    }

    #[test]
    fn test_sort_axis_rows_independent() {
        #[rustfmt::skip]
        let pix = gray_pix(3, 2, &[
            1, 3, 2,
            9, 7, 8,
        ]);
        let out = sort_axis(&pix, Axis::X, Threshold::WHOLE_LINE).unwrap();
        assert_eq!(levels(&out), vec![3, 2, 1, 9, 8, 7]);
    }

    #[test]
    fn test_sort_axis_y_columns() {
        #[rustfmt::skip]
        let pix = gray_pix(2, 3, &[
            1, 6,
            3, 4,
            2, 5,
        ]);
        let out = sort_axis(&pix, Axis::Y, Threshold::WHOLE_LINE).unwrap();
        #[rustfmt::skip]
        assert_eq!(levels(&out), vec![
            3, 6,
            2, 5,
            1, 4,
        ]);
    }

    fn transpose(pix: &Pix) -> Pix {
        let (w, h) = (pix.width(), pix.height());
        let data = (0..w)
            .flat_map(|x| (0..h).map(move |y| (x, y)))
            .map(|(x, y)| pix.get_pixel(x, y).unwrap())
            .collect();
        Pix::from_pixels(h, w, data).unwrap()
    }

    #[test]
    fn test_column_sweep_matches_row_sweep_of_transpose() {
        let levels: Vec<u16> = (0..35u32).map(|i| ((i * 7919) % 4000) as u16).collect();
        let pix = gray_pix(7, 5, &levels);
        for t in [0.005, 0.02, 1.0] {
            let t = Threshold::new(t);
            let cols = sort_axis(&pix, Axis::Y, t).unwrap();
            let rows = sort_axis(&transpose(&pix), Axis::X, t).unwrap();
            assert!(cols.equals(&transpose(&rows)), "threshold {t:?}");
        }
    }

    #[test]
    fn test_disabled_axis_shares_source() {
        let pix = gray_pix(2, 2, &[4, 1, 3, 2]);
        let out = sort_axis(&pix, Axis::X, Threshold::DISABLED).unwrap();
        assert!(out.equals(&pix));
        assert_eq!(pix.ref_count(), 2);
    }

    #[test]
    fn test_second_pass_reads_first_result() {
        #[rustfmt::skip]
        let pix = gray_pix(2, 2, &[
            1, 4,
            3, 2,
        ]);
        // rows: [4, 1] [3, 2]; then columns: [4, 3] [1, 2] -> [4, 3] [2, 1]
        let out = pixel_sort(&pix, &SortOptions::both(1.0, 1.0)).unwrap();
        assert_eq!(levels(&out), vec![4, 2, 3, 1]);

        // columns first: [3, 1] [4, 2]; then rows: [3, 4] -> [4, 3], [1, 2] -> [2, 1]
        let opts = SortOptions::both(1.0, 1.0).order(AxisOrder::YThenX);
        let out = pixel_sort(&pix, &opts).unwrap();
        assert_eq!(levels(&out), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let pix = gray_pix(2, 1, &[1, 2]);
        let out = pixel_sort(&pix, &SortOptions::x_only(1.0).iterations(0)).unwrap();
        assert!(out.equals(&pix));
    }

    #[test]
    fn test_uniform_image_unchanged() {
        let pix = Pix::new_filled(5, 4, Rgba::rgb(100, 200, 300)).unwrap();
        let out = pixel_sort(&pix, &SortOptions::both(0.01, 0.01)).unwrap();
        assert!(out.equals(&pix));
    }

    #[test]
    fn test_informat_preserved() {
        let mut pm = PixMut::new_filled(2, 2, Rgba::WHITE).unwrap();
        pm.set_informat(glitch_core::ImageFormat::Jpeg);
        let pix: Pix = pm.into();
        let out = sort_axis(&pix, Axis::Y, Threshold::WHOLE_LINE).unwrap();
        assert_eq!(out.informat(), glitch_core::ImageFormat::Jpeg);
    }

    #[test]
    fn test_repeated_whole_line_is_stable() {
        let pix = gray_pix(3, 3, &[5, 1, 9, 2, 8, 3, 7, 4, 6]);
        let once = pixel_sort(&pix, &SortOptions::both(1.0, 1.0)).unwrap();
        let twice = pixel_sort(&pix, &SortOptions::both(1.0, 1.0).iterations(2)).unwrap();
        // after one full cycle every row and column is already descending
        for y in 0..3 {
            let row: Vec<u32> = once.row_data(y).iter().map(|&px| brightness(px)).collect();
            assert!(row.windows(2).all(|w| w[0] >= w[1]));
        }
        assert!(once.equals(&twice));
    }
}
