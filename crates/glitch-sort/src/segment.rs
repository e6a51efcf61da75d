//! Run segmentation
//!
//! A line is cut into runs wherever a pixel [`differs`] from the one
//! before it. The differing pixel belongs to no run: it stays where it
//! is and becomes the reference the following pixels are compared to.
//!
//! ```text
//!  index     0    1    2    3
//!  pixel    10   50  [ 5]  80      5 differs from 50
//!  runs    [10   50]       [80]
//!  output   50   10    5   80
//! ```

use crate::distance::{Threshold, differs};
use crate::run::flush_run;
use glitch_core::Rgba;
use std::ops::Range;

/// What a [`RunSegmenter`] decided about one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The pixel extends the open run
    Extend,
    /// The pixel differs from its predecessor: the open run ends here
    Break,
}

/// Incremental run segmenter for a single line.
///
/// The first pixel is compared with itself, so it opens the first run
/// unless the threshold is disabled.
#[derive(Debug, Clone)]
pub struct RunSegmenter {
    threshold: Threshold,
    previous: Option<Rgba>,
}

impl RunSegmenter {
    /// Create a segmenter for a fresh line.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            previous: None,
        }
    }

    /// Feed the next pixel of the line.
    pub fn step(&mut self, px: Rgba) -> Step {
        let previous = self.previous.replace(px).unwrap_or(px);
        if differs(self.threshold, px, previous) {
            Step::Break
        } else {
            Step::Extend
        }
    }
}

/// Segment one line and write its sorted runs into `out`.
///
/// Each run is flushed right-aligned against the pixel that closed it,
/// or against the end of the line for the trailing run.
///
/// # Panics
///
/// Panics if `pixels` does not yield exactly `out.len()` pixels.
pub fn sort_line<I>(pixels: I, threshold: Threshold, out: &mut [Rgba])
where
    I: IntoIterator<Item = Rgba>,
    I::IntoIter: ExactSizeIterator,
{
    let pixels = pixels.into_iter();
    assert_eq!(
        pixels.len(),
        out.len(),
        "line length does not match output"
    );

    let mut segmenter = RunSegmenter::new(threshold);
    let mut run = Vec::with_capacity(out.len());

    for (index, px) in pixels.enumerate() {
        match segmenter.step(px) {
            Step::Break => {
                flush_run(&mut run, index, out);
                out[index] = px;
            }
            Step::Extend => run.push(px),
        }
    }

    flush_run(&mut run, out.len(), out);
}

/// Spans of the runs [`sort_line`] would sort, in line order.
///
/// Pixels outside every span are break pixels and stay in place.
pub fn segment_runs<I>(pixels: I, threshold: Threshold) -> Vec<Range<usize>>
where
    I: IntoIterator<Item = Rgba>,
{
    let mut segmenter = RunSegmenter::new(threshold);
    let mut runs = Vec::new();
    let mut start = 0;
    let mut extent = 0;

    for (index, px) in pixels.into_iter().enumerate() {
        if segmenter.step(px) == Step::Break {
            if start < index {
                runs.push(start..index);
            }
            start = index + 1;
        }
        extent = index + 1;
    }
    if start < extent {
        runs.push(start..extent);
    }
    runs
}
