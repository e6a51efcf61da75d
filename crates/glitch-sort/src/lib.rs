//! glitch-sort - Scanline pixel sorting
//!
//! Every row (or column) of an image is cut into runs of similar pixels,
//! each run is sorted brightest first, and written back where it was,
//! right-aligned against the pixel that ended it.
//!
//! - [`distance`] - brightness key and the threshold difference test
//! - [`line`] - axis-agnostic line iteration
//! - [`segment`] - run segmentation of one line
//! - [`run`] - sorting and writing back one run
//! - [`sweep`] - parallel sweeps and the multi-pass driver
//!
//! # Example
//!
//! ```
//! use glitch_core::{Pix, Rgba};
//! use glitch_sort::{AxisOrder, SortOptions, pixel_sort};
//!
//! let pix = Pix::new_filled(8, 8, Rgba::gray(1000)).unwrap();
//! let opts = SortOptions::both(0.1, 0.2).order(AxisOrder::YThenX);
//! let out = pixel_sort(&pix, &opts).unwrap();
//! assert!(out.equals(&pix));
//! ```

pub mod distance;
mod error;
pub mod line;
pub mod run;
pub mod segment;
pub mod sweep;

pub use error::{SortError, SortResult};

// Re-export commonly used items
pub use distance::{Threshold, brightness, differs};
pub use line::{Axis, Line};
pub use segment::{RunSegmenter, Step, segment_runs, sort_line};
pub use sweep::{AxisOrder, SortOptions, pixel_sort, sort_axis};
