//! glitch - Scanline pixel sorting for Rust
//!
//! Cuts every row and column of an image into runs of similar pixels
//! and sorts each run by brightness, the "pixel sorting" look of glitch
//! art.
//!
//! # Overview
//!
//! - [`Pix`] / [`PixMut`] - 16-bit-per-channel RGBA image grids
//! - [`sort`] - the pixel-sort engine ([`sort::pixel_sort`], [`sort::sort_axis`])
//! - [`io`] - PNG and JPEG reading and writing
//!
//! # Example
//!
//! ```
//! use glitch::sort::{SortOptions, pixel_sort};
//! use glitch::{Pix, Rgba};
//!
//! let row = [10u16, 50, 5, 80].map(Rgba::gray).to_vec();
//! let pix = Pix::from_pixels(4, 1, row).unwrap();
//!
//! let sorted = pixel_sort(&pix, &SortOptions::x_only(1.0)).unwrap();
//! assert_eq!(sorted.get_pixel(0, 0), Some(Rgba::gray(80)));
//! assert_eq!(sorted.width(), 4);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glitch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glitch_io as io;
pub use glitch_sort as sort;
