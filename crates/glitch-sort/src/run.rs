//! Run sorting and write-back

use crate::distance::brightness;
use glitch_core::Rgba;
use std::cmp::Reverse;

/// Sort `run` brightest first and write it into `out` so that it ends
/// just before `end`, then clear `run`.
///
/// Element `i` of the sorted run lands at `out[end - run.len() + i]`.
/// The sort is stable: pixels of equal brightness keep their order.
///
/// # Panics
///
/// Panics if `end > out.len()` or `run.len() > end`.
pub fn flush_run(run: &mut Vec<Rgba>, end: usize, out: &mut [Rgba]) {
    if run.is_empty() {
        return;
    }
    run.sort_by_key(|&px| Reverse(brightness(px)));
    let start = end - run.len();
    out[start..end].copy_from_slice(run.as_slice());
    run.clear();
}
