//! Color distance and brightness
//!
//! Two pixels "differ" when any of their red, green or blue channels are
//! at least `threshold` apart, measured as a fraction of the full channel
//! range. Alpha never takes part, neither in the distance nor in
//! brightness. Channels are read straight, not premultiplied by alpha.

use glitch_core::Rgba;
use glitch_core::color::CHANNEL_MAX;

/// Fractional channel-difference cutoff for one axis.
///
/// Always within `[0, 1]`:
///
/// - `0` disables the axis (every adjacent pair differs, nothing moves)
/// - `1` never breaks a run (the whole line is sorted)
///
/// `NaN` and negative inputs clamp to `0`, values above `1` clamp to `1`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Threshold(f64);

impl Threshold {
    /// Threshold that disables an axis.
    pub const DISABLED: Threshold = Threshold(0.0);
    /// Threshold that turns every line into a single run.
    pub const WHOLE_LINE: Threshold = Threshold(1.0);

    /// Create a threshold, clamping into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            Self::DISABLED
        } else {
            Threshold(value.min(1.0))
        }
    }

    /// The clamped value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a pass with this threshold can move any pixel.
    #[inline]
    pub fn is_enabled(self) -> bool {
        self.0 > 0.0
    }

    /// Whether no pair of pixels can ever differ.
    #[inline]
    pub fn spans_whole_line(self) -> bool {
        self.0 >= 1.0
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Threshold::new(value)
    }
}

/// Sort key of a pixel: the unnormalized sum of red, green and blue.
#[inline]
pub fn brightness(px: Rgba) -> u32 {
    px.red as u32 + px.green as u32 + px.blue as u32
}

/// Difference of two channel values as a fraction of the full range.
///
/// The pair is ordered before subtracting, so the result is symmetric
/// and cannot wrap.
#[inline]
fn channel_distance(a: u16, b: u16) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    f64::from(hi - lo) / f64::from(CHANNEL_MAX)
}

/// Whether `a` and `b` are far enough apart to break a run.
///
/// True when any of the red, green or blue distances is `>= threshold`.
pub fn differs(threshold: Threshold, a: Rgba, b: Rgba) -> bool {
    if threshold.spans_whole_line() {
        return false;
    }
    let limit = threshold.value();
    channel_distance(a.red, b.red) >= limit
        || channel_distance(a.green, b.green) >= limit
        || channel_distance(a.blue, b.blue) >= limit
}
