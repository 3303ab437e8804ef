// File: crates/bars-core/src/scale.rs
// Summary: Linear value scale and ordinal band scale used by the layout engine.

use crate::error::{LayoutError, LayoutResult};

/// Linear mapping from a data domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Map a domain value to pixels. A zero-width domain maps everything to the range start.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span.abs() < 1e-12 {
            return self.r0;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }
}

/// Ordinal scale that splits a range into equal bands, one per key, in key order.
///
/// Padding follows the usual band-scale model: `padding_inner` is the fraction of
/// a step left empty between neighbouring bands, `padding_outer` the fraction of
/// a step reserved before the first and after the last band. Bands are centred
/// in the range and never rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self {
        let (r0, r1) = range;
        let n = count as f64;
        let span = r1 - r0;
        let step = span / (n - padding_inner + 2.0 * padding_outer).max(1.0);
        let start = r0 + (span - step * (n - padding_inner)) * 0.5;
        Self { count, start, step, bandwidth: step * (1.0 - padding_inner) }
    }

    #[inline]
    pub fn len(&self) -> usize { self.count }
    #[inline]
    pub fn is_empty(&self) -> bool { self.count == 0 }
    #[inline]
    pub fn step(&self) -> f64 { self.step }
    #[inline]
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    /// Start of band `i`, or `None` when `i` is out of range.
    #[inline]
    pub fn band_start(&self, i: usize) -> Option<f64> {
        (i < self.count).then(|| self.start + self.step * i as f64)
    }
}

/// Round `max_value` up to the next multiple of `step`, then add one more step of margin.
pub fn axis_max_value(max_value: f64, step: f64) -> f64 {
    (max_value / step).ceil() * step + step
}

/// Upper bound on value-axis ticks; larger axes are rejected instead of allocated.
pub const MAX_TICKS: usize = 100_000;

/// Number of ticks `0, step, 2*step, ...` below `axis_max` (upper bound excluded).
/// Fails when `axis_max` is not finite or the count exceeds [`MAX_TICKS`].
pub fn tick_count(axis_max: f64, step: f64) -> LayoutResult<usize> {
    let count = (axis_max / step).round();
    if !count.is_finite() || count > MAX_TICKS as f64 {
        return Err(LayoutError::TooManyTicks { axis_max, step, limit: MAX_TICKS });
    }
    Ok(count.max(0.0) as usize)
}

/// Tick values `0, step, 2*step, ...` below `axis_max` (upper bound excluded).
pub fn tick_values(axis_max: f64, step: f64) -> LayoutResult<Vec<f64>> {
    let count = tick_count(axis_max, step)?;
    Ok((0..count).map(|i| i as f64 * step).collect())
}
