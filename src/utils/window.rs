//! Centred window statistics with symmetric boundary clipping.

use super::stats::mean;

/// Bounds `[start, end)` of a window of nominal `width` centred on `index`.
///
/// The half-width is `width / 2`, shrunk equally on both sides until the
/// window fits inside `[0, len)`. The window therefore always stays centred
/// on `index` and never reads out of range. Returns `None` if `index` is
/// itself out of range.
pub fn centered_bounds(len: usize, index: usize, width: usize) -> Option<(usize, usize)> {
    if index >= len {
        return None;
    }
    let half = (width / 2).min(index).min(len - 1 - index);
    Some((index - half, index + half + 1))
}

/// Mean of the centred, symmetrically clipped window around `index`.
///
/// Returns NaN if `index` is out of range.
pub fn centered_mean(series: &[f64], index: usize, width: usize) -> f64 {
    match centered_bounds(series.len(), index, width) {
        Some((start, end)) => mean(&series[start..end]),
        None => f64::NAN,
    }
}
