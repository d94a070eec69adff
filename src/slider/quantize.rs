//! Pointer offset to value mapping.
//!
//! A pointer offset along the track is turned into a fraction of the track,
//! scaled into `[min, max]`, rounded *up* to the next multiple of `step` and
//! finally rounded to as many decimals as `step` itself is written with.

use crate::constants::QUANTIZE_EPSILON;
use crate::error::{SliderError, SliderResult};
use crate::slider::state::{clamp, SliderState};

/// Map `offset` (in track units) on a track `track_width` units wide to a
/// quantized value of `state`'s range.
///
/// # Errors
/// Returns [`SliderError::EmptyTrack`] when `track_width` is zero, negative
/// or NaN. Callers should measure the track before mapping.
pub fn map_offset(state: &SliderState, offset: f64, track_width: f64) -> SliderResult<f64> {
    if track_width.is_nan() || track_width <= 0.0 {
        return Err(SliderError::EmptyTrack { width: track_width });
    }

    let fraction = offset / track_width;
    let raw = state.min() + fraction * (state.max() - state.min());
    let quantized = quantize_up(raw, state.step());
    let rounded = round_to(quantized, step_decimals(state.step()));

    Ok(clamp(rounded, state.min(), state.max()))
}

/// Smallest multiple of `step` that is `>= value`.
///
/// Step counts within [`QUANTIZE_EPSILON`] of a whole number snap to it so
/// floating noise (`6.000000000000001`) does not bump the result a step.
pub fn quantize_up(value: f64, step: f64) -> f64 {
    let steps = value / step;
    let nearest = steps.round();
    let steps = if (steps - nearest).abs() < QUANTIZE_EPSILON {
        nearest
    } else {
        steps.ceil()
    };
    steps * step
}

/// Number of digits after the decimal point in `step`'s shortest decimal form.
pub fn step_decimals(step: f64) -> usize {
    let repr = step.to_string();
    match repr.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}

/// Round `value` to `decimals` fractional digits.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    // `f64` carries ~17 significant digits; rounding past that is a no-op.
    let decimals = decimals.min(15) as i32;
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid handing out -0.0.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
