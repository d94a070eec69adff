use crate::constants::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, DEFAULT_VALUE};

/// Raw numeric state of a slider.
///
/// Only writes to `value` are clamped. Changing `min` or `max` leaves a
/// previously stored value alone until the next value write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
        }
    }
}

impl SliderState {
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        let mut state = Self::default();
        state.set_min(min);
        state.set_max(max);
        state.set_step(step);
        state.set_value(value);
        state
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Store `value` clamped to `[min, max]`.
    ///
    /// NaN is read as 0. With `min > max` the upper bound wins.
    pub fn set_value(&mut self, value: f64) {
        let value = if value.is_nan() { DEFAULT_VALUE } else { value };
        self.value = clamp(value, self.min, self.max);
    }

    pub fn set_min(&mut self, min: f64) {
        self.min = if min.is_finite() { min } else { DEFAULT_MIN };
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = if max.is_finite() { max } else { DEFAULT_MAX };
    }

    /// Non-positive or non-finite steps fall back to the default step.
    pub fn set_step(&mut self, step: f64) {
        self.step = if step.is_finite() && step > 0.0 { step } else { DEFAULT_STEP };
    }

    /// Fractional thumb offset in `[0, 1]`.
    pub fn position(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// `min(max, max(min, value))`, without the `min <= max` panic of `f64::clamp`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(value))
}
