use crate::{
    foundation::{
        error::{KnobError, KnobResult},
        math::{clamp, rescale},
    },
    widget::config::{KnobConfig, OutOfRange},
};

/// A bounded scalar owned by a control.
///
/// All mutation goes through [`Param::set_value`], which applies snapping and the configured
/// [`OutOfRange`] policy before storing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Param {
    min_value: f64,
    max_value: f64,
    default_value: f64,
    value: f64,
    out_of_range: OutOfRange,
    snap: bool,
}

impl Param {
    /// Build from a config. The config is validated first.
    pub fn new(cfg: &KnobConfig) -> KnobResult<Self> {
        cfg.validate()?;
        let default_value = cfg.resolved_default();
        Ok(Self {
            min_value: cfg.min_value,
            max_value: cfg.max_value,
            default_value,
            value: default_value,
            out_of_range: cfg.out_of_range,
            snap: cfg.snap,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    pub fn out_of_range(&self) -> OutOfRange {
        self.out_of_range
    }

    /// Position of the value within the range, 0 at `min_value` and 1 at `max_value`.
    pub fn normalized(&self) -> f64 {
        rescale(self.value, self.min_value, self.max_value, 0.0, 1.0)
    }

    /// Assign a new value. Returns whether the stored value changed.
    pub fn set_value(&mut self, v: f64) -> KnobResult<bool> {
        if !v.is_finite() {
            return Err(KnobError::validation("parameter value must be finite"));
        }
        let v = if self.snap { v.round() } else { v };

        let lo = self.min_value.min(self.max_value);
        let hi = self.min_value.max(self.max_value);
        let v = match self.out_of_range {
            OutOfRange::Clamp => clamp(v, lo, hi),
            OutOfRange::Reject if v < lo || v > hi => {
                return Err(KnobError::validation(format!(
                    "parameter value {v} outside [{lo}, {hi}]"
                )));
            }
            OutOfRange::Reject | OutOfRange::Extrapolate => v,
        };

        let changed = v != self.value;
        self.value = v;
        Ok(changed)
    }

    /// Return to the default value.
    pub fn reset(&mut self) -> bool {
        let changed = self.value != self.default_value;
        self.value = self.default_value;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/param.rs"]
mod tests;
