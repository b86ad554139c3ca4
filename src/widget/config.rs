use std::{path::Path, str::FromStr};

use anyhow::Context;

use crate::foundation::error::{KnobError, KnobResult};

/// Environment variable that overrides [`KnobConfig::out_of_range`].
pub const OUT_OF_RANGE_ENV: &str = "SVGKNOB_OUT_OF_RANGE";

/// What a knob does with a value outside `[min_value, max_value]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRange {
    /// Clamp into the range before storing.
    #[default]
    Clamp,
    /// Refuse the assignment with a validation error.
    Reject,
    /// Store as is; the angle mapping then extrapolates past the angle range.
    Extrapolate,
}

impl FromStr for OutOfRange {
    type Err = KnobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            "extrapolate" => Ok(Self::Extrapolate),
            other => Err(KnobError::validation(format!(
                "unknown out-of-range policy '{other}' (expected clamp, reject or extrapolate)"
            ))),
        }
    }
}

/// Value range, angle sweep and value policy of a rotary knob.
///
/// Angles are in radians, measured clockwise on screen. `min_value > max_value` is allowed and
/// gives a reversed knob; `min_value == max_value` is not.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnobConfig {
    pub min_value: f64,
    pub max_value: f64,
    /// Value used initially and by reset. Defaults to `min_value`.
    #[serde(default)]
    pub default_value: Option<f64>,
    pub min_angle: f64,
    pub max_angle: f64,
    #[serde(default)]
    pub out_of_range: OutOfRange,
    /// Round assigned values to the nearest integer.
    #[serde(default)]
    pub snap: bool,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self::rack_default()
    }
}

impl KnobConfig {
    pub fn new(min_value: f64, max_value: f64, min_angle: f64, max_angle: f64) -> Self {
        Self {
            min_value,
            max_value,
            default_value: None,
            min_angle,
            max_angle,
            out_of_range: OutOfRange::default(),
            snap: false,
        }
    }

    /// Unit range over the usual ±0.83π sweep of a panel knob.
    pub fn rack_default() -> Self {
        let sweep = 0.83 * std::f64::consts::PI;
        Self::new(0.0, 1.0, -sweep, sweep)
    }

    pub fn with_default_value(mut self, v: f64) -> Self {
        self.default_value = Some(v);
        self
    }

    pub fn with_out_of_range(mut self, policy: OutOfRange) -> Self {
        self.out_of_range = policy;
        self
    }

    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    pub fn resolved_default(&self) -> f64 {
        self.default_value.unwrap_or(self.min_value)
    }

    /// Lower and upper bound of the value range, ordered.
    pub fn ordered_range(&self) -> (f64, f64) {
        (
            self.min_value.min(self.max_value),
            self.min_value.max(self.max_value),
        )
    }

    pub fn validate(&self) -> KnobResult<()> {
        let fields = [
            ("min_value", self.min_value),
            ("max_value", self.max_value),
            ("min_angle", self.min_angle),
            ("max_angle", self.max_angle),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(KnobError::validation(format!("{name} must be finite")));
            }
        }
        if self.min_value == self.max_value {
            return Err(KnobError::validation(
                "min_value and max_value must differ",
            ));
        }
        if let Some(d) = self.default_value {
            let (lo, hi) = self.ordered_range();
            if !d.is_finite() || d < lo || d > hi {
                return Err(KnobError::validation(format!(
                    "default_value {d} outside [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> KnobResult<Self> {
        let cfg: KnobConfig =
            serde_json::from_str(s).map_err(|e| KnobError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> KnobResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read knob config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> KnobResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| KnobError::serde(e.to_string()))
    }

    /// Apply `SVGKNOB_OUT_OF_RANGE` if it is set to a known policy. Unknown values are logged
    /// and ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(std::env::var(OUT_OF_RANGE_ENV).ok().as_deref())
    }

    pub(crate) fn with_overrides_from(mut self, out_of_range: Option<&str>) -> Self {
        if let Some(raw) = out_of_range {
            match raw.parse::<OutOfRange>() {
                Ok(policy) => self.out_of_range = policy,
                Err(err) => tracing::warn!(%err, "ignoring {OUT_OF_RANGE_ENV}"),
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/config.rs"]
mod tests;
