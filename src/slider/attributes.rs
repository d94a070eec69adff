//! String attribute surface for a slider.
//!
//! Attributes arrive as text (config files, markup-like callers). Reading
//! them never fails: anything missing, unparsable or out of domain is
//! replaced with the attribute's default.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ATTR_MAX, ATTR_MIN, ATTR_STEP, ATTR_VALUE, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, DEFAULT_VALUE,
};
use crate::error::{SliderError, SliderResult};
use crate::slider::state::SliderState;

/// Which of the four observed attributes is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Value,
    Min,
    Max,
    Step,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Value => ATTR_VALUE,
            Attribute::Min => ATTR_MIN,
            Attribute::Max => ATTR_MAX,
            Attribute::Step => ATTR_STEP,
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Attribute::Value => DEFAULT_VALUE,
            Attribute::Min => DEFAULT_MIN,
            Attribute::Max => DEFAULT_MAX,
            Attribute::Step => DEFAULT_STEP,
        }
    }

    /// Coerce raw attribute text to a number, falling back to the default.
    pub fn coerce(self, raw: Option<&str>) -> f64 {
        let parsed = raw.and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        match (self, parsed) {
            (Attribute::Step, Some(step)) if step <= 0.0 => DEFAULT_STEP,
            (_, Some(v)) => v,
            (attr, None) => attr.default_value(),
        }
    }
}

impl std::str::FromStr for Attribute {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ATTR_VALUE => Ok(Attribute::Value),
            ATTR_MIN => Ok(Attribute::Min),
            ATTR_MAX => Ok(Attribute::Max),
            ATTR_STEP => Ok(Attribute::Step),
            other => Err(SliderError::UnknownAttribute(other.to_string())),
        }
    }
}

/// The four slider attributes as unparsed strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderAttributes {
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
}

impl SliderAttributes {
    pub fn get(&self, attr: Attribute) -> Option<&str> {
        match attr {
            Attribute::Value => self.value.as_deref(),
            Attribute::Min => self.min.as_deref(),
            Attribute::Max => self.max.as_deref(),
            Attribute::Step => self.step.as_deref(),
        }
    }

    /// Build the typed state. `value` is applied last so it is clamped
    /// against the configured range.
    pub fn to_state(&self) -> SliderState {
        SliderState::new(
            Attribute::Min.coerce(self.get(Attribute::Min)),
            Attribute::Max.coerce(self.get(Attribute::Max)),
            Attribute::Step.coerce(self.get(Attribute::Step)),
            Attribute::Value.coerce(self.get(Attribute::Value)),
        )
    }
}

/// Parse an attribute name, for callers holding plain strings.
pub fn parse_attribute(name: &str) -> SliderResult<Attribute> {
    name.parse()
}

/// Format a number the way it is stored back into an attribute.
pub fn format_number(value: f64) -> String {
    value.to_string()
}
