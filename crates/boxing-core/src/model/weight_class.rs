use serde::{Deserialize, Serialize};

use crate::errors::{BoxingError, Result};

/// Division a boxer competes in, derived from weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    /// Lower bound (inclusive) of the lightest class
    pub const MIN_WEIGHT: f64 = 125.0;

    /// Classify a weight in pounds
    ///
    /// # Errors
    /// Returns `InvalidField` for weights below 125 or non-finite values.
    pub fn from_weight(weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < Self::MIN_WEIGHT {
            return Err(BoxingError::InvalidField {
                field: "weight".to_string(),
                reason: format!("{} is below the minimum of {}", weight, Self::MIN_WEIGHT),
            });
        }

        let class = if weight >= 203.0 {
            WeightClass::Heavyweight
        } else if weight >= 166.0 {
            WeightClass::Middleweight
        } else if weight >= 133.0 {
            WeightClass::Lightweight
        } else {
            WeightClass::Featherweight
        };
        Ok(class)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
