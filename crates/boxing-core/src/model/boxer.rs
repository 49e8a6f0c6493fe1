use serde::{Deserialize, Serialize};

use super::weight_class::WeightClass;
use crate::errors::Result;

/// Boxer - a competitor's persisted profile
///
/// Names are unique across all boxers. The id is assigned by storage when
/// the row is inserted, so a `Boxer` value only exists for rows that have
/// been read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boxer {
    /// Storage-generated identifier
    pub id: i64,

    /// Unique display name
    pub name: String,

    /// Weight in pounds
    pub weight: f64,

    /// Height in inches
    pub height: f64,

    /// Reach in inches
    pub reach: f64,

    /// Age in years
    pub age: i64,
}

impl Boxer {
    /// Create a Boxer from already-stored values
    pub fn new(
        id: i64,
        name: impl Into<String>,
        weight: f64,
        height: f64,
        reach: f64,
        age: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            height,
            reach,
            age,
        }
    }

    /// The weight class this boxer competes in
    ///
    /// # Errors
    /// Returns `InvalidField` if the weight is below every class.
    pub fn weight_class(&self) -> Result<WeightClass> {
        WeightClass::from_weight(self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_boxer_keeps_fields() {
        let boxer = Boxer::new(1, "Ali", 180.0, 70.0, 72.5, 28);

        assert_eq!(boxer.id, 1);
        assert_eq!(boxer.name, "Ali");
        assert_eq!(boxer.weight, 180.0);
        assert_eq!(boxer.height, 70.0);
        assert_eq!(boxer.reach, 72.5);
        assert_eq!(boxer.age, 28);
    }

    #[test]
    fn test_boxer_serde_shape() {
        let boxer = Boxer::new(7, "Frazier", 205.0, 71.5, 73.5, 27);
        let json = serde_json::to_value(&boxer).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Frazier");
        assert_eq!(json["reach"], 73.5);

        let back: Boxer = serde_json::from_value(json).unwrap();
        assert_eq!(back, boxer);
    }

    #[test]
    fn test_boxer_weight_class() {
        let boxer = Boxer::new(1, "Ali", 180.0, 70.0, 72.5, 28);
        assert_eq!(boxer.weight_class().unwrap(), WeightClass::Middleweight);
    }
}
