//! Common types used across the catch log

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Weight units supported for entry and display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn code(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WeightUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(WeightUnit::Kg),
            "lb" => Ok(WeightUnit::Lb),
            _ => Err("Unknown weight unit"),
        }
    }
}

/// A weight as the angler entered it, before normalization
///
/// The two entry schemes observed in the field (decimal value with a unit
/// suffix vs. a full pounds + ounces breakdown) are unified behind this
/// single type; canonical storage is always kilograms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum WeightEntry {
    Decimal { value: f64, unit: WeightUnit },
    PoundsOunces { pounds: f64, ounces: f64 },
}

/// A canonical weight formatted for a requested display unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum DisplayWeight {
    /// Decimal kilograms, rounded to 2 decimal places
    Kilograms { kg: f64 },
    /// Imperial mixed radix; `ounces` is always in `0..16`
    PoundsOunces { pounds: u32, ounces: u32 },
}

impl fmt::Display for DisplayWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayWeight::Kilograms { kg } => write!(f, "{} kg", kg),
            DisplayWeight::PoundsOunces { pounds, ounces } => {
                write!(f, "{} lb {} oz", pounds, ounces)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_codes() {
        assert_eq!(WeightUnit::Kg.code(), "kg");
        assert_eq!(WeightUnit::Lb.to_string(), "lb");
        assert_eq!("lb".parse::<WeightUnit>(), Ok(WeightUnit::Lb));
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_weight_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WeightUnit::Kg).unwrap(), "\"kg\"");
        let unit: WeightUnit = serde_json::from_str("\"lb\"").unwrap();
        assert_eq!(unit, WeightUnit::Lb);
    }

    #[test]
    fn test_weight_entry_wire_shape() {
        let entry: WeightEntry =
            serde_json::from_str(r#"{"form":"pounds_ounces","pounds":9,"ounces":8}"#).unwrap();
        assert_eq!(
            entry,
            WeightEntry::PoundsOunces {
                pounds: 9.0,
                ounces: 8.0
            }
        );

        let entry: WeightEntry =
            serde_json::from_str(r#"{"form":"decimal","value":4.5,"unit":"kg"}"#).unwrap();
        assert_eq!(
            entry,
            WeightEntry::Decimal {
                value: 4.5,
                unit: WeightUnit::Kg
            }
        );
    }
}
