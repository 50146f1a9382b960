//! Weight unit conversion
//!
//! Every weight in the system is stored as canonical kilograms and converted
//! back out for display. All conversion paths share one factor so that
//! round trips never drift against each other.

use thiserror::Error;

use crate::types::{DisplayWeight, WeightEntry, WeightUnit};

/// Pounds per kilogram.
///
/// Deliberately the short form rather than the full-precision
/// 2.2046226218: every consumer (entry normalization, display formatting,
/// the frontend bindings) must use this exact constant or round-trip
/// checks will drift.
pub const LB_PER_KG: f64 = 2.20462;

/// Ounces per pound
pub const OUNCES_PER_POUND: f64 = 16.0;

/// Errors raised by unit conversion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("Invalid weight: {reason}")]
    InvalidWeight { reason: &'static str },
}

fn invalid(reason: &'static str) -> WeightError {
    WeightError::InvalidWeight { reason }
}

/// Convert a decimal weight in the given unit to canonical kilograms
///
/// Rejects negative and non-finite input; a poisoned value must never
/// reach storage.
pub fn to_canonical_kg(value: f64, unit: WeightUnit) -> Result<f64, WeightError> {
    if !value.is_finite() {
        return Err(invalid("weight must be a finite number"));
    }
    if value < 0.0 {
        return Err(invalid("weight cannot be negative"));
    }
    match unit {
        WeightUnit::Kg => Ok(value),
        WeightUnit::Lb => Ok(value / LB_PER_KG),
    }
}

/// Convert a pounds + ounces pair to canonical kilograms
///
/// `ounces` must already be normalized into `[0, 16)`; carrying surplus
/// ounces into pounds is the caller's job.
pub fn pounds_ounces_to_kg(pounds: f64, ounces: f64) -> Result<f64, WeightError> {
    if !pounds.is_finite() || !ounces.is_finite() {
        return Err(invalid("weight must be a finite number"));
    }
    if pounds < 0.0 || ounces < 0.0 {
        return Err(invalid("weight cannot be negative"));
    }
    if ounces >= OUNCES_PER_POUND {
        return Err(invalid("ounces must be less than 16"));
    }
    Ok((pounds + ounces / OUNCES_PER_POUND) / LB_PER_KG)
}

/// Normalize a raw weight entry to canonical kilograms
///
/// The single entry point used at record creation time, whichever entry
/// scheme the angler used.
pub fn normalize_incoming_weight(entry: WeightEntry) -> Result<f64, WeightError> {
    match entry {
        WeightEntry::Decimal { value, unit } => to_canonical_kg(value, unit),
        WeightEntry::PoundsOunces { pounds, ounces } => pounds_ounces_to_kg(pounds, ounces),
    }
}

/// Format a canonical kilogram value for the requested display unit
///
/// Expects a canonical value (finite, non-negative); unweighed records pass
/// 0. Kilogram display rounds to 2 decimal places. Imperial display rounds
/// ounces to the nearest whole ounce, carrying into an extra pound when the
/// rounding lands on 16 so that ounces stay in `0..16`.
pub fn format_for_display(kg: f64, target: WeightUnit) -> DisplayWeight {
    match target {
        WeightUnit::Kg => DisplayWeight::Kilograms {
            kg: (kg * 100.0).round() / 100.0,
        },
        WeightUnit::Lb => {
            let total_oz = kg * LB_PER_KG * OUNCES_PER_POUND;
            let mut pounds = (total_oz / OUNCES_PER_POUND).floor();
            let mut ounces = (total_oz - pounds * OUNCES_PER_POUND).round();
            if ounces >= OUNCES_PER_POUND {
                pounds += 1.0;
                ounces = 0.0;
            }
            DisplayWeight::PoundsOunces {
                pounds: pounds as u32,
                ounces: ounces as u32,
            }
        }
    }
}
