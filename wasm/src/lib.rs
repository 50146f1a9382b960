//! WebAssembly module for the Carplog catch log
//!
//! Provides client-side computation for:
//! - Normalizing entered weights to canonical kilograms
//! - Formatting canonical weights for the selected display unit
//! - Offline input validation

use std::str::FromStr;

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::units::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("carplog wasm initialized"));
}

fn parse_unit(code: &str) -> Result<WeightUnit, JsValue> {
    WeightUnit::from_str(code).map_err(JsValue::from_str)
}

/// Convert a decimal weight in the given unit ("kg" or "lb") to kilograms
#[wasm_bindgen]
pub fn convert_to_kilograms(value: f64, unit: &str) -> Result<f64, JsValue> {
    let unit = parse_unit(unit)?;
    to_canonical_kg(value, unit).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a pounds + ounces pair to kilograms; ounces must be below 16
#[wasm_bindgen]
pub fn pounds_ounces_to_kilograms(pounds: f64, ounces: f64) -> Result<f64, JsValue> {
    pounds_ounces_to_kg(pounds, ounces).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a canonical kilogram weight for display, e.g. "4.98 kg" or
/// "11 lb 0 oz"
#[wasm_bindgen]
pub fn format_weight(kg: f64, unit: &str) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    Ok(format_for_display(kg, unit).to_string())
}

/// Format a canonical kilogram weight and return the structured breakdown
/// as JSON (for custom rendering of the lb/oz parts)
#[wasm_bindgen]
pub fn format_weight_parts(kg: f64, unit: &str) -> Result<String, JsValue> {
    let unit = parse_unit(unit)?;
    serde_json::to_string(&format_for_display(kg, unit))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Check whether a canonical weight counts as a specimen carp (20 lb+)
#[wasm_bindgen]
pub fn is_specimen(weight_kg: f64) -> bool {
    is_specimen_carp(weight_kg)
}

/// Check an uploaded photo payload against the accepted size limit
#[wasm_bindgen]
pub fn photo_within_limit(data: &str) -> bool {
    validate_photo_base64(data).is_ok()
}

/// Validate a fish length measurement (cm or inches, per the entry unit)
#[wasm_bindgen]
pub fn is_valid_length(length: f64) -> bool {
    validate_length(length).is_ok()
}

/// Validate a month selector value (1-12)
#[wasm_bindgen]
pub fn is_valid_month(month: u32) -> bool {
    validate_month(month).is_ok()
}

/// Validate a year selector value for the statistics views
#[wasm_bindgen]
pub fn is_valid_stat_year(year: i32) -> bool {
    validate_stat_year(year).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_kilograms() {
        let kg = convert_to_kilograms(2.20462, "lb").unwrap();
        assert!((kg - 1.0).abs() < 1e-9);
        assert_eq!(convert_to_kilograms(3.5, "kg").unwrap(), 3.5);
    }

    #[test]
    fn test_pounds_ounces_to_kilograms() {
        let kg = pounds_ounces_to_kilograms(1.0, 8.0).unwrap();
        assert!((kg - 1.5 / LB_PER_KG).abs() < 1e-9);
    }

    #[test]
    fn test_format_weight_carries_ounces() {
        assert_eq!(format_weight(4.98, "lb").unwrap(), "11 lb 0 oz");
        assert_eq!(format_weight(0.0, "lb").unwrap(), "0 lb 0 oz");
        assert_eq!(format_weight(4.986, "kg").unwrap(), "4.99 kg");
    }

    #[test]
    fn test_format_weight_parts_json() {
        let json = format_weight_parts(4.98, "lb").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unit"], "pounds_ounces");
        assert_eq!(value["pounds"], 11);
        assert_eq!(value["ounces"], 0);
    }

    #[test]
    fn test_is_specimen() {
        assert!(is_specimen(9.1));
        assert!(!is_specimen(5.0));
    }

    #[test]
    fn test_selector_validation() {
        assert!(is_valid_month(12));
        assert!(!is_valid_month(13));
        assert!(is_valid_stat_year(2024));
        assert!(!is_valid_stat_year(1800));
    }

    #[test]
    fn test_length_validation() {
        assert!(is_valid_length(0.0));
        assert!(is_valid_length(78.5));
        assert!(!is_valid_length(-1.0));
        assert!(!is_valid_length(f64::NAN));
    }
}
