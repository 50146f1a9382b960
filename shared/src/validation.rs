//! Validation utilities for the Carplog catch log

/// Maximum accepted photo payload (base64 characters), roughly 5 MB decoded
pub const MAX_PHOTO_BASE64_LEN: usize = 7_000_000;

/// Validate a calendar month number
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err("Month must be between 1 and 12")
    }
}

/// Validate a statistics year is in a plausible range
pub fn validate_stat_year(year: i32) -> Result<(), &'static str> {
    if (1970..=2100).contains(&year) {
        Ok(())
    } else {
        Err("Year out of supported range")
    }
}

/// Validate a fish length measurement (cm or inches, depending on entry unit)
pub fn validate_length(length: f64) -> Result<(), &'static str> {
    if !length.is_finite() {
        return Err("Length must be a finite number");
    }
    if length < 0.0 {
        return Err("Length cannot be negative");
    }
    Ok(())
}

/// Validate an uploaded photo payload is within the accepted size
pub fn validate_photo_base64(data: &str) -> Result<(), &'static str> {
    if data.len() > MAX_PHOTO_BASE64_LEN {
        return Err("Photo exceeds maximum size");
    }
    Ok(())
}

/// Check whether a canonical weight counts as a UK specimen carp (20 lb+)
pub fn is_specimen_carp(weight_kg: f64) -> bool {
    weight_kg * crate::units::LB_PER_KG >= 20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month_valid() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(6).is_ok());
        assert!(validate_month(12).is_ok());
    }

    #[test]
    fn test_validate_month_invalid() {
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_validate_stat_year() {
        assert!(validate_stat_year(2024).is_ok());
        assert!(validate_stat_year(1970).is_ok());
        assert!(validate_stat_year(1969).is_err());
        assert!(validate_stat_year(2101).is_err());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length(0.0).is_ok());
        assert!(validate_length(78.5).is_ok());
        assert!(validate_length(-1.0).is_err());
        assert!(validate_length(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_photo_size() {
        assert!(validate_photo_base64("abcd").is_ok());
        let huge = "a".repeat(MAX_PHOTO_BASE64_LEN + 1);
        assert!(validate_photo_base64(&huge).is_err());
    }

    #[test]
    fn test_specimen_carp_threshold() {
        // 20 lb is roughly 9.07 kg
        assert!(is_specimen_carp(9.1));
        assert!(is_specimen_carp(15.0));
        assert!(!is_specimen_carp(9.0));
        assert!(!is_specimen_carp(0.0));
    }
}
