use crate::domain::number::MobileNumber;
use crate::dto::Validation;

pub const DEFAULT_VISIBLE_DIGITS: usize = 2;

pub fn validate(raw: &str) -> Validation {
    match MobileNumber::parse(raw) {
        Ok(number) => Validation {
            is_valid: true,
            error: None,
            canonical_number: Some(number.as_str().to_string()),
            international_format: Some(number.international()),
            display_format: Some(number.display()),
        },
        Err(err) => Validation {
            is_valid: false,
            error: Some(err.to_string()),
            canonical_number: None,
            international_format: None,
            display_format: None,
        },
    }
}

/// E.164 form for valid input, empty string otherwise. Callers that need the
/// failure reason should use `validate` or `MobileNumber::parse` instead.
pub fn format_international(raw: &str) -> String {
    match MobileNumber::parse(raw) {
        Ok(number) => number.international(),
        Err(_) => String::new(),
    }
}

/// Masks all but the last `visible_digits` digits. Invalid input is returned
/// unchanged, never reported as an error.
pub fn mask(raw: &str, visible_digits: usize) -> String {
    match MobileNumber::parse(raw) {
        Ok(number) => number.masked(visible_digits),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_international, mask, validate, DEFAULT_VISIBLE_DIGITS};

    #[test]
    fn validate_reports_all_formats() {
        let result = validate("+91 98765 43210");
        assert!(result.is_valid);
        assert_eq!(result.error, None);
        assert_eq!(result.canonical_number.as_deref(), Some("9876543210"));
        assert_eq!(result.international_format.as_deref(), Some("+919876543210"));
        assert_eq!(result.display_format.as_deref(), Some("+91 98765 43210"));
    }

    #[test]
    fn validate_blank_input() {
        let result = validate("");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Phone number is required"));
        assert_eq!(result.canonical_number, None);
        assert_eq!(result.international_format, None);
        assert_eq!(result.display_format, None);
    }

    #[test]
    fn validate_short_input() {
        let result = validate("12345");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Please enter a valid 10-digit Indian mobile number")
        );
    }

    #[test]
    fn validate_bad_starting_digit() {
        let result = validate("5123456789");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Indian mobile numbers must start with 6, 7, 8, or 9")
        );
    }

    #[test]
    fn validate_implausible_patterns() {
        for raw in ["9999999999", "1234567890", "9090909090"] {
            let result = validate(raw);
            assert!(!result.is_valid, "{} should be rejected", raw);
        }
        assert_eq!(
            validate("9999999999").error.as_deref(),
            Some("Please enter a valid mobile number")
        );
    }

    #[test]
    fn format_international_degrades_to_empty() {
        assert_eq!(format_international("9876543210"), "+919876543210");
        assert_eq!(format_international("not-a-number"), "");
        assert_eq!(format_international(""), "");
    }

    #[test]
    fn mask_defaults_to_two_visible_digits() {
        let masked = mask("9876543210", DEFAULT_VISIBLE_DIGITS);
        assert_eq!(masked, "+91 ***** ***10");
    }

    #[test]
    fn mask_passes_invalid_input_through() {
        assert_eq!(mask("not-a-number", 2), "not-a-number");
        assert_eq!(mask("", 2), "");
    }
}
