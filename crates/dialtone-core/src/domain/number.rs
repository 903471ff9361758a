use crate::domain::digits::extract_canonical;
use crate::error::ValidationError;
use crate::rules::patterns::is_implausible;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUBSCRIBER_DIGITS: usize = 10;
pub const COUNTRY_CODE: &str = "+91";

/// Canonical 10-digit Indian mobile subscriber number. Instances only exist
/// for inputs that passed shape, starting-digit, and plausibility checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Missing);
        }
        let digits = extract_canonical(raw).ok_or(ValidationError::UnrecognizedShape)?;
        if !matches!(digits.as_bytes()[0], b'6'..=b'9') {
            return Err(ValidationError::InvalidStartingDigit);
        }
        if is_implausible(&digits) {
            return Err(ValidationError::ImplausiblePattern);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn international(&self) -> String {
        format!("{}{}", COUNTRY_CODE, self.0)
    }

    pub fn display(&self) -> String {
        format!("{} {} {}", COUNTRY_CODE, &self.0[..5], &self.0[5..])
    }

    pub fn masked(&self, visible_digits: usize) -> String {
        let visible = visible_digits.min(SUBSCRIBER_DIGITS);
        let mut digits = "*".repeat(SUBSCRIBER_DIGITS - visible);
        digits.push_str(&self.0[SUBSCRIBER_DIGITS - visible..]);
        format!("{} {} {}", COUNTRY_CODE, &digits[..5], &digits[5..])
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
