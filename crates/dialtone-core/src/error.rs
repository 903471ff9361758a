use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number is required")]
    Missing,
    #[error("Please enter a valid 10-digit Indian mobile number")]
    UnrecognizedShape,
    #[error("Indian mobile numbers must start with 6, 7, 8, or 9")]
    InvalidStartingDigit,
    #[error("Please enter a valid mobile number")]
    ImplausiblePattern,
}
