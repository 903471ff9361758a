use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    pub error: Option<String>,
    pub canonical_number: Option<String>,
    pub international_format: Option<String>,
    pub display_format: Option<String>,
}
