use crate::domain::number::MobileNumber;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Airtel,
    Jio,
    Vi,
    Bsnl,
    Unknown,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Airtel => "airtel",
            Operator::Jio => "jio",
            Operator::Vi => "vi",
            Operator::Bsnl => "bsnl",
            Operator::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorPrefixes {
    pub operator: Operator,
    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPrefix {
    pub prefix: String,
    pub label: String,
}

/// Lookup tables for operator and region classification. The built-in tables
/// are small and non-exhaustive; classification is best-effort, never
/// authoritative. Declaration order decides ties between prefix lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixBook {
    pub operators: Vec<OperatorPrefixes>,
    pub regions: Vec<RegionPrefix>,
    pub region_fallback: String,
}

impl PrefixBook {
    pub fn builtin() -> Self {
        Self {
            operators: vec![
                entry(
                    Operator::Airtel,
                    &["7011", "8130", "9810", "9811", "9871", "9899", "78800", "96540"],
                ),
                entry(
                    Operator::Jio,
                    &["6200", "6201", "7070", "7977", "8092", "9031", "70003", "70004"],
                ),
                entry(
                    Operator::Vi,
                    &["7045", "8452", "9702", "9820", "9821", "91670", "99870"],
                ),
                entry(
                    Operator::Bsnl,
                    &["9400", "9401", "9402", "9434", "9447", "94180", "94250"],
                ),
            ],
            regions: vec![
                region("9810", "Delhi NCR"),
                region("9811", "Delhi NCR"),
                region("9820", "Mumbai"),
                region("9821", "Mumbai"),
                region("9830", "Kolkata"),
                region("9840", "Chennai"),
                region("9845", "Karnataka"),
                region("9434", "West Bengal"),
                region("9447", "Kerala"),
            ],
            region_fallback: "India".to_string(),
        }
    }

    pub fn operator_for(&self, number: &MobileNumber) -> Operator {
        let prefix4 = &number.as_str()[..4];
        let prefix5 = &number.as_str()[..5];
        for entry in &self.operators {
            if entry.prefixes.iter().any(|p| p == prefix4 || p == prefix5) {
                return entry.operator;
            }
        }
        Operator::Unknown
    }

    pub fn region_for(&self, number: &MobileNumber) -> &str {
        let prefix4 = &number.as_str()[..4];
        self.regions
            .iter()
            .find(|entry| entry.prefix == prefix4)
            .map(|entry| entry.label.as_str())
            .unwrap_or(&self.region_fallback)
    }
}

impl Default for PrefixBook {
    fn default() -> Self {
        Self::builtin()
    }
}

/// True when `raw` can serve as a classification prefix: 4 or 5 ASCII digits
/// starting with a valid mobile starting digit.
pub fn is_classifier_prefix(raw: &str) -> bool {
    (4..=5).contains(&raw.len())
        && raw.bytes().all(|b| b.is_ascii_digit())
        && matches!(raw.as_bytes()[0], b'6'..=b'9')
}

fn entry(operator: Operator, prefixes: &[&str]) -> OperatorPrefixes {
    OperatorPrefixes {
        operator,
        prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
    }
}

fn region(prefix: &str, label: &str) -> RegionPrefix {
    RegionPrefix {
        prefix: prefix.to_string(),
        label: label.to_string(),
    }
}
