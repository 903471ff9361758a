pub mod domain;
pub mod dto;
pub mod error;
pub mod prefixes;
pub mod rules;
pub mod testdata;

pub use domain::*;
pub use dto::Validation;
pub use error::ValidationError;
pub use prefixes::{Operator, OperatorPrefixes, PrefixBook, RegionPrefix};
pub use rules::*;
