pub mod digits;
pub mod number;

pub use digits::{clean_digits, extract_canonical};
pub use number::{MobileNumber, COUNTRY_CODE, SUBSCRIBER_DIGITS};
