pub fn clean_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn extract_canonical(raw: &str) -> Option<String> {
    let digits = clean_digits(raw);
    match digits.len() {
        10 => Some(digits),
        11 if digits.starts_with('0') => Some(digits[1..].to_string()),
        12 if digits.starts_with("91") => Some(digits[2..].to_string()),
        // 13 digits with a country code: keep the 10 subscriber digits,
        // tolerate one spurious trailing digit
        13 if digits.starts_with("91") => Some(digits[2..12].to_string()),
        _ => None,
    }
}
