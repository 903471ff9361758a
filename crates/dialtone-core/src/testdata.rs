use rand::Rng;

const START_DIGITS: [char; 4] = ['6', '7', '8', '9'];

/// Structurally valid sample numbers for fixtures and demos. Results are not
/// run through the plausibility filter, so an occasional sample can still fail
/// full validation.
pub fn sample_numbers(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let start = START_DIGITS[rng.gen_range(0..START_DIGITS.len())];
            format!("{}{:09}", start, rng.gen_range(0..1_000_000_000u32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_numbers;
    use crate::domain::extract_canonical;

    #[test]
    fn sample_numbers_respects_count() {
        assert_eq!(sample_numbers(0).len(), 0);
        assert_eq!(sample_numbers(7).len(), 7);
    }

    #[test]
    fn sample_numbers_are_structurally_valid() {
        for number in sample_numbers(50) {
            assert_eq!(number.len(), 10, "{}", number);
            assert!(matches!(number.as_bytes()[0], b'6'..=b'9'), "{}", number);
            assert_eq!(extract_canonical(&number).as_deref(), Some(number.as_str()));
        }
    }
}
