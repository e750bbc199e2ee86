use once_cell::sync::Lazy;
use regex::Regex;

const PHONE_DIGITS: usize = 10;

// Unicode-aware: digits from any script are kept
static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\D").unwrap()
});

/// Reduce a phone cell to exactly ten digits.
///
/// Every non-digit is dropped. Longer numbers keep their last ten digits
/// (a leading country code or trunk prefix is discarded); shorter ones are
/// rejected.
pub fn clean_phone(raw: &str) -> Option<String> {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    let count = digits.chars().count();

    if count < PHONE_DIGITS {
        return None;
    }

    Some(digits.chars().skip(count - PHONE_DIGITS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits_pass_through() {
        assert_eq!(clean_phone("9876543210"), Some("9876543210".to_string()));
    }

    #[test]
    fn test_formatting_is_stripped() {
        assert_eq!(clean_phone("+1 (555) 123-4567"), Some("5551234567".to_string()));
        assert_eq!(clean_phone("98765 43210"), Some("9876543210".to_string()));
    }

    #[test]
    fn test_long_numbers_keep_last_ten() {
        assert_eq!(clean_phone("919876543210"), Some("9876543210".to_string()));
        assert_eq!(clean_phone("00919876543210"), Some("9876543210".to_string()));
        assert_eq!(clean_phone("123459876543210"), Some("9876543210".to_string()));
    }

    #[test]
    fn test_short_or_empty_is_absent() {
        assert_eq!(clean_phone("12345"), None);
        assert_eq!(clean_phone(""), None);
        assert_eq!(clean_phone("call me maybe"), None);
        assert_eq!(clean_phone("987-654-321"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_digits() {
        let devanagari = Some("९८७६५४३२१०".to_string());
        assert_eq!(clean_phone("९८७६५४३२१०"), devanagari);
        assert_eq!(clean_phone("+91 ९८७६५ ४३२१०"), devanagari);
        assert_eq!(clean_phone("९८७६५"), None);
    }
}
