//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Mobile number regex: 11 digits, leading 1, second digit 3-9
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^1[3-9]\d{9}$").unwrap()
});

/// Check if a phone number matches the required mobile format
///
/// The raw string is matched as-is; callers are expected to have stripped
/// any formatting before the number reaches the login flow.
pub fn is_valid_mobile(phone: &str) -> bool {
    MOBILE_REGEX.is_match(phone)
}

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for display (e.g., 138****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_mobile() {
        assert!(is_valid_mobile("13800000000"));
        assert!(is_valid_mobile("15912345678"));
        assert!(is_valid_mobile("19912345678"));
        assert!(!is_valid_mobile("12812345678")); // Invalid second digit
        assert!(!is_valid_mobile("1381234567")); // Too short
        assert!(!is_valid_mobile("138123456789")); // Too long
        assert!(!is_valid_mobile("23812345678")); // Wrong leading digit
        assert!(!is_valid_mobile("138 1234 5678")); // Formatting is not stripped
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("138-1234-5678"), "13812345678");
        assert_eq!(normalize_phone_number("(138) 1234-5678"), "13812345678");
        assert_eq!(normalize_phone_number("+86 138 1234 5678"), "+8613812345678");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("13812345678"), "138****5678");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
