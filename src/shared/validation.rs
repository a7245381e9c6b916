use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating region codes
    /// Dot-separated numeric segments, fixed width per level: 2, 2, 2, 4
    /// - Valid: "11", "11.01", "11.01.01", "11.01.01.2001"
    /// - Invalid: "1", "11.1", "11..01", "11.01.01.20", "11.01.01.2001.01", "aa"
    pub static ref REGION_CODE_REGEX: Regex =
        Regex::new(r"^\d{2}(?:\.\d{2}(?:\.\d{2}(?:\.\d{4})?)?)?$").unwrap();
}

/// Type guard for region codes coming from path params or dataset keys
pub fn is_region_code(value: &str) -> bool {
    REGION_CODE_REGEX.is_match(value)
}

/// Type guard for search terms: anything that is not blank
pub fn is_region_name(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_code_regex_valid() {
        assert!(REGION_CODE_REGEX.is_match("11"));
        assert!(REGION_CODE_REGEX.is_match("01"));
        assert!(REGION_CODE_REGEX.is_match("11.01"));
        assert!(REGION_CODE_REGEX.is_match("11.01.01"));
        assert!(REGION_CODE_REGEX.is_match("11.01.01.2001"));
        assert!(REGION_CODE_REGEX.is_match("31.73.06.1005"));
    }

    #[test]
    fn test_region_code_regex_invalid() {
        assert!(!REGION_CODE_REGEX.is_match("")); // empty
        assert!(!REGION_CODE_REGEX.is_match("1")); // too short
        assert!(!REGION_CODE_REGEX.is_match("111")); // too long
        assert!(!REGION_CODE_REGEX.is_match("11.1")); // short segment
        assert!(!REGION_CODE_REGEX.is_match("11..01")); // empty segment
        assert!(!REGION_CODE_REGEX.is_match(".11")); // leading dot
        assert!(!REGION_CODE_REGEX.is_match("11.")); // trailing dot
        assert!(!REGION_CODE_REGEX.is_match("11.01.01.20")); // short village segment
        assert!(!REGION_CODE_REGEX.is_match("11.01.01.2001.01")); // too deep
        assert!(!REGION_CODE_REGEX.is_match("aa")); // not digits
        assert!(!REGION_CODE_REGEX.is_match(" 11")); // whitespace
    }

    #[test]
    fn test_region_name_guard() {
        assert!(is_region_name("aceh"));
        assert!(is_region_name("a"));
        assert!(is_region_name(" bali "));
        assert!(!is_region_name(""));
        assert!(!is_region_name("   "));
    }
}
