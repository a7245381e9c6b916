//! Parsing and joining of dotted region codes.
//!
//! A code's segment count is its depth, and its depth determines its level:
//! `"11"` is a province, `"11.01"` a district, `"11.01.01"` a subdistrict and
//! `"11.01.01.2001"` a village. Parents are never stored; they are derived
//! by dropping the trailing segment.

use crate::features::regions::error::RegionError;
use crate::features::regions::models::RegionLevel;
use crate::shared::constants::REGION_CODE_SEPARATOR;
use crate::shared::validation::{is_region_code, is_region_name};

/// Split a code into its segments.
///
/// Fails on an empty code or on any empty segment (`"11..01"`, `"11."`).
pub fn split(code: &str) -> Result<Vec<&str>, RegionError> {
    if code.is_empty() {
        return Err(RegionError::InvalidCode(code.to_string()));
    }

    let segments: Vec<&str> = code.split(REGION_CODE_SEPARATOR).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RegionError::InvalidCode(code.to_string()));
    }

    Ok(segments)
}

/// Re-join segments with the separator. `join(&split(c)?) == c` for any valid `c`.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut code = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            code.push(REGION_CODE_SEPARATOR);
        }
        code.push_str(segment.as_ref());
    }
    code
}

/// Number of segments, or `None` for an empty/malformed code
pub fn depth(code: &str) -> Option<usize> {
    split(code).ok().map(|segments| segments.len())
}

/// Level implied by the code's depth
pub fn level_of(code: &str) -> Option<RegionLevel> {
    depth(code).and_then(RegionLevel::from_depth)
}

/// Code with the trailing segment dropped; `None` for provinces and malformed codes.
pub fn parent_of(code: &str) -> Option<String> {
    let segments = split(code).ok()?;
    let (_, ancestors) = segments.split_last()?;
    if ancestors.is_empty() {
        return None;
    }
    Some(join(ancestors))
}

pub fn is_valid_code(value: &str) -> bool {
    is_region_code(value)
}

pub fn is_valid_name(value: &str) -> bool {
    is_region_name(value)
}

/// Validate a raw code, handing it back on success
pub fn validate_code(raw: &str) -> Result<&str, RegionError> {
    if is_valid_code(raw) {
        Ok(raw)
    } else {
        Err(RegionError::InvalidCode(raw.to_string()))
    }
}

/// Validate a raw search term, handing it back on success
pub fn validate_name(raw: &str) -> Result<&str, RegionError> {
    if is_valid_name(raw) {
        Ok(raw)
    } else {
        Err(RegionError::InvalidName(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_join_round_trip() {
        for code in ["11", "11.01", "11.01.01", "11.01.01.2001"] {
            let segments = split(code).unwrap();
            assert_eq!(join(&segments), code);
        }
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split("31.73.06").unwrap(), vec!["31", "73", "06"]);
        assert_eq!(split("11").unwrap(), vec!["11"]);
    }

    #[test]
    fn test_split_rejects_empty_segments() {
        assert_eq!(split(""), Err(RegionError::InvalidCode(String::new())));
        assert!(split("11..01").is_err());
        assert!(split(".11").is_err());
        assert!(split("11.").is_err());
        assert!(split(".").is_err());
    }

    #[test]
    fn test_join_empty() {
        let none: [&str; 0] = [];
        assert_eq!(join(&none), "");
        assert_eq!(join(&["11".to_string(), "01".to_string()]), "11.01");
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("11"), None);
        assert_eq!(parent_of("11.01").as_deref(), Some("11"));
        assert_eq!(parent_of("11.01.01").as_deref(), Some("11.01"));
        assert_eq!(parent_of("11.01.01.2001").as_deref(), Some("11.01.01"));
        assert_eq!(parent_of(""), None);
        assert_eq!(parent_of("11..01"), None);
    }

    #[test]
    fn test_level_of() {
        assert_eq!(level_of("11"), Some(RegionLevel::Province));
        assert_eq!(level_of("11.01.01.2001"), Some(RegionLevel::Village));
        assert_eq!(level_of("11.01.01.2001.01"), None);
        assert_eq!(level_of(""), None);
    }

    #[test]
    fn test_validate_code() {
        assert_eq!(validate_code("11.01"), Ok("11.01"));
        assert_eq!(
            validate_code("11.1"),
            Err(RegionError::InvalidCode("11.1".to_string()))
        );
        assert!(validate_code("").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("aceh"), Ok("aceh"));
        assert_eq!(
            validate_name(" "),
            Err(RegionError::InvalidName(" ".to_string()))
        );
    }
}
