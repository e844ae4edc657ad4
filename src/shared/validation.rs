use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Language code used by content records
    /// - Valid: "EN", "zh", "ru", "zh-TW"
    /// - Invalid: "eng", "e", "en_US", ""
    pub static ref LANG_REGEX: Regex = Regex::new(r"^[A-Za-z]{2}(?:-[A-Za-z]{2})?$").unwrap();

    /// Role code: starts with a letter, then letters, digits or underscores
    /// - Valid: "ADMIN", "ROLE_EDITOR", "ops2"
    /// - Invalid: "_ADMIN", "2FA", "ROLE-EDITOR", "role editor"
    pub static ref ROLE_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap();

    /// Username: starts with a letter or underscore, then alphanumerics, underscores or dots
    /// - Valid: "john_doe", "user123", "_admin", "j.doe"
    /// - Invalid: "123user", "-user", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.]*$").unwrap();

    /// Mobile country calling code, with or without the leading plus
    pub static ref COUNTRY_CODE_REGEX: Regex = Regex::new(r"^\+?[0-9]{1,4}$").unwrap();

    /// Blank marker inside a fill-in-the-blank question: three or more underscores
    pub static ref BLANK_MARKER_REGEX: Regex = Regex::new(r"_{3,}").unwrap();

    /// Mobile number digits, spaces and hyphens allowed between digits
    pub static ref MOBILE_REGEX: Regex = Regex::new(r"^[0-9](?:[0-9 -]{3,18}[0-9])$").unwrap();
}

/// Trim a required string field
pub fn trim(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// Trim an optional string field; blank values become `None`
pub fn trim_opt(value: Option<String>) -> Option<String> {
    value.map(trim).filter(|s| !s.is_empty())
}

/// Normalise a comma-joined tag string: trim each tag, drop blanks and
/// case-insensitive duplicates, keep first-seen order.
pub fn normalize_tags(value: Option<String>) -> Option<String> {
    let raw = value?;
    let mut seen: Vec<String> = Vec::new();
    let mut tags: Vec<&str> = Vec::new();

    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let key = tag.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            tags.push(tag);
        }
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

/// Split a comma-separated option list into trimmed, non-empty entries
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_regex() {
        assert!(LANG_REGEX.is_match("EN"));
        assert!(LANG_REGEX.is_match("ru"));
        assert!(LANG_REGEX.is_match("zh-TW"));
        assert!(!LANG_REGEX.is_match("eng"));
        assert!(!LANG_REGEX.is_match("en_US"));
        assert!(!LANG_REGEX.is_match(""));
    }

    #[test]
    fn test_role_code_regex() {
        assert!(ROLE_CODE_REGEX.is_match("ADMIN"));
        assert!(ROLE_CODE_REGEX.is_match("ROLE_EDITOR"));
        assert!(!ROLE_CODE_REGEX.is_match("_ADMIN"));
        assert!(!ROLE_CODE_REGEX.is_match("2FA"));
        assert!(!ROLE_CODE_REGEX.is_match("ROLE-EDITOR"));
    }

    #[test]
    fn test_username_and_mobile_regex() {
        assert!(USERNAME_REGEX.is_match("j.doe"));
        assert!(!USERNAME_REGEX.is_match("9lives"));
        assert!(MOBILE_REGEX.is_match("13800138000"));
        assert!(MOBILE_REGEX.is_match("555-0100"));
        assert!(!MOBILE_REGEX.is_match("12"));
        assert!(!MOBILE_REGEX.is_match("555-"));
        assert!(COUNTRY_CODE_REGEX.is_match("+86"));
        assert!(!COUNTRY_CODE_REGEX.is_match("+12345"));
    }

    #[test]
    fn test_trim_opt_drops_blank() {
        assert_eq!(trim_opt(Some("  ".to_string())), None);
        assert_eq!(trim_opt(Some(" a ".to_string())), Some("a".to_string()));
        assert_eq!(trim_opt(None), None);
    }

    #[test]
    fn test_normalize_tags() {
        assert_eq!(
            normalize_tags(Some(" news, Sports ,,news ,sports,tech ".to_string())),
            Some("news,Sports,tech".to_string())
        );
        assert_eq!(normalize_tags(Some(" , ".to_string())), None);
        assert_eq!(normalize_tags(None), None);
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(split_csv("easy, medium ,,hard"), vec!["easy", "medium", "hard"]);
        assert!(split_csv("").is_empty());
    }
}
