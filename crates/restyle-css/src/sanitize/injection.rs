//! Injection pattern detection shared by every validator.

use regex::Regex;
use std::sync::LazyLock;

/// Inline event handler attribute, e.g. `onload=`.
static EVENT_HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon[a-z]+\s*=").unwrap());

const DANGEROUS: &[&str] = &[
    "expression(",
    "javascript:",
    "vbscript:",
    "data:",
    "eval(",
    "@import",
    "@charset",
    "behavior:",
    "-moz-binding",
    "<script",
    "</style",
    "\\",
];

/// Return the first dangerous pattern found in `value`, if any.
pub fn find_injection(value: &str) -> Option<&'static str> {
    let lower = value.to_ascii_lowercase();
    if let Some(pattern) = DANGEROUS.iter().copied().find(|p| lower.contains(p)) {
        return Some(pattern);
    }
    if EVENT_HANDLER_RE.is_match(&lower) {
        return Some("event handler");
    }
    None
}

/// Characters that would let a value escape its declaration.
pub fn find_structural_char(value: &str) -> Option<char> {
    value
        .chars()
        .find(|c| matches!(c, ';' | '{' | '}' | '<' | '>'))
}

/// `find_injection` plus the structural characters, for single values.
pub fn check_value(value: &str) -> Result<(), String> {
    if let Some(pattern) = find_injection(value) {
        return Err(format!("CSS injection blocked: contains '{pattern}'"));
    }
    if let Some(ch) = find_structural_char(value) {
        return Err(format!("CSS injection blocked: contains '{ch}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_script_and_protocols() {
        assert_eq!(find_injection("<SCRIPT>alert(1)"), Some("<script"));
        assert_eq!(find_injection("JavaScript:void(0)"), Some("javascript:"));
        assert_eq!(find_injection("url(data:text/html,x)"), Some("data:"));
        assert_eq!(find_injection("width: expression(1)"), Some("expression("));
    }

    #[test]
    fn detects_event_handlers_on_word_boundary() {
        assert_eq!(find_injection("x onload = y"), Some("event handler"));
        assert_eq!(find_injection("[data-contentid=3]"), None);
        assert_eq!(find_injection("[data-position=top]"), None);
    }

    #[test]
    fn structural_chars() {
        assert_eq!(find_structural_char("red; color: blue"), Some(';'));
        assert_eq!(find_structural_char("#fff"), None);
        assert!(check_value("#fff } body {").is_err());
        assert!(check_value("12px").is_ok());
    }
}
