//! Free-form value checks: dimensions, font stacks, URLs, generic text.

use restyle_common::format_number;
use url::Url;

use super::injection::{check_value, find_injection};

/// Units a dimension may carry through unchanged.
const UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "ch", "pt", "ms", "s", "deg",
];

/// Split a leading decimal number off `value`.
fn leading_number(value: &str) -> (&str, &str) {
    let bytes = value.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    value.split_at(end)
}

pub(super) fn dimension(value: &str, min: f64, max: f64, unit: &str, fallback: &str) -> String {
    let (number, rest) = leading_number(value.trim());
    match number.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            let rest = rest.trim().to_ascii_lowercase();
            let unit = if UNITS.contains(&rest.as_str()) {
                rest.as_str()
            } else {
                unit
            };
            format!("{}{unit}", format_number(n.clamp(min, max)))
        }
        _ => format!("{fallback}{unit}"),
    }
}

/// Drop every quote character of a kind that appears an odd number of times.
fn balance_quotes(value: String) -> String {
    let mut value = value;
    for quote in ['"', '\''] {
        if value.matches(quote).count() % 2 == 1 {
            value.retain(|c| c != quote);
        }
    }
    value
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(super) fn font_family(value: &str, max_chars: usize, fallback: &str) -> String {
    let filtered: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || "-'\",.".contains(*c))
        .collect();
    let capped: String = collapse_whitespace(&filtered).chars().take(max_chars).collect();
    let cleaned = balance_quotes(capped);
    let cleaned = cleaned.trim_matches(|c: char| c == ',' || c.is_whitespace());
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned.to_string()
    }
}

pub(super) fn url(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if find_injection(value).is_some() {
        return fallback.to_string();
    }
    let Ok(parsed) = Url::parse(value) else {
        return fallback.to_string();
    };
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return fallback.to_string();
    }
    let serialized = parsed.as_str();
    if serialized.contains(['"', '\'', '(', ')', '<', '>', '\\']) {
        return fallback.to_string();
    }
    serialized.to_string()
}

pub(super) fn generic(value: &str, fallback: &str) -> String {
    if find_injection(value).is_some() {
        return fallback.to_string();
    }
    let filtered: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || "#%.,-_()'\"/+".contains(*c))
        .collect();
    let cleaned = balance_quotes(collapse_whitespace(&filtered));
    let opens = cleaned.matches('(').count();
    let closes = cleaned.matches(')').count();
    if cleaned.is_empty() || opens != closes || check_value(&cleaned).is_err() {
        return fallback.to_string();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_clamps_and_keeps_known_units() {
        assert_eq!(dimension("9999", 0.0, 400.0, "px", "0"), "400px");
        assert_eq!(dimension("-5", 0.0, 400.0, "px", "0"), "0px");
        assert_eq!(dimension("1.5em", 0.0, 10.0, "px", "0"), "1.5em");
        assert_eq!(dimension("12furlongs", 0.0, 100.0, "px", "0"), "12px");
        assert_eq!(dimension("wide", 0.0, 100.0, "px", "160"), "160px");
        assert_eq!(dimension("1.40", 0.0, 5.0, "", "1"), "1.4");
    }

    #[test]
    fn font_family_strips_and_balances() {
        assert_eq!(
            font_family("\"Segoe UI\", Roboto; } body {", 200, ""),
            "\"Segoe UI\", Roboto body"
        );
        assert_eq!(font_family("\"Broken, serif", 200, ""), "Broken, serif");
        assert_eq!(font_family("<>{};", 200, "sans-serif"), "sans-serif");
        assert_eq!(font_family("abcdefgh", 3, "").len(), 3);
    }

    #[test]
    fn url_accepts_http_only() {
        assert_eq!(
            url("https://example.com/bg.png", ""),
            "https://example.com/bg.png"
        );
        assert_eq!(url("javascript:alert(1)", "x"), "x");
        assert_eq!(url("data:image/png;base64,AAAA", "x"), "x");
        assert_eq!(url("ftp://example.com/a", "x"), "x");
        assert_eq!(url("/relative/path.png", "x"), "x");
        assert_eq!(url("https://example.com/a.png?onload=1", "x"), "x");
    }

    #[test]
    fn generic_text_escapes() {
        assert_eq!(generic("opacity, transform", ""), "opacity, transform");
        assert_eq!(generic("calc(100% - 10px)", ""), "calc(100% - 10px)");
        assert_eq!(generic("red; } body { x", ""), "red body x");
        assert_eq!(generic("expression(alert(1))", "none"), "none");
        assert_eq!(generic("/* comment */", ""), "/ comment /");
        assert_eq!(generic("f(", "none"), "none");
    }
}
