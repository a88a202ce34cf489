//! Color value checks: hex, functional notations, CSS-wide keywords.

use regex::Regex;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static FUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(rgba?|hsla?)\(([^()]*)\)$").unwrap());

const COLOR_KEYWORDS: &[&str] = &[
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "revert",
];

/// Fallback used when a color has no better default.
pub const DEFAULT_COLOR: &str = "#2c3338";

/// Whether `value` is a color the engine will pass through unchanged.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();

    if COLOR_KEYWORDS.contains(&lower.as_str()) || HEX_RE.is_match(value) {
        return true;
    }

    let Some(caps) = FUNCTION_RE.captures(&lower) else {
        return false;
    };
    let args: Vec<&str> = caps[2].split(',').map(str::trim).collect();
    if args.len() != 3 && args.len() != 4 {
        return false;
    }
    let alpha_ok = args.get(3).is_none_or(|a| is_alpha(a));

    if caps[1].starts_with("rgb") {
        alpha_ok && args[..3].iter().all(|c| is_rgb_channel(c))
    } else {
        alpha_ok && is_hue(args[0]) && is_percentage(args[1]) && is_percentage(args[2])
    }
}

/// A plain decimal number, no exponent, no `inf`/`nan`.
fn parse_plain(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        || digits.chars().filter(|&c| c == '.').count() > 1
        || digits == "."
    {
        return None;
    }
    token.parse().ok()
}

fn in_range(token: &str, min: f64, max: f64) -> bool {
    parse_plain(token).is_some_and(|n| (min..=max).contains(&n))
}

fn is_percentage(token: &str) -> bool {
    token
        .strip_suffix('%')
        .is_some_and(|n| in_range(n, 0.0, 100.0))
}

fn is_rgb_channel(token: &str) -> bool {
    is_percentage(token) || in_range(token, 0.0, 255.0)
}

fn is_alpha(token: &str) -> bool {
    is_percentage(token) || in_range(token, 0.0, 1.0)
}

fn is_hue(token: &str) -> bool {
    in_range(token.strip_suffix("deg").unwrap_or(token), 0.0, 360.0)
}
