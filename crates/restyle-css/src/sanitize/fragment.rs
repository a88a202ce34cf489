//! Raw CSS fragments: gradients, `url()` references, shadow lists.

use regex::Regex;
use std::sync::LazyLock;

use super::color::is_valid_color;
use super::injection::find_injection;
use super::text;
use crate::syntax::{is_balanced, split_top_level, split_top_level_whitespace};

static GRADIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:repeating-)?(?:linear|radial|conic)-gradient\([a-z0-9#%.,\s()\-]+\)$")
        .unwrap()
});

static URL_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^url\(\s*(["']?)([^"'()\s]+)(["']?)\s*\)$"#).unwrap()
});

static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-?(?:\d+\.?\d*|\.\d+)(?:px|em|rem|%)?$").unwrap());

pub(super) fn fragment(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return "none".to_string();
    }
    if find_injection(value).is_some() || value.contains([';', '{', '}', '<', '>']) {
        return fallback.to_string();
    }

    if GRADIENT_RE.is_match(value) && is_balanced(value) {
        return value.to_string();
    }

    if let Some(caps) = URL_FN_RE.captures(value) {
        if caps[1] != caps[3] {
            return fallback.to_string();
        }
        let target = text::url(&caps[2], "");
        if target.is_empty() {
            return fallback.to_string();
        }
        return format!("url(\"{target}\")");
    }

    if is_shadow_list(value) {
        return value.to_string();
    }

    fallback.to_string()
}

/// One or more comma-separated shadows, each an optional `inset`,
/// two to four lengths and exactly one color.
fn is_shadow_list(value: &str) -> bool {
    split_top_level(value, ',').iter().all(|shadow| is_shadow(shadow))
}

fn is_shadow(shadow: &str) -> bool {
    let mut lengths = 0;
    let mut colors = 0;
    for (index, token) in split_top_level_whitespace(shadow).into_iter().enumerate() {
        if token.eq_ignore_ascii_case("inset") && index == 0 {
            continue;
        }
        if LENGTH_RE.is_match(token) {
            lengths += 1;
        } else if is_valid_color(token) {
            colors += 1;
        } else {
            return false;
        }
    }
    (2..=4).contains(&lengths) && colors == 1
}
