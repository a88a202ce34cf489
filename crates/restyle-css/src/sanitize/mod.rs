//! Value validation: turn an untrusted setting into a safe CSS value.
//!
//! [`validate`] is pure and total. It never fails: an input that does not
//! pass its kind's checks is replaced by the caller's fallback, and a
//! fallback that itself looks unsafe is replaced by the empty string.

mod color;
mod fragment;
mod injection;
mod keyword;
mod text;

pub use color::{is_valid_color, DEFAULT_COLOR};
pub use injection::{check_value, find_injection, find_structural_char};
pub use keyword::KeywordSet;

/// How a value is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind {
    /// Hex, `rgb()`/`rgba()`/`hsl()`/`hsla()` or a CSS-wide keyword.
    Color,
    /// A number clamped to `[min, max]`, suffixed with `unit` unless it
    /// carries a recognized unit of its own.
    Dimension {
        min: f64,
        max: f64,
        unit: &'static str,
    },
    Keyword(KeywordSet),
    FontFamily { max_chars: usize },
    /// Absolute `http`/`https` URL.
    Url,
    /// Gradient, `url()` reference or shadow list.
    RawFragment,
    GenericText,
}

pub fn validate(value: &str, kind: ValueKind, fallback: &str) -> String {
    let fallback = safe_fallback(fallback);
    let value = value.trim();

    match kind {
        ValueKind::Color => {
            if is_valid_color(value) {
                value.to_string()
            } else {
                fallback.to_string()
            }
        }
        ValueKind::Dimension { min, max, unit } => text::dimension(value, min, max, unit, fallback),
        ValueKind::Keyword(set) => set.accept(value).unwrap_or_else(|| fallback.to_string()),
        ValueKind::FontFamily { max_chars } => text::font_family(value, max_chars, fallback),
        ValueKind::Url => text::url(value, fallback),
        ValueKind::RawFragment => fragment::fragment(value, fallback),
        ValueKind::GenericText => text::generic(value, fallback),
    }
}

fn safe_fallback(fallback: &str) -> &str {
    if find_injection(fallback).is_some() || find_structural_char(fallback).is_some() {
        ""
    } else {
        fallback
    }
}
