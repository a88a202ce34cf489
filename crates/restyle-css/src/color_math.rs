//! Derived colors for accent rules.

use regex::Regex;
use restyle_common::Color;
use std::sync::LazyLock;

/// Perceived brightness above which dark text reads better.
const LIGHT_BACKGROUND_THRESHOLD: f64 = 186.0;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*([\d.]+%?)\s*,\s*([\d.]+%?)\s*,\s*([\d.]+%?)\s*(?:,\s*[\d.]+%?\s*)?\)$",
    )
    .unwrap()
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(-?[\d.]+)(?:deg)?\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%\s*(?:,\s*[\d.]+%?\s*)?\)$",
    )
    .unwrap()
});

/// Parse a hex, `rgb()`/`rgba()` (integer or percentage channels) or
/// `hsl()`/`hsla()` color. Alpha is ignored. Keywords have no channels
/// and yield `None`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        return Color::from_hex(value);
    }
    if let Some(caps) = RGB_RE.captures(value) {
        return Some(Color::from_rgb(
            rgb_channel(&caps[1])?,
            rgb_channel(&caps[2])?,
            rgb_channel(&caps[3])?,
        ));
    }
    let caps = HSL_RE.captures(value)?;
    let hue = caps[1].parse::<f64>().ok()?;
    let saturation = percentage(&caps[2])?;
    let lightness = percentage(&caps[3])?;
    Some(Color::from_hsl(hue, saturation, lightness))
}

/// `0..=255`, or `0%..=100%` scaled to that range.
fn rgb_channel(text: &str) -> Option<u8> {
    let channel = match text.strip_suffix('%') {
        Some(pct) => percentage(pct)? * 255.0,
        None => text.parse::<f64>().ok().filter(|v| *v <= 255.0)?,
    };
    Some(channel.round() as u8)
}

/// A `0..=100` percentage as a fraction.
fn percentage(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| (0.0..=100.0).contains(v))
        .map(|v| v / 100.0)
}

/// Black or white, whichever reads better on `background`.
pub fn readable_text_color(background: &str) -> Option<&'static str> {
    let color = parse_color(background)?;
    Some(if color.perceived_brightness() > LIGHT_BACKGROUND_THRESHOLD {
        "#000000"
    } else {
        "#ffffff"
    })
}

/// Shift every channel of `color` by `amount`, clamped to 0..=255.
pub fn adjust_brightness(color: &str, amount: i32) -> Option<String> {
    parse_color(color).map(|c| c.shifted(amount).to_hex())
}
