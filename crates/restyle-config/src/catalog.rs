//! The fixed option catalog.
//!
//! Every option the style regions read is declared here once, with its
//! default and (for numeric options) the range values are clamped to.

use restyle_common::{SettingValue, SettingsMap};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Settings group the engine reads from the resolver.
pub const SETTINGS_GROUP: &str = "restyle_settings";

/// Region an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionGroup {
    General,
    Global,
    Menu,
    Submenu,
    Toolbar,
    Accent,
    Custom,
}

/// Compile-time default value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionDefault {
    Str(&'static str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl OptionDefault {
    pub fn to_setting(self) -> SettingValue {
        match self {
            OptionDefault::Str(s) => SettingValue::Str(s.to_string()),
            OptionDefault::Int(n) => SettingValue::Int(n),
            OptionDefault::Float(f) => SettingValue::Float(f),
            OptionDefault::Bool(b) => SettingValue::Bool(b),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub key: &'static str,
    pub default: OptionDefault,
    pub group: OptionGroup,
    /// Inclusive clamp range for numeric values.
    pub range: Option<(f64, f64)>,
}

const fn opt(key: &'static str, default: OptionDefault, group: OptionGroup) -> OptionSpec {
    OptionSpec {
        key,
        default,
        group,
        range: None,
    }
}

const fn num(key: &'static str, default: i64, group: OptionGroup, min: f64, max: f64) -> OptionSpec {
    OptionSpec {
        key,
        default: OptionDefault::Int(default),
        group,
        range: Some((min, max)),
    }
}

use OptionDefault::{Bool, Float, Str};
use OptionGroup::*;

pub static OPTION_CATALOG: &[OptionSpec] = &[
    // General
    opt("restyle_enabled", Bool(true), General),
    // Global / body
    opt("body_bg_color", Str("#f0f0f1"), Global),
    opt("body_text_color", Str("#3c434a"), Global),
    opt(
        "body_font_family",
        Str("-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif"),
        Global,
    ),
    num("body_font_size", 13, Global, 8.0, 32.0),
    opt("body_line_height", Float(1.4), Global),
    opt("content_link_color", Str("#2271b1"), Global),
    opt("content_link_hover_color", Str("#135e96"), Global),
    opt("body_bg_image", Str(""), Global),
    num("global_border_radius", 0, Global, 0.0, 50.0),
    // Admin menu
    opt("admin_menu_bg_type", Str("solid"), Menu),
    opt("admin_menu_bg_color", Str("#23282d"), Menu),
    opt("admin_menu_gradient_start", Str("#23282d"), Menu),
    opt("admin_menu_gradient_end", Str("#2c3338"), Menu),
    num("admin_menu_gradient_angle", 180, Menu, 0.0, 360.0),
    opt("admin_menu_text_color", Str("#f0f0f1"), Menu),
    opt("admin_menu_icon_color", Str("#a7aaad"), Menu),
    opt("admin_menu_hover_bg_color", Str("#2c3338"), Menu),
    opt("admin_menu_hover_text_color", Str("#72aee6"), Menu),
    opt("admin_menu_active_bg_color", Str("#2271b1"), Menu),
    opt("admin_menu_active_text_color", Str("#ffffff"), Menu),
    num("admin_menu_width", 160, Menu, 100.0, 400.0),
    num("admin_menu_item_height", 34, Menu, 20.0, 80.0),
    num("admin_menu_font_size", 14, Menu, 8.0, 32.0),
    num("admin_menu_border_radius", 0, Menu, 0.0, 50.0),
    opt("admin_menu_shadow", Str("none"), Menu),
    opt("admin_menu_shadow_custom", Str(""), Menu),
    opt("admin_menu_floating", Bool(false), Menu),
    num("admin_menu_floating_margin", 10, Menu, 0.0, 100.0),
    // Submenu
    opt("admin_submenu_bg_color", Str("#2c3338"), Submenu),
    opt("admin_submenu_text_color", Str("#c3c4c7"), Submenu),
    opt("admin_submenu_hover_text_color", Str("#72aee6"), Submenu),
    num("admin_submenu_font_size", 13, Submenu, 8.0, 32.0),
    opt("admin_submenu_display", Str("block"), Submenu),
    opt("admin_submenu_transition", Bool(false), Submenu),
    num("admin_submenu_transition_ms", 200, Submenu, 0.0, 2000.0),
    // Toolbar
    opt("admin_bar_bg_color", Str("#1d2327"), Toolbar),
    opt("admin_bar_text_color", Str("#f0f0f1"), Toolbar),
    opt("admin_bar_hover_color", Str("#72aee6"), Toolbar),
    num("admin_bar_height", 32, Toolbar, 20.0, 100.0),
    num("admin_bar_width", 100, Toolbar, 50.0, 100.0),
    num("admin_bar_font_size", 13, Toolbar, 8.0, 32.0),
    num("admin_bar_border_radius", 0, Toolbar, 0.0, 50.0),
    opt("admin_bar_shadow", Str("none"), Toolbar),
    opt("admin_bar_shadow_custom", Str(""), Toolbar),
    opt("admin_bar_floating", Bool(false), Toolbar),
    num("admin_bar_floating_margin", 10, Toolbar, 0.0, 100.0),
    // Accent
    opt("accent_color", Str("#2271b1"), Accent),
    num("accent_hover_shift", -20, Accent, -100.0, 100.0),
    // Custom
    opt("custom_css", Str(""), Custom),
];

static SPEC_INDEX: LazyLock<HashMap<&'static str, &'static OptionSpec>> =
    LazyLock::new(|| OPTION_CATALOG.iter().map(|spec| (spec.key, spec)).collect());

static DEFAULTS: LazyLock<SettingsMap> = LazyLock::new(|| {
    OPTION_CATALOG
        .iter()
        .map(|spec| (spec.key.to_string(), spec.default.to_setting()))
        .collect()
});

/// Look up a catalog entry by key.
pub fn option_spec(key: &str) -> Option<&'static OptionSpec> {
    SPEC_INDEX.get(key).copied()
}

/// The fully-keyed defaults map, built once.
pub fn defaults_map() -> &'static SettingsMap {
    &DEFAULTS
}

/// Keys belonging to one region group, in catalog order.
pub fn keys_in_group(group: OptionGroup) -> impl Iterator<Item = &'static str> {
    OPTION_CATALOG
        .iter()
        .filter(move |spec| spec.group == group)
        .map(|spec| spec.key)
}
