use super::*;
use crate::document::DocumentStats;
use restyle_common::{CompileMode, SettingValue, SettingsMap};
use restyle_config::defaults_map;
use restyle_config::schema::EngineConfig;

struct Outcome {
    result: Result<(), RegionError>,
    css: String,
    stats: DocumentStats,
}

fn run(region: &str, mode: CompileMode, overrides: &[(&str, SettingValue)]) -> Outcome {
    let config = EngineConfig::default();
    let defaults = defaults_map();
    let mut settings: SettingsMap = defaults.clone();
    for (key, value) in overrides {
        settings.insert(key.to_string(), value.clone());
    }
    let emitter = Emitter::new(&settings, defaults, mode, &config);
    let mut doc = DocumentBuilder::new("Restyle", "0.1.0", mode);
    let region = REGIONS
        .iter()
        .find(|r| r.name == region)
        .expect("region exists");
    let result = {
        let mut ctx = RegionContext::new(emitter, &mut doc, region.name);
        (region.build)(&mut ctx)
    };
    let stats = doc.stats();
    let css = doc.finalize(usize::MAX);
    Outcome { result, css, stats }
}

#[test]
fn catalog_order_is_fixed() {
    let names: Vec<_> = REGIONS.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        ["global", "menu", "submenu", "toolbar", "accent", "custom"]
    );
}

#[test]
fn committed_defaults_emit_nothing_in_any_region() {
    for region in REGIONS {
        let out = run(region.name, CompileMode::Committed, &[]);
        assert_eq!(out.result, Ok(()));
        assert_eq!(out.stats, DocumentStats::default(), "{}", region.name);
    }
}

#[test]
fn preview_emits_defaults_for_plain_rules() {
    let out = run("toolbar", CompileMode::Preview, &[]);
    assert!(out
        .css
        .contains("body.wp-admin #wpadminbar { background-color: #1d2327 !important; }"));
    assert!(out.css.contains("html.wp-toolbar { padding-top: 32px; }"));
}

#[test]
fn menu_gradient_replaces_solid_background() {
    let out = run(
        "menu",
        CompileMode::Committed,
        &[("admin_menu_bg_type", "gradient".into())],
    );
    assert!(out
        .css
        .contains("background-image: linear-gradient(180deg, #23282d, #2c3338) !important;"));
    assert_eq!(out.css.matches("background-color: #23282d !important;").count(), 1);
}

#[test]
fn menu_width_also_moves_the_content_column() {
    let out = run(
        "menu",
        CompileMode::Committed,
        &[("admin_menu_width", SettingValue::Int(220))],
    );
    assert!(out.css.contains("{ width: 220px !important; }"));
    assert!(out.css.contains("#wpcontent, #wpfooter { margin-left: 220px; }"));
    assert!(out.css.contains("@media screen and (max-width: 782px)"));
    assert_eq!(out.stats.rules, 1);
    assert_eq!(out.stats.raw_blocks, 1);
}

#[test]
fn shadow_presets_and_custom_values() {
    let out = run(
        "menu",
        CompileMode::Committed,
        &[("admin_menu_shadow", "medium".into())],
    );
    assert!(out
        .css
        .contains("box-shadow: 0 4px 12px rgba(0, 0, 0, 0.18) !important;"));

    let out = run(
        "toolbar",
        CompileMode::Committed,
        &[
            ("admin_bar_shadow", "custom".into()),
            ("admin_bar_shadow_custom", "url(javascript:alert(1))".into()),
        ],
    );
    assert!(out.css.contains("box-shadow: none !important;"));
}

#[test]
fn floating_menu_needs_the_toggle() {
    let out = run(
        "menu",
        CompileMode::Committed,
        &[("admin_menu_floating_margin", SettingValue::Int(16))],
    );
    assert!(!out.css.contains("position: fixed"));

    let out = run(
        "menu",
        CompileMode::Committed,
        &[
            ("admin_menu_floating", true.into()),
            ("admin_menu_floating_margin", SettingValue::Int(16)),
        ],
    );
    assert!(out.css.contains("top: calc(32px + 16px); left: 16px;"));
}

#[test]
fn accent_derives_hover_and_text_colors() {
    let out = run(
        "accent",
        CompileMode::Committed,
        &[("accent_color", "#ff0000".into())],
    );
    assert_eq!(out.result, Ok(()));
    assert!(out.css.contains("background-color: #ff0000 !important;"));
    assert!(out.css.contains("color: #ffffff !important;"));
    assert!(out
        .css
        .contains(".button-primary:focus { background-color: #eb0000 !important; }"));
    assert!(out.css.contains(":active { background-color: #d70000 !important; }"));
}

#[test]
fn accent_derives_from_hsl() {
    let out = run(
        "accent",
        CompileMode::Committed,
        &[("accent_color", "hsl(0, 100%, 50%)".into())],
    );
    assert_eq!(out.result, Ok(()));
    assert!(out
        .css
        .contains("background-color: hsl(0, 100%, 50%) !important;"));
    assert!(out
        .css
        .contains(".button-primary:focus { background-color: #eb0000 !important; }"));
    assert!(out.css.contains(":active { background-color: #d70000 !important; }"));
    assert_eq!(out.stats.rules, 8);
}

#[test]
fn accent_keyword_keeps_base_rules_and_fails_derivation() {
    let out = run(
        "accent",
        CompileMode::Committed,
        &[("accent_color", "transparent".into())],
    );
    assert_eq!(
        out.result,
        Err(RegionError::Underivable {
            key: "accent_color",
            value: "transparent".into()
        })
    );
    assert!(out
        .css
        .contains("background-color: transparent !important;"));
    assert!(out.css.contains("border-color: transparent !important;"));
    assert!(!out.css.contains(":hover"));
    assert_eq!(out.stats.rules, 3);
}

#[test]
fn custom_css_passes_raw_checks_or_is_skipped() {
    let out = run(
        "custom",
        CompileMode::Committed,
        &[("custom_css", ".wrap h1 { letter-spacing: 1px; }".into())],
    );
    assert!(out.css.contains(".wrap h1 { letter-spacing: 1px; }"));

    let out = run(
        "custom",
        CompileMode::Committed,
        &[("custom_css", "@import url(https://evil.example/x.css);".into())],
    );
    assert_eq!(out.stats.raw_blocks, 0);
    assert_eq!(out.stats.skipped, 1);
    assert!(!out.css.contains("@import"));
}

#[test]
fn background_image_is_wrapped_or_cleared() {
    let out = run(
        "global",
        CompileMode::Committed,
        &[("body_bg_image", "https://example.com/bg.jpg".into())],
    );
    assert!(out
        .css
        .contains("background-image: url(\"https://example.com/bg.jpg\") !important;"));
    assert!(out.css.contains("background-size: cover !important;"));

    let out = run(
        "global",
        CompileMode::Committed,
        &[("body_bg_image", "javascript:alert(1)".into())],
    );
    assert!(out.css.contains("background-image: none !important;"));
}

#[test]
fn submenu_transition_is_gated_by_its_toggle() {
    let out = run(
        "submenu",
        CompileMode::Committed,
        &[
            ("admin_submenu_transition", true.into()),
            ("admin_submenu_transition_ms", SettingValue::Int(5000)),
        ],
    );
    assert!(out.css.contains("transition-duration: 2000ms !important;"));
    assert!(out.css.contains("transition-property: opacity, transform !important;"));
}
