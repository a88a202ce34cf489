use super::*;

#[test]
fn color_from_hex_6() {
    let c = Color::from_hex("#ff8800").unwrap();
    assert_eq!(c, Color::from_rgb(255, 136, 0));
}

#[test]
fn color_from_hex_3_expands() {
    let c = Color::from_hex("#f80").unwrap();
    assert_eq!(c, Color::from_rgb(255, 136, 0));
}

#[test]
fn color_from_hex_no_hash() {
    let c = Color::from_hex("00ff00").unwrap();
    assert_eq!(c, Color::from_rgb(0, 255, 0));
}

#[test]
fn color_from_hex_invalid() {
    assert!(Color::from_hex("zzzzzz").is_none());
    assert!(Color::from_hex("#abcd").is_none());
    assert!(Color::from_hex("").is_none());
}

#[test]
fn color_from_hsl() {
    assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::from_rgb(255, 0, 0));
    assert_eq!(Color::from_hsl(120.0, 1.0, 0.25), Color::from_rgb(0, 128, 0));
    assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::from_rgb(0, 0, 255));
    assert_eq!(Color::from_hsl(360.0, 1.0, 0.5), Color::from_rgb(255, 0, 0));
    assert_eq!(Color::from_hsl(200.0, 0.0, 1.0), Color::from_rgb(255, 255, 255));
    assert_eq!(Color::from_hsl(0.0, 0.0, 0.0), Color::from_rgb(0, 0, 0));
}

#[test]
fn color_to_hex() {
    assert_eq!(Color::from_rgb(255, 0, 128).to_hex(), "#ff0080");
}

#[test]
fn color_shift_clamps() {
    let c = Color::from_rgb(250, 10, 128);
    assert_eq!(c.shifted(20), Color::from_rgb(255, 30, 148));
    assert_eq!(c.shifted(-20), Color::from_rgb(230, 0, 108));
}

#[test]
fn color_brightness() {
    assert_eq!(Color::from_rgb(0, 0, 0).perceived_brightness(), 0.0);
    assert!(Color::from_rgb(255, 255, 255).perceived_brightness() > 254.9);
}

#[test]
fn setting_value_text_forms() {
    assert_eq!(SettingValue::Int(12).as_text(), "12");
    assert_eq!(SettingValue::Float(1.5).as_text(), "1.5");
    assert_eq!(SettingValue::Float(3.0).as_text(), "3");
    assert_eq!(SettingValue::Bool(true).as_text(), "1");
    assert_eq!(SettingValue::Null.as_text(), "");
    assert_eq!(SettingValue::from(" #fff ").as_text(), "#fff");
}

#[test]
fn setting_value_loose_equality() {
    assert!(SettingValue::Int(12).same_as(&SettingValue::from("12")));
    assert!(SettingValue::Float(0.5).same_as(&SettingValue::from("0.50")));
    assert!(SettingValue::from("#FFF").same_as(&SettingValue::from("#fff")));
    assert!(!SettingValue::from("#111").same_as(&SettingValue::from("#222")));
}

#[test]
fn setting_value_explicit_reset() {
    assert!(SettingValue::Int(0).is_explicit_reset());
    assert!(SettingValue::from("0").is_explicit_reset());
    assert!(SettingValue::from("").is_explicit_reset());
    assert!(!SettingValue::Null.is_explicit_reset());
    assert!(!SettingValue::from("#000").is_explicit_reset());
}

#[test]
fn setting_value_truthiness() {
    assert!(SettingValue::Bool(true).is_truthy());
    assert!(SettingValue::from("yes").is_truthy());
    assert!(!SettingValue::from("false").is_truthy());
    assert!(!SettingValue::Int(0).is_truthy());
    assert!(!SettingValue::Null.is_truthy());
}

#[test]
fn setting_value_deserializes_untagged() {
    let map: SettingsMap = serde_json::from_str(
        r##"{"a": null, "b": true, "c": 4, "d": 0.25, "e": "#fff"}"##,
    )
    .unwrap();
    assert_eq!(map["a"], SettingValue::Null);
    assert_eq!(map["b"], SettingValue::Bool(true));
    assert_eq!(map["c"], SettingValue::Int(4));
    assert_eq!(map["d"], SettingValue::Float(0.25));
    assert_eq!(map["e"], SettingValue::from("#fff"));
}

#[test]
fn merge_overlay_replaces_keys() {
    let mut base = SettingsMap::new();
    base.insert("a".into(), SettingValue::from("1"));
    base.insert("b".into(), SettingValue::from("2"));
    let mut overlay = SettingsMap::new();
    overlay.insert("b".into(), SettingValue::from("3"));
    overlay.insert("c".into(), SettingValue::Null);

    let merged = merge_settings(&base, &overlay);
    assert_eq!(merged["a"], SettingValue::from("1"));
    assert_eq!(merged["b"], SettingValue::from("3"));
    assert_eq!(merged["c"], SettingValue::Null);
}

#[test]
fn compile_mode_tags() {
    assert_eq!(CompileMode::Preview.tag(), "preview");
    assert_eq!(CompileMode::Committed.to_string(), "committed");
}

#[test]
fn format_number_trims() {
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(0.125), "0.125");
    assert_eq!(format_number(-2.5), "-2.5");
}

#[test]
fn format_number_is_exported_at_crate_root() {
    assert_eq!(crate::format_number(1.5), "1.5");
}
