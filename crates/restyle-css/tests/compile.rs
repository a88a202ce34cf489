//! End-to-end compilation through the public API.

use std::sync::Arc;
use std::time::Duration;

use restyle_cache::{DurableTier, MemoryTier, SharedTier, TieredCache};
use restyle_common::{SettingValue, SettingsMap};
use restyle_config::schema::EngineConfig;
use restyle_config::{FileResolver, StaticResolver};
use restyle_css::{enhance, specificity_score, validate, StyleCompiler, ValueKind};

fn overlay(pairs: &[(&str, SettingValue)]) -> SettingsMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn memory_only() -> TieredCache {
    TieredCache::new(
        vec![Box::new(MemoryTier::new(1 << 20, 0.8))],
        Duration::from_secs(60),
        172,
    )
}

#[test]
fn compilation_is_idempotent() {
    let persisted = overlay(&[
        ("admin_menu_width", SettingValue::Int(240)),
        ("accent_color", "#8e44ad".into()),
        ("custom_css", ".wrap { padding: 4px; }".into()),
    ]);
    let compiler = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(StaticResolver::new(persisted)),
        TieredCache::disabled(),
    );
    let preview = overlay(&[("admin_bar_height", SettingValue::Int(40))]);

    assert_eq!(compiler.compile(None), compiler.compile(None));
    assert_eq!(
        compiler.compile(Some(&preview)),
        compiler.compile(Some(&preview))
    );
}

#[test]
fn committed_mode_emits_only_deltas() {
    let compiler = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(StaticResolver::new(overlay(&[(
            "admin_menu_text_color",
            "#fafafa".into(),
        )]))),
        memory_only(),
    );
    let (css, report) = compiler.compile_with_report(None);
    assert_eq!(report.rules_emitted, 1);
    assert_eq!(css.matches(" { ").count(), 1);
    assert!(css.contains("color: #fafafa !important;"));
}

#[test]
fn preview_scenario_from_defaults() {
    let compiler = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(StaticResolver::new(overlay(&[
            ("admin_menu_bg_type", "solid".into()),
            ("admin_menu_bg_color", "#23282d".into()),
        ]))),
        memory_only(),
    );
    assert_eq!(compiler.compile(None), "");

    let css = compiler.compile(Some(&overlay(&[(
        "admin_menu_bg_color",
        "#ff0000".into(),
    )])));
    let rule = css
        .lines()
        .find(|line| line.contains("background-color: #ff0000"))
        .expect("menu background rule");
    let selector = rule.split(" { ").next().unwrap_or_default();
    assert!(selector.contains("body.wp-admin #adminmenu"));
    assert!(specificity_score(selector.split(", ").next().unwrap_or_default()) >= 111);
}

#[test]
fn every_generated_document_is_brace_balanced() {
    let hostile = [
        "}",
        "{",
        "red; } body { color: blue",
        "\"; } </style><script>alert(1)</script>",
        "@media screen { a { color: red; }",
        "0 0 1px #000 }",
    ];
    let keys = [
        "admin_menu_bg_color",
        "body_font_family",
        "custom_css",
        "admin_bar_shadow_custom",
        "admin_submenu_display",
        "body_bg_image",
    ];
    let compiler = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(StaticResolver::default()),
        TieredCache::disabled(),
    );
    for value in hostile {
        for key in keys {
            let preview = overlay(&[
                (key, value.into()),
                ("admin_bar_shadow", "custom".into()),
            ]);
            let css = compiler.compile(Some(&preview));
            assert_eq!(
                css.matches('{').count(),
                css.matches('}').count(),
                "{key} = {value:?}"
            );
            assert!(!css.contains("<script"));
        }
    }
}

#[test]
fn validator_examples() {
    assert_eq!(validate("not-a-color", ValueKind::Color, "#2c3338"), "#2c3338");
    assert_eq!(
        validate("rgba(10,20,30,0.5)", ValueKind::Color, "#2c3338"),
        "rgba(10,20,30,0.5)"
    );
}

#[test]
fn enhancement_is_monotonic() {
    for selector in ["a", ".x .y", "#adminmenu li", "body", "html .x", "ul li:hover"] {
        for target in [21, 111] {
            let enhanced = enhance(selector, target);
            assert!(specificity_score(&enhanced) >= target);
            assert_eq!(enhance(&enhanced, target), enhanced);
        }
    }
}

#[test]
fn durable_tier_survives_a_new_compiler() {
    let dir = tempfile::tempdir().unwrap();
    let persisted = overlay(&[("admin_bar_bg_color", "#123123".into())]);
    let stack = || {
        TieredCache::new(
            vec![
                Box::new(MemoryTier::new(1 << 20, 0.8)),
                Box::new(DurableTier::open(dir.path()).unwrap()),
            ],
            Duration::from_secs(60),
            172,
        )
    };

    let first = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(StaticResolver::new(persisted.clone())),
        stack(),
    );
    let css = first.compile(None);
    assert!(!css.is_empty());

    let second = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(StaticResolver::new(persisted)),
        stack(),
    );
    let (again, report) = second.compile_with_report(None);
    assert!(report.cache_hit);
    assert_eq!(css, again);
    assert_eq!(second.get_cache_metrics().tier_hits["durable"], 1);
}

#[test]
fn invalidation_reaches_shared_tier_of_sibling_compilers() {
    let shared = SharedTier::default();
    let build = |shared: SharedTier| {
        StyleCompiler::new(
            EngineConfig::default(),
            Arc::new(StaticResolver::new(overlay(&[(
                "accent_color",
                "#0a7e07".into(),
            )]))),
            TieredCache::new(
                vec![Box::new(MemoryTier::new(1 << 20, 0.8)), Box::new(shared)],
                Duration::from_secs(60),
                172,
            ),
        )
    };
    let a = build(shared.clone());
    let b = build(shared);

    a.compile(None);
    assert!(b.compile_with_report(None).1.cache_hit);

    a.invalidate("css");
    let (_, report) = a.compile_with_report(None);
    assert!(!report.cache_hit);
}

#[test]
fn file_resolver_feeds_the_compiler() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r##"{"admin_bar_bg_color": "#0b0b0b", "admin_bar_height": 46}"##).unwrap();

    let compiler = StyleCompiler::new(
        EngineConfig::default(),
        Arc::new(FileResolver::new(&path)),
        TieredCache::disabled(),
    );
    let css = compiler.compile(None);
    assert!(css.contains("background-color: #0b0b0b"));
    assert!(css.contains("height: 46px !important;"));
    assert!(css.contains("html.wp-toolbar { padding-top: 46px; }"));
}
