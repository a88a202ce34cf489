use super::*;

fn targets() -> SpecificityConfig {
    SpecificityConfig::default()
}

#[test]
fn standard_weights() {
    assert_eq!(specificity_score("a"), 1);
    assert_eq!(specificity_score(".button"), 10);
    assert_eq!(specificity_score("#adminmenu"), 100);
    assert_eq!(specificity_score("#adminmenu li.menu-top > a"), 112);
    assert_eq!(specificity_score("input[type=\"checkbox\"]:checked"), 21);
    assert_eq!(specificity_score("a::before"), 2);
    assert_eq!(specificity_score("a:before"), 2);
    assert_eq!(specificity_score("*"), 0);
}

#[test]
fn comma_lists_are_summed() {
    assert_eq!(specificity_score("a, .b, #c"), 111);
}

#[test]
fn functional_pseudo_classes() {
    assert_eq!(specificity_score(":not(#x)"), 100);
    assert_eq!(specificity_score("a:is(.b, #c)"), 101);
    assert_eq!(specificity_score(":where(#x .y)"), 0);
    assert_eq!(specificity_score("li:nth-child(2n+1)"), 11);
}

#[test]
fn prefix_scores_match_their_text() {
    for (prefix, score) in PREFIXES {
        assert_eq!(specificity_score(prefix), *score, "{prefix}");
    }
    for (qualifier, score) in BODY_QUALIFIERS {
        assert_eq!(specificity_score(&format!("body{qualifier}")), score + 1);
    }
    for (qualifier, score) in ROOT_QUALIFIERS {
        assert_eq!(specificity_score(&format!("html{qualifier}")), score + 1);
    }
}

#[test]
fn enhance_is_noop_when_target_met() {
    assert_eq!(enhance("#wpbody-content a", 21), "#wpbody-content a");
}

#[test]
fn enhance_picks_cheapest_sufficient_prefix() {
    assert_eq!(enhance(".postbox", 21), "body.wp-admin .postbox");
    assert_eq!(enhance(".a", 22), "html body.wp-admin .a");
    assert_eq!(enhance("a", 21), "body.wp-admin #wpwrap a");
    assert_eq!(enhance("#adminmenu a", 111), "body.wp-admin #adminmenu a");
}

#[test]
fn enhance_falls_back_to_strongest_prefix() {
    assert_eq!(enhance("a", 500), "html body.wp-admin #wpwrap a");
}

#[test]
fn enhance_skips_prefixes_sharing_an_id() {
    assert_eq!(enhance("#wpwrap", 111), "body.wp-admin #wpwrap");
    assert_eq!(enhance("#wpwrap .x", 200), "html body.wp-admin #wpwrap .x");
}

#[test]
fn enhance_qualifies_leading_body_and_html() {
    assert_eq!(enhance("body", 21), "body.wp-admin.wp-core-ui");
    assert_eq!(enhance("body .x", 21), "body.wp-admin .x");
    assert_eq!(enhance("html.wp-toolbar", 21), "html:not(#restyle-root).wp-toolbar");
    assert_eq!(enhance(":root", 21), ":root:not(#restyle-root)");
    assert_eq!(enhance("bodyx", 21), "body.wp-admin #wpwrap bodyx");
}

#[test]
fn enhance_handles_lists_part_by_part() {
    assert_eq!(
        enhance("#adminmenuback, .x", 21),
        "#adminmenuback, body.wp-admin .x"
    );
}

#[test]
fn enhanced_selectors_reach_both_targets() {
    let samples = [
        "a",
        "div",
        ".x",
        "li a:hover",
        "body",
        "html",
        "#adminmenu",
        "#wpwrap",
        ".wp-core-ui .button-primary",
        "#adminmenu .wp-submenu a:focus",
        "body .notice",
    ];
    let t = targets();
    for target in [t.default_target, t.navigation_target] {
        for sample in samples {
            let enhanced = enhance(sample, target);
            assert!(
                specificity_score(&enhanced) >= target,
                "{sample} -> {enhanced} below {target}"
            );
            assert_eq!(enhance(&enhanced, target), enhanced);
        }
    }
}

#[test]
fn navigation_selectors_get_the_higher_target() {
    let t = targets();
    assert_eq!(target_for("#adminmenu li a", &t), 111);
    assert_eq!(target_for("#wpadminbar .ab-item", &t), 111);
    assert_eq!(target_for("#adminmenuwrap", &t), 111);
    assert_eq!(target_for("#adminmenu-extra", &t), 21);
    assert_eq!(target_for(".wrap h1", &t), 21);
}
