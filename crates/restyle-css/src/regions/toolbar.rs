//! Top admin toolbar.

use super::{resolve_shadow, RegionContext, RegionError};

const BAR: &str = "#wpadminbar";
const ITEMS: &str = "#wpadminbar .ab-item, #wpadminbar a.ab-item, #wpadminbar .ab-label";
const ITEMS_ACTIVE: &str =
    "#wpadminbar .ab-top-menu > li:hover > .ab-item, #wpadminbar .ab-top-menu > li > .ab-item:focus";

pub(super) fn build(ctx: &mut RegionContext<'_, '_>) -> Result<(), RegionError> {
    ctx.rule(BAR, "background-color", "admin_bar_bg_color");
    ctx.rule(ITEMS, "color", "admin_bar_text_color");
    ctx.rule(ITEMS_ACTIVE, "color", "admin_bar_hover_color");
    ctx.rule(ITEMS, "font-size", "admin_bar_font_size");
    ctx.rule(BAR, "border-radius", "admin_bar_border_radius");
    ctx.rule_with_unit(BAR, "width", "admin_bar_width", "%");

    if ctx.rule(BAR, "height", "admin_bar_height") {
        let height = ctx.dimension("admin_bar_height", "px");
        ctx.raw(&format!(
            "html.wp-toolbar {{ padding-top: {height}; }}\n\
             #wpadminbar .ab-item, #wpadminbar .quicklinks > ul > li > a {{ height: {height}; line-height: {height}; }}"
        ));
    }

    if ctx.any_should_emit(&["admin_bar_shadow", "admin_bar_shadow_custom"]) {
        if let Some(shadow) = resolve_shadow(ctx, "admin_bar_shadow", "admin_bar_shadow_custom") {
            ctx.literal(BAR, "box-shadow", &shadow);
        }
    }

    if ctx.is_enabled("admin_bar_floating")
        && ctx.any_should_emit(&["admin_bar_floating", "admin_bar_floating_margin"])
    {
        let margin = ctx.dimension("admin_bar_floating_margin", "px");
        ctx.raw(&format!(
            "#wpadminbar {{ top: {margin}; left: {margin}; right: {margin}; width: auto; }}\n\
             @media screen and (max-width: 782px) {{\n    #wpadminbar {{ top: 0; left: 0; right: 0; }}\n}}"
        ));
    }
    Ok(())
}
