//! Left admin menu: surface, items, sizing, shadow and floating layout.

use super::{resolve_shadow, RegionContext, RegionError};
use crate::sanitize::{validate, ValueKind};

const SURFACES: &str = "#adminmenuback, #adminmenuwrap, #adminmenu";
const ITEM_TEXT: &str = "#adminmenu a, #adminmenu div.wp-menu-name";
const ITEM_ICON: &str = "#adminmenu div.wp-menu-image:before";
const ITEM_HOVER: &str =
    "#adminmenu li.menu-top:hover, #adminmenu li.opensub > a.menu-top, #adminmenu li > a.menu-top:focus";
const ITEM_HOVER_TEXT: &str =
    "#adminmenu li.menu-top:hover div.wp-menu-name, #adminmenu li > a.menu-top:focus div.wp-menu-name";
const ITEM_ACTIVE: &str =
    "#adminmenu li.current a.menu-top, #adminmenu li.wp-has-current-submenu a.wp-has-current-submenu";
const TOP_ITEMS: &str = "#adminmenu a.menu-top";

const GRADIENT_KEYS: &[&str] = &[
    "admin_menu_bg_type",
    "admin_menu_gradient_start",
    "admin_menu_gradient_end",
    "admin_menu_gradient_angle",
];

pub(super) fn build(ctx: &mut RegionContext<'_, '_>) -> Result<(), RegionError> {
    surface(ctx);

    ctx.rule(ITEM_TEXT, "color", "admin_menu_text_color");
    ctx.rule(ITEM_ICON, "color", "admin_menu_icon_color");
    ctx.rule(ITEM_HOVER, "background-color", "admin_menu_hover_bg_color");
    ctx.rule(ITEM_HOVER_TEXT, "color", "admin_menu_hover_text_color");
    ctx.rule(ITEM_ACTIVE, "background-color", "admin_menu_active_bg_color");
    ctx.rule(ITEM_ACTIVE, "color", "admin_menu_active_text_color");
    ctx.rule(TOP_ITEMS, "min-height", "admin_menu_item_height");
    ctx.rule("#adminmenu a", "font-size", "admin_menu_font_size");
    ctx.rule("#adminmenuwrap, #adminmenu li.menu-top", "border-radius", "admin_menu_border_radius");

    if ctx.rule(SURFACES, "width", "admin_menu_width") {
        let width = ctx.dimension("admin_menu_width", "px");
        ctx.raw(&format!(
            "#wpcontent, #wpfooter {{ margin-left: {width}; }}\n\
             @media screen and (max-width: 782px) {{\n    #wpcontent, #wpfooter {{ margin-left: 0; }}\n}}"
        ));
    }

    if ctx.any_should_emit(&["admin_menu_shadow", "admin_menu_shadow_custom"]) {
        if let Some(shadow) = resolve_shadow(ctx, "admin_menu_shadow", "admin_menu_shadow_custom") {
            ctx.literal("#adminmenuwrap", "box-shadow", &shadow);
        }
    }

    floating(ctx);
    Ok(())
}

fn surface(ctx: &mut RegionContext<'_, '_>) {
    let is_gradient = ctx.text("admin_menu_bg_type").eq_ignore_ascii_case("gradient");
    if !is_gradient {
        ctx.rule(SURFACES, "background-color", "admin_menu_bg_color");
        return;
    }
    if !ctx.any_should_emit(GRADIENT_KEYS) {
        return;
    }

    let start = ctx.color("admin_menu_gradient_start");
    let end = ctx.color("admin_menu_gradient_end");
    let angle = ctx.dimension("admin_menu_gradient_angle", "deg");
    let gradient = validate(
        &format!("linear-gradient({angle}, {start}, {end})"),
        ValueKind::RawFragment,
        "none",
    );
    ctx.literal(SURFACES, "background-color", &start);
    ctx.literal(SURFACES, "background-image", &gradient);
}

fn floating(ctx: &mut RegionContext<'_, '_>) {
    if !ctx.is_enabled("admin_menu_floating")
        || !ctx.any_should_emit(&["admin_menu_floating", "admin_menu_floating_margin"])
    {
        return;
    }
    let margin = ctx.dimension("admin_menu_floating_margin", "px");
    ctx.raw(&format!(
        "#adminmenuwrap {{ position: fixed; top: calc(32px + {margin}); left: {margin}; bottom: {margin}; overflow-y: auto; }}\n\
         #adminmenuback {{ display: none; }}\n\
         @media screen and (max-width: 782px) {{\n    #adminmenuwrap {{ position: relative; top: 0; left: 0; bottom: auto; }}\n}}"
    ));
}
