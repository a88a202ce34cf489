use super::{RegionContext, RegionError};

const FLYOUT: &str = "#adminmenu .wp-submenu, #adminmenu .wp-has-current-submenu .wp-submenu";
const LINKS: &str = "#adminmenu .wp-submenu a";
const LINKS_ACTIVE: &str = "#adminmenu .wp-submenu a:hover, #adminmenu .wp-submenu a:focus";

pub(super) fn build(ctx: &mut RegionContext<'_, '_>) -> Result<(), RegionError> {
    ctx.rule(FLYOUT, "background-color", "admin_submenu_bg_color");
    ctx.rule(LINKS, "color", "admin_submenu_text_color");
    ctx.rule(LINKS_ACTIVE, "color", "admin_submenu_hover_text_color");
    ctx.rule(LINKS, "font-size", "admin_submenu_font_size");
    ctx.rule(
        "#adminmenu .wp-has-current-submenu .wp-submenu",
        "display",
        "admin_submenu_display",
    );

    if ctx.is_enabled("admin_submenu_transition")
        && ctx.any_should_emit(&["admin_submenu_transition", "admin_submenu_transition_ms"])
    {
        let duration = ctx.dimension("admin_submenu_transition_ms", "ms");
        ctx.literal("#adminmenu .wp-submenu", "transition-property", "opacity, transform");
        ctx.literal("#adminmenu .wp-submenu", "transition-duration", &duration);
    }
    Ok(())
}
