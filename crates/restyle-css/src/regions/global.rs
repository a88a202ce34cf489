//! Page body, typography and content links.

use super::{RegionContext, RegionError};
use crate::sanitize::{validate, ValueKind};

const PAGE: &str = "body, #wpwrap";
const CONTENT_LINKS: &str = "#wpbody-content a";
const CONTENT_LINKS_ACTIVE: &str = "#wpbody-content a:hover, #wpbody-content a:focus";
const ROUNDED_SURFACES: &str = ".postbox, .card, .notice, .wp-core-ui .button";

pub(super) fn build(ctx: &mut RegionContext<'_, '_>) -> Result<(), RegionError> {
    ctx.rule(PAGE, "background-color", "body_bg_color");
    ctx.rule("body", "color", "body_text_color");
    ctx.rule("body", "font-family", "body_font_family");
    ctx.rule("body", "font-size", "body_font_size");
    ctx.rule("body", "line-height", "body_line_height");
    ctx.rule(CONTENT_LINKS, "color", "content_link_color");
    ctx.rule(CONTENT_LINKS_ACTIVE, "color", "content_link_hover_color");
    ctx.rule(ROUNDED_SURFACES, "border-radius", "global_border_radius");

    if ctx.should_emit("body_bg_image") {
        let url = validate(&ctx.text("body_bg_image"), ValueKind::Url, "");
        if url.is_empty() {
            ctx.literal("body", "background-image", "none");
        } else {
            ctx.literal("body", "background-image", &format!("url(\"{url}\")"));
            ctx.literal("body", "background-size", "cover");
            ctx.literal("body", "background-repeat", "no-repeat");
        }
    }
    Ok(())
}
