//! Accent color and the colors derived from it.

use super::{RegionContext, RegionError};
use crate::color_math::{adjust_brightness, readable_text_color};

const PRIMARY: &str = ".wp-core-ui .button-primary";
const PRIMARY_HOVER: &str = ".wp-core-ui .button-primary:hover, .wp-core-ui .button-primary:focus";
const PRIMARY_ACTIVE: &str = ".wp-core-ui .button-primary:active";
const BADGES: &str = "#adminmenu .awaiting-mod, #adminmenu .update-plugins";

pub(super) fn build(ctx: &mut RegionContext<'_, '_>) -> Result<(), RegionError> {
    if !ctx.any_should_emit(&["accent_color", "accent_hover_shift"]) {
        return Ok(());
    }

    let accent = ctx.color("accent_color");
    ctx.literal(PRIMARY, "background-color", &accent);
    ctx.literal(PRIMARY, "border-color", &accent);
    ctx.literal(BADGES, "background-color", &accent);

    // Keywords such as `transparent` carry no channels to derive from.
    let shift = ctx
        .dimension("accent_hover_shift", "")
        .parse::<i32>()
        .unwrap_or(-20);
    let derived = readable_text_color(&accent).zip(
        adjust_brightness(&accent, shift).zip(adjust_brightness(&accent, shift.saturating_mul(2))),
    );
    let Some((text, (hover, active))) = derived else {
        return Err(RegionError::Underivable {
            key: "accent_color",
            value: accent,
        });
    };

    ctx.literal(PRIMARY, "color", text);
    ctx.literal(PRIMARY_HOVER, "background-color", &hover);
    ctx.literal(PRIMARY_HOVER, "border-color", &hover);
    ctx.literal(PRIMARY_ACTIVE, "background-color", &active);
    ctx.literal(BADGES, "color", text);
    Ok(())
}
