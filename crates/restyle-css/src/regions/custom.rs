use super::{RegionContext, RegionError};

/// Site-supplied CSS, appended verbatim after the raw block checks.
pub(super) fn build(ctx: &mut RegionContext<'_, '_>) -> Result<(), RegionError> {
    if ctx.should_emit("custom_css") {
        let css = ctx.text("custom_css");
        ctx.raw(&css);
    }
    Ok(())
}
