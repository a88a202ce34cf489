//! The fixed catalog of style regions.
//!
//! Each region reads its own settings and emits rules through a
//! [`RegionContext`]. Regions run in catalog order; a region that fails or
//! panics is logged and the next one runs.

mod accent;
mod custom;
mod global;
mod menu;
mod submenu;
mod toolbar;

use restyle_config::option_spec;
use tracing::{trace, warn};

use crate::document::DocumentBuilder;
use crate::emit::{Emitter, SkipReason};
use crate::sanitize::{validate, ValueKind};

/// A region failure that is not a single skipped rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionError {
    #[error("cannot derive colors from {key} = {value:?}")]
    Underivable { key: &'static str, value: String },
}

pub type RegionFn = fn(&mut RegionContext<'_, '_>) -> Result<(), RegionError>;

/// A named region builder.
#[derive(Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub build: RegionFn,
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region").field("name", &self.name).finish()
    }
}

pub static REGIONS: &[Region] = &[
    Region {
        name: "global",
        build: global::build,
    },
    Region {
        name: "menu",
        build: menu::build,
    },
    Region {
        name: "submenu",
        build: submenu::build,
    },
    Region {
        name: "toolbar",
        build: toolbar::build,
    },
    Region {
        name: "accent",
        build: accent::build,
    },
    Region {
        name: "custom",
        build: custom::build,
    },
];

/// Region-facing wrapper over an [`Emitter`] and the document.
///
/// Skips are logged here, so region code reads as a flat list of rules.
pub struct RegionContext<'a, 'd> {
    emitter: Emitter<'a>,
    doc: &'d mut DocumentBuilder,
    region: &'static str,
}

impl<'a, 'd> RegionContext<'a, 'd> {
    pub fn new(emitter: Emitter<'a>, doc: &'d mut DocumentBuilder, region: &'static str) -> Self {
        Self {
            emitter,
            doc,
            region,
        }
    }

    pub fn should_emit(&self, key: &str) -> bool {
        self.emitter.should_emit(key)
    }

    pub fn any_should_emit(&self, keys: &[&str]) -> bool {
        self.emitter.any_should_emit(keys)
    }

    pub fn text(&self, key: &str) -> String {
        self.emitter.text(key)
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.emitter.is_enabled(key)
    }

    /// `key` as a clamped dimension, falling back to its default.
    pub fn dimension(&self, key: &str, unit: &'static str) -> String {
        let (min, max) = option_spec(key)
            .and_then(|spec| spec.range)
            .unwrap_or((0.0, 10_000.0));
        let fallback = option_spec(key)
            .map(|spec| spec.default.to_setting().as_text())
            .unwrap_or_else(|| "0".to_string());
        validate(&self.text(key), ValueKind::Dimension { min, max, unit }, &fallback)
    }

    /// `key` as a color, falling back to its default.
    pub fn color(&self, key: &str) -> String {
        let fallback = option_spec(key)
            .map(|spec| spec.default.to_setting().as_text())
            .unwrap_or_default();
        validate(&self.text(key), ValueKind::Color, &fallback)
    }

    /// Emit a setting-backed `!important` rule. Returns whether it was appended.
    pub fn rule(&mut self, selector: &str, property: &str, key: &str) -> bool {
        let result = self
            .emitter
            .emit(self.doc, selector, property, key, true, None);
        self.record(property, result)
    }

    pub fn rule_with_unit(
        &mut self,
        selector: &str,
        property: &str,
        key: &str,
        unit: &'static str,
    ) -> bool {
        let result = self
            .emitter
            .emit(self.doc, selector, property, key, true, Some(unit));
        self.record(property, result)
    }

    /// Emit a computed value as an `!important` rule.
    pub fn literal(&mut self, selector: &str, property: &str, value: &str) -> bool {
        let result = self
            .emitter
            .emit_literal(self.doc, selector, property, value, true, None);
        self.record(property, result)
    }

    pub fn raw(&mut self, block: &str) -> bool {
        let result = self.emitter.emit_raw(self.doc, block);
        self.record("raw block", result)
    }

    fn record(&mut self, what: &str, result: Result<(), SkipReason>) -> bool {
        match result {
            Ok(()) => true,
            Err(reason) if reason.is_policy() => {
                trace!(region = self.region, what, %reason, "rule not emitted");
                false
            }
            Err(reason) => {
                self.doc.note_skip();
                warn!(region = self.region, what, %reason, "css rule skipped");
                false
            }
        }
    }
}

/// Resolve a shadow preset setting (`none`, `subtle`, `medium`, `strong`,
/// `custom`) to a shadow value. Custom values come from `custom_key`.
pub(crate) fn resolve_shadow(
    ctx: &RegionContext<'_, '_>,
    preset_key: &str,
    custom_key: &str,
) -> Option<String> {
    let preset = ctx.text(preset_key).to_ascii_lowercase();
    let value = match preset.as_str() {
        "" | "none" => "none".to_string(),
        "subtle" => "0 1px 3px rgba(0, 0, 0, 0.12)".to_string(),
        "medium" => "0 4px 12px rgba(0, 0, 0, 0.18)".to_string(),
        "strong" => "0 10px 30px rgba(0, 0, 0, 0.3)".to_string(),
        "custom" => ctx.text(custom_key),
        other => {
            warn!(key = preset_key, preset = other, "unknown shadow preset");
            return None;
        }
    };
    Some(value)
}

#[cfg(test)]
mod tests;
