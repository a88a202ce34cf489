//! Rule emission: decide, validate, qualify and append one declaration.

use regex::Regex;
use restyle_common::{CompileMode, SettingValue, SettingsMap};
use restyle_config::option_spec;
use restyle_config::schema::{EngineConfig, LimitsConfig, SpecificityConfig};
use std::sync::LazyLock;
use tracing::warn;

use crate::document::DocumentBuilder;
use crate::property::{property_kind, PropertyKind};
use crate::sanitize::{find_injection, is_valid_color, validate, ValueKind, DEFAULT_COLOR};
use crate::specificity::{enhance, target_for};
use crate::syntax::{is_balanced, split_top_level};

const RAW_TRUNCATED_MARKER: &str = "/* restyle: raw block truncated at size limit */";

/// Words a dimension property accepts in place of a number.
const DIMENSION_KEYWORDS: &[&str] = &["auto", "inherit", "initial", "unset", "none"];

/// Patterns rejected anywhere in a rule.
const RULE_DISALLOWED: &[&str] = &["<", "javascript:", "expression(", "@import"];

static PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").unwrap());

static SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Za-z0-9 \-_.#:\[\]="'()>+~*,^$|]+$"#).unwrap());

/// Why a rule or raw block was not appended.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("value absent or null")]
    Missing,

    #[error("value equals its default")]
    Unchanged,

    #[error("value is empty after validation")]
    EmptyValue,

    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    #[error("invalid property: {0}")]
    InvalidProperty(String),

    #[error("{size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("unbalanced braces")]
    UnbalancedBraces,

    #[error("disallowed pattern '{0}'")]
    Disallowed(&'static str),
}

impl SkipReason {
    /// Skips that follow from the emission policy rather than bad input.
    pub fn is_policy(&self) -> bool {
        matches!(self, SkipReason::Missing | SkipReason::Unchanged)
    }
}

/// Emits rules for one compilation, against one settings/defaults pair.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    settings: &'a SettingsMap,
    defaults: &'a SettingsMap,
    mode: CompileMode,
    limits: &'a LimitsConfig,
    targets: &'a SpecificityConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(
        settings: &'a SettingsMap,
        defaults: &'a SettingsMap,
        mode: CompileMode,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            settings,
            defaults,
            mode,
            limits: &config.limits,
            targets: &config.specificity,
        }
    }

    pub fn mode(&self) -> CompileMode {
        self.mode
    }

    /// Non-null resolved value for `key`.
    pub fn value(&self, key: &str) -> Option<&'a SettingValue> {
        self.settings.get(key).filter(|v| !v.is_null())
    }

    /// Trimmed text of `key`, empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.value(key).map(SettingValue::as_text).unwrap_or_default()
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.value(key).is_some_and(SettingValue::is_truthy)
    }

    fn is_key(&self, name: &str) -> bool {
        self.settings.contains_key(name)
            || self.defaults.contains_key(name)
            || option_spec(name).is_some()
    }

    /// Whether `key` passes the emission policy for this mode.
    ///
    /// Preview emits every non-null value. Committed emits a value that
    /// differs from its default, or that explicitly resets (`0`, `"0"`,
    /// `""`) a default that is not itself a reset. Keys without a default
    /// are emitted when non-empty.
    pub fn should_emit(&self, key: &str) -> bool {
        let Some(value) = self.value(key) else {
            return false;
        };
        match self.mode {
            CompileMode::Preview => true,
            CompileMode::Committed => match self.defaults.get(key).filter(|d| !d.is_null()) {
                Some(default) => {
                    !value.same_as(default)
                        || (value.is_explicit_reset() && !default.is_explicit_reset())
                }
                None => !value.as_text().is_empty(),
            },
        }
    }

    pub fn any_should_emit(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.should_emit(key))
    }

    /// Emit `selector { property: value; }`.
    ///
    /// `value_or_key` names a setting when it is a known key, and is taken
    /// literally otherwise. `unit` overrides the property's default unit.
    pub fn emit(
        &self,
        doc: &mut DocumentBuilder,
        selector: &str,
        property: &str,
        value_or_key: &str,
        important: bool,
        unit: Option<&'static str>,
    ) -> Result<(), SkipReason> {
        if self.is_key(value_or_key) {
            let key = value_or_key;
            if !self.should_emit(key) {
                return Err(if self.value(key).is_some() {
                    SkipReason::Unchanged
                } else {
                    SkipReason::Missing
                });
            }
            let value = self.value(key).ok_or(SkipReason::Missing)?;
            self.append(doc, selector, property, Some(key), value, important, unit)
        } else {
            self.emit_literal(doc, selector, property, value_or_key, important, unit)
        }
    }

    /// Emit a computed value. Literals bypass the default comparison and
    /// are emitted whenever non-empty.
    pub fn emit_literal(
        &self,
        doc: &mut DocumentBuilder,
        selector: &str,
        property: &str,
        value: &str,
        important: bool,
        unit: Option<&'static str>,
    ) -> Result<(), SkipReason> {
        if value.trim().is_empty() {
            return Err(SkipReason::EmptyValue);
        }
        let value = SettingValue::from(value);
        self.append(doc, selector, property, None, &value, important, unit)
    }

    #[allow(clippy::too_many_arguments)]
    fn append(
        &self,
        doc: &mut DocumentBuilder,
        selector: &str,
        property: &str,
        key: Option<&str>,
        value: &SettingValue,
        important: bool,
        unit: Option<&'static str>,
    ) -> Result<(), SkipReason> {
        if !PROPERTY_RE.is_match(property) {
            return Err(SkipReason::InvalidProperty(property.to_string()));
        }
        let property = property.to_ascii_lowercase();

        let css_value = self.css_value(&property, key, value, unit);
        if css_value.is_empty() {
            return Err(SkipReason::EmptyValue);
        }

        let selector = self.qualify(selector)?;
        let rule = format!(
            "{selector} {{ {property}: {css_value}{}; }}",
            if important { " !important" } else { "" }
        );
        check_rule(&rule, &selector, self.limits.max_rule_bytes)?;

        doc.append_rule(&rule);
        Ok(())
    }

    /// Convert a setting into a validated CSS value for `property`.
    fn css_value(
        &self,
        property: &str,
        key: Option<&str>,
        value: &SettingValue,
        unit: Option<&'static str>,
    ) -> String {
        let text = value.as_text();
        let default = key
            .and_then(|k| self.defaults.get(k))
            .map(SettingValue::as_text)
            .unwrap_or_default();

        match property_kind(property) {
            PropertyKind::Dimension {
                unit: default_unit,
                min,
                max,
            } => {
                let lower = text.to_ascii_lowercase();
                if DIMENSION_KEYWORDS.contains(&lower.as_str()) {
                    return lower;
                }
                let (min, max) = key
                    .and_then(option_spec)
                    .and_then(|spec| spec.range)
                    .unwrap_or((min, max));
                let fallback = if default.parse::<f64>().is_ok() {
                    default.as_str()
                } else {
                    "0"
                };
                let kind = ValueKind::Dimension {
                    min,
                    max,
                    unit: unit.unwrap_or(default_unit),
                };
                validate(&text, kind, fallback)
            }
            PropertyKind::Color => {
                let fallback = if is_valid_color(&default) {
                    default.as_str()
                } else {
                    DEFAULT_COLOR
                };
                validate(&text, ValueKind::Color, fallback)
            }
            PropertyKind::Fragment => validate(&text, ValueKind::RawFragment, "none"),
            PropertyKind::Keyword(set) => validate(&text, ValueKind::Keyword(set), &default),
            PropertyKind::FontFamily => {
                let kind = ValueKind::FontFamily {
                    max_chars: self.limits.max_font_family_chars,
                };
                validate(&text, kind, &default)
            }
            PropertyKind::Text => validate(&text, ValueKind::GenericText, ""),
        }
    }

    /// Validate and enhance each comma-separated sub-selector.
    fn qualify(&self, selector: &str) -> Result<String, SkipReason> {
        let parts: Vec<&str> = split_top_level(selector, ',');
        if parts.iter().any(|part| !is_valid_selector(part)) {
            return Err(SkipReason::InvalidSelector(selector.to_string()));
        }
        Ok(parts
            .into_iter()
            .map(|part| enhance(part, target_for(part, self.targets)))
            .collect::<Vec<_>>()
            .join(", "))
    }

    /// Append a pre-built block verbatim after structural and injection
    /// checks. Oversized blocks are cut at the last complete top-level
    /// block that fits, or inside a single oversized block at the last
    /// declaration that fits with its blocks closed, and marked.
    pub fn emit_raw(&self, doc: &mut DocumentBuilder, block: &str) -> Result<(), SkipReason> {
        let block = block.trim();
        if block.is_empty() {
            return Err(SkipReason::EmptyValue);
        }
        if let Some(pattern) = find_injection(block) {
            return Err(SkipReason::Disallowed(pattern));
        }
        if block.contains('<') {
            return Err(SkipReason::Disallowed("<"));
        }
        if !braces_balanced(block) {
            return Err(SkipReason::UnbalancedBraces);
        }

        let limit = self.limits.max_raw_bytes;
        if block.len() <= limit {
            doc.append_raw(block);
            return Ok(());
        }

        let budget = limit.saturating_sub(RAW_TRUNCATED_MARKER.len() + 1);
        let (cut, open) = match last_block_end(block, budget) {
            0 => last_declaration_end(block, budget).ok_or(SkipReason::TooLarge {
                size: block.len(),
                limit,
            })?,
            cut => (cut, 0),
        };
        warn!(size = block.len(), limit, kept = cut, "raw css block truncated");
        doc.append_raw(&format!(
            "{}{}\n{RAW_TRUNCATED_MARKER}",
            &block[..cut],
            "}".repeat(open)
        ));
        Ok(())
    }
}

fn is_valid_selector(selector: &str) -> bool {
    !selector.is_empty() && SELECTOR_RE.is_match(selector) && is_balanced(selector)
}

fn check_rule(rule: &str, selector: &str, limit: usize) -> Result<(), SkipReason> {
    if rule.len() > limit {
        return Err(SkipReason::TooLarge {
            size: rule.len(),
            limit,
        });
    }
    if rule.matches('{').count() != 1 || rule.matches('}').count() != 1 {
        return Err(SkipReason::UnbalancedBraces);
    }
    let lower = rule.to_ascii_lowercase();
    if let Some(pattern) = RULE_DISALLOWED.iter().copied().find(|p| lower.contains(p)) {
        return Err(SkipReason::Disallowed(pattern));
    }
    // `>` is a child combinator inside the selector; anywhere else it is hostile.
    if lower[selector.len()..].contains('>') {
        return Err(SkipReason::Disallowed(">"));
    }
    Ok(())
}

fn braces_balanced(block: &str) -> bool {
    let mut depth = 0i64;
    for c in block.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Byte offset just past the last top-level `}` that ends before `budget`.
fn last_block_end(block: &str, budget: usize) -> usize {
    let mut depth = 0usize;
    let mut cut = 0;
    for (index, c) in block.char_indices() {
        if index >= budget {
            break;
        }
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    cut = index + 1;
                }
            }
            _ => {}
        }
    }
    cut
}

/// Byte offset just past the last declaration or nested block that still
/// fits in `budget` once the blocks open there are closed, with the count
/// of those open blocks.
fn last_declaration_end(block: &str, budget: usize) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut quote = None;
    let mut best = None;
    for (index, c) in block.char_indices() {
        if index >= budget {
            break;
        }
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        let boundary = match c {
            '"' | '\'' => {
                quote = Some(c);
                false
            }
            '{' => {
                depth += 1;
                false
            }
            '}' => {
                depth = depth.saturating_sub(1);
                depth > 0
            }
            ';' => depth > 0,
            _ => false,
        };
        let end = index + 1;
        if boundary && end + depth <= budget {
            best = Some((end, depth));
        }
    }
    best
}
