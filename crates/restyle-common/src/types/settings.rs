use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A flat, ordered settings map keyed by option name.
pub type SettingsMap = BTreeMap<String, SettingValue>;

/// A scalar setting value as supplied by the settings resolver or a preview overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl SettingValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }

    /// Textual form used for comparisons and CSS conversion.
    ///
    /// Booleans render as `1`/`0`, floats drop a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            SettingValue::Null => String::new(),
            SettingValue::Bool(true) => "1".into(),
            SettingValue::Bool(false) => "0".into(),
            SettingValue::Int(n) => n.to_string(),
            SettingValue::Float(f) => format_number(*f),
            SettingValue::Str(s) => s.trim().to_string(),
        }
    }

    /// Numeric view of the value. Strings are parsed when they hold a plain number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Int(n) => Some(*n as f64),
            SettingValue::Float(f) if f.is_finite() => Some(*f),
            SettingValue::Str(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SettingValue::Int(_) | SettingValue::Float(_))
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            SettingValue::Null => false,
            SettingValue::Bool(b) => *b,
            SettingValue::Int(n) => *n != 0,
            SettingValue::Float(f) => *f != 0.0,
            SettingValue::Str(s) => {
                let s = s.trim();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
        }
    }

    /// True for `0`, `"0"` and `""`: values that explicitly reset a property.
    pub fn is_explicit_reset(&self) -> bool {
        match self {
            SettingValue::Int(0) => true,
            SettingValue::Float(f) => *f == 0.0,
            SettingValue::Str(s) => {
                let s = s.trim();
                s.is_empty() || s == "0"
            }
            _ => false,
        }
    }

    /// Loose equality on the textual form, so `12` equals `"12"`.
    pub fn same_as(&self, other: &SettingValue) -> bool {
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a == b;
        }
        self.as_text().eq_ignore_ascii_case(&other.as_text())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Str(s)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        SettingValue::Int(n)
    }
}

impl From<f64> for SettingValue {
    fn from(f: f64) -> Self {
        SettingValue::Float(f)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

/// Compilation mode, fixed for a whole compilation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompileMode {
    /// Unsaved overlay: every non-null value is emitted.
    Preview,
    /// Persisted settings: only deltas from the defaults are emitted.
    Committed,
}

impl CompileMode {
    pub fn tag(&self) -> &'static str {
        match self {
            CompileMode::Preview => "preview",
            CompileMode::Committed => "committed",
        }
    }
}

impl fmt::Display for CompileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Layer `overlay` over `base`. Overlay entries replace base entries key by key.
pub fn merge_settings(base: &SettingsMap, overlay: &SettingsMap) -> SettingsMap {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
