//! Closed keyword sets for enumerated properties.

/// A property-specific set of accepted keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSet {
    Display,
    Position,
    Visibility,
    Overflow,
    TextAlign,
    TextTransform,
    FontStyle,
    FontWeight,
    BorderStyle,
    WhiteSpace,
    Cursor,
    BackgroundRepeat,
    BackgroundSize,
    BoxSizing,
    PointerEvents,
    Float,
}

const GLOBAL: &[&str] = &["inherit", "initial", "unset"];

impl KeywordSet {
    pub fn members(self) -> &'static [&'static str] {
        match self {
            KeywordSet::Display => &[
                "none",
                "block",
                "inline",
                "inline-block",
                "flex",
                "inline-flex",
                "grid",
                "inline-grid",
                "table",
                "contents",
            ],
            KeywordSet::Position => &["static", "relative", "absolute", "fixed", "sticky"],
            KeywordSet::Visibility => &["visible", "hidden", "collapse"],
            KeywordSet::Overflow => &["visible", "hidden", "scroll", "auto", "clip"],
            KeywordSet::TextAlign => &["left", "right", "center", "justify", "start", "end"],
            KeywordSet::TextTransform => &["none", "uppercase", "lowercase", "capitalize"],
            KeywordSet::FontStyle => &["normal", "italic", "oblique"],
            KeywordSet::FontWeight => &[
                "normal", "bold", "bolder", "lighter", "100", "200", "300", "400", "500", "600",
                "700", "800", "900",
            ],
            KeywordSet::BorderStyle => &[
                "none", "solid", "dashed", "dotted", "double", "groove", "ridge", "inset",
                "outset",
            ],
            KeywordSet::WhiteSpace => &["normal", "nowrap", "pre", "pre-wrap", "pre-line"],
            KeywordSet::Cursor => &["auto", "default", "pointer", "text", "move", "not-allowed"],
            KeywordSet::BackgroundRepeat => {
                &["repeat", "no-repeat", "repeat-x", "repeat-y", "space", "round"]
            }
            KeywordSet::BackgroundSize => &["auto", "cover", "contain"],
            KeywordSet::BoxSizing => &["content-box", "border-box"],
            KeywordSet::PointerEvents => &["auto", "none"],
            KeywordSet::Float => &["none", "left", "right"],
        }
    }

    /// Normalized keyword when `value` is a member of the set.
    pub fn accept(self, value: &str) -> Option<String> {
        let lower = value.trim().to_ascii_lowercase();
        let known = self.members().contains(&lower.as_str()) || GLOBAL.contains(&lower.as_str());
        known.then_some(lower)
    }
}
