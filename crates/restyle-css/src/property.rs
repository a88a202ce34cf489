//! Which validator a CSS property's values go through.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::sanitize::KeywordSet;

/// Value kind of a property, before per-key ranges are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    Color,
    /// Background image or shadow list. Neutral value is `none`.
    Fragment,
    Keyword(KeywordSet),
    FontFamily,
    /// Numeric with a default unit and range.
    Dimension {
        unit: &'static str,
        min: f64,
        max: f64,
    },
    Text,
}

const fn px(min: f64, max: f64) -> PropertyKind {
    PropertyKind::Dimension {
        unit: "px",
        min,
        max,
    }
}

const fn unitless(min: f64, max: f64) -> PropertyKind {
    PropertyKind::Dimension { unit: "", min, max }
}

use PropertyKind::{Color, FontFamily, Fragment, Keyword};

static PROPERTY_TABLE: &[(&str, PropertyKind)] = &[
    ("color", Color),
    ("background-color", Color),
    ("border-color", Color),
    ("border-top-color", Color),
    ("border-right-color", Color),
    ("border-bottom-color", Color),
    ("border-left-color", Color),
    ("outline-color", Color),
    ("text-decoration-color", Color),
    ("caret-color", Color),
    ("fill", Color),
    ("stroke", Color),
    ("background-image", Fragment),
    ("box-shadow", Fragment),
    ("text-shadow", Fragment),
    ("font-family", FontFamily),
    ("display", Keyword(KeywordSet::Display)),
    ("position", Keyword(KeywordSet::Position)),
    ("visibility", Keyword(KeywordSet::Visibility)),
    ("overflow", Keyword(KeywordSet::Overflow)),
    ("overflow-x", Keyword(KeywordSet::Overflow)),
    ("overflow-y", Keyword(KeywordSet::Overflow)),
    ("text-align", Keyword(KeywordSet::TextAlign)),
    ("text-transform", Keyword(KeywordSet::TextTransform)),
    ("font-style", Keyword(KeywordSet::FontStyle)),
    ("font-weight", Keyword(KeywordSet::FontWeight)),
    ("border-style", Keyword(KeywordSet::BorderStyle)),
    ("white-space", Keyword(KeywordSet::WhiteSpace)),
    ("cursor", Keyword(KeywordSet::Cursor)),
    ("background-repeat", Keyword(KeywordSet::BackgroundRepeat)),
    ("background-size", Keyword(KeywordSet::BackgroundSize)),
    ("box-sizing", Keyword(KeywordSet::BoxSizing)),
    ("pointer-events", Keyword(KeywordSet::PointerEvents)),
    ("float", Keyword(KeywordSet::Float)),
    ("width", px(0.0, 10000.0)),
    ("min-width", px(0.0, 10000.0)),
    ("max-width", px(0.0, 10000.0)),
    ("height", px(0.0, 10000.0)),
    ("min-height", px(0.0, 10000.0)),
    ("max-height", px(0.0, 10000.0)),
    ("top", px(-10000.0, 10000.0)),
    ("right", px(-10000.0, 10000.0)),
    ("bottom", px(-10000.0, 10000.0)),
    ("left", px(-10000.0, 10000.0)),
    ("margin", px(-1000.0, 1000.0)),
    ("margin-top", px(-1000.0, 1000.0)),
    ("margin-right", px(-1000.0, 1000.0)),
    ("margin-bottom", px(-1000.0, 1000.0)),
    ("margin-left", px(-1000.0, 1000.0)),
    ("padding", px(0.0, 1000.0)),
    ("padding-top", px(0.0, 1000.0)),
    ("padding-right", px(0.0, 1000.0)),
    ("padding-bottom", px(0.0, 1000.0)),
    ("padding-left", px(0.0, 1000.0)),
    ("font-size", px(1.0, 200.0)),
    ("letter-spacing", px(-50.0, 50.0)),
    ("border-width", px(0.0, 100.0)),
    ("border-radius", px(0.0, 1000.0)),
    ("gap", px(0.0, 1000.0)),
    ("line-height", unitless(0.0, 10.0)),
    ("opacity", unitless(0.0, 1.0)),
    ("z-index", unitless(-100000.0, 100000.0)),
    (
        "transition-duration",
        PropertyKind::Dimension {
            unit: "ms",
            min: 0.0,
            max: 10000.0,
        },
    ),
];

static PROPERTY_INDEX: LazyLock<HashMap<&'static str, PropertyKind>> =
    LazyLock::new(|| PROPERTY_TABLE.iter().copied().collect());

/// Kind for `property`. Unknown properties get generic text escaping.
pub fn property_kind(property: &str) -> PropertyKind {
    PROPERTY_INDEX
        .get(property.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(PropertyKind::Text)
}
