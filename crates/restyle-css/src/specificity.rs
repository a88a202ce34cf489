//! Selector scoring and high-specificity qualification.
//!
//! The host's admin stylesheet targets its menu and toolbar through IDs, so
//! a plain `#adminmenu a` from us would lose ties against it. [`enhance`]
//! lifts a selector past a target score by prefixing (or, for selectors
//! anchored on `body`/`html`, qualifying) it with host structure that is
//! always present on admin pages.

use restyle_config::schema::SpecificityConfig;

use crate::syntax::split_top_level;

pub const ID_WEIGHT: u32 = 100;
pub const CLASS_WEIGHT: u32 = 10;
pub const ELEMENT_WEIGHT: u32 = 1;

/// Ancestor prefixes, cheapest first. Scores equal `specificity_score` of
/// the prefix text.
pub const PREFIXES: &[(&str, u32)] = &[
    ("body.wp-admin", 11),
    ("html body.wp-admin", 12),
    ("body.wp-admin #wpwrap", 111),
    ("html body.wp-admin #wpwrap", 112),
];

/// Qualifiers appended to a leading `body` compound.
const BODY_QUALIFIERS: &[(&str, u32)] = &[
    (".wp-admin", 10),
    (".wp-admin.wp-core-ui", 20),
    (".wp-admin:not(#restyle-root)", 110),
    (".wp-admin.wp-core-ui:not(#restyle-root)", 120),
];

/// Qualifiers appended to a leading `html` or `:root` compound.
const ROOT_QUALIFIERS: &[(&str, u32)] = &[
    (":not(#restyle-root)", 100),
    (":not(#restyle-root):not(#restyle-root)", 200),
];

/// IDs that mark the host's primary navigation.
const NAVIGATION_IDS: &[&str] = &[
    "adminmenu",
    "adminmenuback",
    "adminmenuwrap",
    "adminmenumain",
    "wpadminbar",
];

/// Legacy single-colon pseudo-elements, scored as elements.
const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

/// Standard specificity, summed over comma-separated sub-selectors.
pub fn specificity_score(selector: &str) -> u32 {
    split_top_level(selector, ',')
        .into_iter()
        .map(complex_score)
        .sum()
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn skip_ident(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(|&c| is_ident_char(c)) {
        i += 1;
    }
    i
}

/// Index just past the bracket or paren closing the one at `open`.
fn skip_group(chars: &[char], open: usize) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut i = open;
    while let Some(&c) = chars.get(i) {
        i += 1;
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    i
}

/// Score of one selector without top-level commas.
fn complex_score(selector: &str) -> u32 {
    let chars: Vec<char> = selector.chars().collect();
    let mut score = 0;
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        match c {
            '#' => {
                score += ID_WEIGHT;
                i = skip_ident(&chars, i + 1);
            }
            '.' => {
                score += CLASS_WEIGHT;
                i = skip_ident(&chars, i + 1);
            }
            '[' => {
                score += CLASS_WEIGHT;
                i = skip_group(&chars, i);
            }
            ':' if chars.get(i + 1) == Some(&':') => {
                score += ELEMENT_WEIGHT;
                i = skip_ident(&chars, i + 2);
                if chars.get(i) == Some(&'(') {
                    i = skip_group(&chars, i);
                }
            }
            ':' => {
                let name_end = skip_ident(&chars, i + 1);
                let name = chars[i + 1..name_end]
                    .iter()
                    .collect::<String>()
                    .to_ascii_lowercase();
                if chars.get(name_end) == Some(&'(') {
                    let close = skip_group(&chars, name_end);
                    let inner_end = if chars.get(close - 1) == Some(&')') {
                        close - 1
                    } else {
                        close
                    };
                    let inner: String = chars[name_end + 1..inner_end.max(name_end + 1)]
                        .iter()
                        .collect();
                    score += match name.as_str() {
                        "where" => 0,
                        "not" | "is" | "has" | "matches" | "-webkit-any" | "-moz-any" => {
                            split_top_level(&inner, ',')
                                .into_iter()
                                .map(complex_score)
                                .max()
                                .unwrap_or(0)
                        }
                        _ => CLASS_WEIGHT,
                    };
                    i = close;
                } else {
                    score += if LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()) {
                        ELEMENT_WEIGHT
                    } else {
                        CLASS_WEIGHT
                    };
                    i = name_end;
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                score += ELEMENT_WEIGHT;
                i = skip_ident(&chars, i);
            }
            _ => i += 1,
        }
    }
    score
}

/// IDs referenced anywhere in `selector`.
fn ids(selector: &str) -> Vec<String> {
    let chars: Vec<char> = selector.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '#' {
            let end = skip_ident(&chars, i + 1);
            found.push(chars[i + 1..end].iter().collect::<String>().to_ascii_lowercase());
            i = end;
        } else {
            i += 1;
        }
    }
    found
}

/// Target score for `selector`: navigation selectors need the higher one.
pub fn target_for(selector: &str, targets: &SpecificityConfig) -> u32 {
    let touches_navigation = ids(selector)
        .iter()
        .any(|id| NAVIGATION_IDS.contains(&id.as_str()));
    if touches_navigation {
        targets.navigation_target
    } else {
        targets.default_target
    }
}

enum Anchor {
    /// Leading `body`, with the byte length of the element name.
    Body(usize),
    /// Leading `html` or `:root`.
    Root(usize),
}

fn leading_word(selector: &str, word: &str) -> bool {
    selector
        .get(..word.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(word))
        && !selector[word.len()..]
            .chars()
            .next()
            .is_some_and(is_ident_char)
}

fn anchor(selector: &str) -> Option<Anchor> {
    if leading_word(selector, "body") {
        Some(Anchor::Body(4))
    } else if leading_word(selector, "html") {
        Some(Anchor::Root(4))
    } else if leading_word(selector, ":root") {
        Some(Anchor::Root(5))
    } else {
        None
    }
}

/// The cheapest option reaching `target`, else the strongest.
fn choose<'a>(options: &[(&'a str, u32)], score: u32, target: u32) -> Option<&'a str> {
    options
        .iter()
        .find(|(_, weight)| score + weight >= target)
        .or_else(|| options.last())
        .map(|(text, _)| *text)
}

/// Lift every sub-selector of `selector` to at least `target`.
pub fn enhance(selector: &str, target: u32) -> String {
    split_top_level(selector, ',')
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(|part| enhance_one(part, target))
        .collect::<Vec<_>>()
        .join(", ")
}

fn enhance_one(selector: &str, target: u32) -> String {
    let score = specificity_score(selector);
    if score >= target {
        return selector.to_string();
    }

    let (len, qualifiers) = match anchor(selector) {
        Some(Anchor::Body(len)) => (len, BODY_QUALIFIERS),
        Some(Anchor::Root(len)) => (len, ROOT_QUALIFIERS),
        None => return prefixed(selector, score, target),
    };
    match choose(qualifiers, score, target) {
        Some(q) => format!("{}{q}{}", &selector[..len], &selector[len..]),
        None => selector.to_string(),
    }
}

/// Prepend an ancestor prefix, skipping prefixes whose IDs the selector
/// already names.
fn prefixed(selector: &str, score: u32, target: u32) -> String {
    let own_ids = ids(selector);
    let usable: Vec<(&str, u32)> = PREFIXES
        .iter()
        .copied()
        .filter(|(prefix, _)| ids(prefix).iter().all(|id| !own_ids.contains(id)))
        .collect();
    match choose(&usable, score, target) {
        Some(prefix) => format!("{prefix} {selector}"),
        None => selector.to_string(),
    }
}

#[cfg(test)]
mod tests;
