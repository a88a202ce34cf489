//! Small tokenizing helpers shared by the validator and specificity engine.

/// Split `input` on `separator` wherever it is outside parentheses,
/// brackets and quotes. Parts are trimmed; empty parts are kept.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    split_where(input, |c| c == separator)
}

/// Split on whitespace outside parentheses, brackets and quotes, dropping
/// empty parts.
pub fn split_top_level_whitespace(input: &str) -> Vec<&str> {
    split_where(input, char::is_whitespace)
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect()
}

fn split_where(input: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (index, c) in input.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_separator(c) => {
                parts.push(input[start..index].trim());
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts
}

/// Whether parentheses and brackets nest correctly and quotes close.
pub fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut quote: Option<char> = None;
    for c in input.chars() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            ')' | ']' => {
                if stack.pop() != Some(c) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty() && quote.is_none()
}
