//! Accumulates emitted CSS and finalizes it into a safe document.

use restyle_common::CompileMode;
use tracing::warn;

const TRUNCATED_MARKER: &str = "\n/* restyle: output truncated at size limit */\n";

/// Counters for one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub rules: usize,
    pub raw_blocks: usize,
    pub skipped: usize,
}

/// Append-only CSS buffer with a fixed header comment.
#[derive(Debug)]
pub struct DocumentBuilder {
    header: String,
    body: String,
    stats: DocumentStats,
}

impl DocumentBuilder {
    pub fn new(product: &str, version: &str, mode: CompileMode) -> Self {
        Self {
            header: header_comment(product, version, mode),
            body: String::new(),
            stats: DocumentStats::default(),
        }
    }

    pub fn append_rule(&mut self, rule: &str) {
        self.body.push_str(rule);
        self.body.push('\n');
        self.stats.rules += 1;
    }

    pub fn append_raw(&mut self, block: &str) {
        self.body.push_str(block.trim_end());
        self.body.push('\n');
        self.stats.raw_blocks += 1;
    }

    /// Append a comment. Text that could close the comment is neutralized.
    pub fn append_comment(&mut self, text: &str) {
        self.body.push_str("/* ");
        self.body.push_str(&comment_safe(text));
        self.body.push_str(" */\n");
    }

    pub fn note_skip(&mut self) {
        self.stats.skipped += 1;
    }

    pub fn stats(&self) -> DocumentStats {
        self.stats
    }

    pub fn is_header_only(&self) -> bool {
        self.body.trim().is_empty()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Produce the final text: non-printables stripped, braces balanced,
    /// and the size ceiling enforced.
    pub fn finalize(self, max_bytes: usize) -> String {
        let body = strip_non_printable(&self.body);
        let body = repair_braces(&body);

        let header_len = self.header.len();
        let mut document = self.header;
        document.push_str(&body);
        enforce_ceiling(document, header_len, max_bytes)
    }
}

fn comment_safe(text: &str) -> String {
    text.replace("*/", "* /")
        .replace("/*", "/ *")
        .replace(['{', '}'], "")
}

fn header_comment(product: &str, version: &str, mode: CompileMode) -> String {
    format!(
        "/* {} CSS v{} ({}) */\n",
        comment_safe(product),
        comment_safe(version),
        mode.tag()
    )
}

fn strip_non_printable(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Drop closing braces with no opener and close any blocks left open.
fn repair_braces(text: &str) -> String {
    let mut repaired = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut dropped = 0usize;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => {
                dropped += 1;
                continue;
            }
            '}' => depth -= 1,
            _ => {}
        }
        repaired.push(c);
    }

    if dropped > 0 {
        warn!(dropped, "dropped unmatched closing braces");
        repaired.push_str(&format!("/* restyle: removed {dropped} unmatched closing brace(s) */\n"));
    }
    if depth > 0 {
        warn!(open = depth, "closing unbalanced blocks");
        repaired.push_str(&format!("/* restyle: closed {depth} unbalanced block(s) */\n"));
        repaired.push_str(&"}".repeat(depth));
        repaired.push('\n');
    }
    repaired
}

/// Truncate at the last top-level rule boundary that fits, then mark it.
fn enforce_ceiling(document: String, header_len: usize, max_bytes: usize) -> String {
    if document.len() <= max_bytes {
        return document;
    }

    let budget = max_bytes.saturating_sub(TRUNCATED_MARKER.len());
    let mut cut = if header_len <= budget { header_len } else { 0 };
    let mut depth = 0usize;
    for (index, c) in document.char_indices() {
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

    warn!(
        size = document.len(),
        limit = max_bytes,
        kept = cut,
        "css document truncated"
    );
    let mut truncated = document[..cut].to_string();
    truncated.push_str(TRUNCATED_MARKER);
    truncated
}
