//! ATX header checks
//!
//! Validates heading spacing, non-empty heading text, level continuity and
//! trailing hashes. The level tracker updates after every heading line,
//! including ones that triggered issues.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s*(.*)$").expect("header pattern"));

pub fn check(doc: &Document, sink: &mut IssueSink) {
    let mut prev_level = 0usize;

    for (line_number, line) in doc.numbered_lines() {
        let Some(caps) = HEADER_RE.captures(line) else {
            continue;
        };
        let hashes = caps.get(1).map_or("", |m| m.as_str());
        // A run of 7+ hashes is not a heading; the pattern's bound stops at
        // six, so the run continues in the raw line. Checking the line (not
        // the text capture) keeps headings whose text begins with `#`.
        if line[hashes.len()..].starts_with('#') {
            continue;
        }
        let text = caps.get(2).map_or("", |m| m.as_str()).trim();
        let level = hashes.len();

        if line[hashes.len()..].chars().next() != Some(' ') && !text.is_empty() {
            sink.push(Issue::new(
                line_number,
                IssueType::HeaderFormat,
                "Missing space after header hashes",
                line,
                format!("{} {}", hashes, text),
            ));
        }

        if text.is_empty() {
            sink.push(Issue::new(
                line_number,
                IssueType::EmptyHeader,
                "Empty header text",
                line,
                "Add descriptive header text",
            ));
        }

        if prev_level > 0 && level > prev_level + 1 {
            sink.push(Issue::new(
                line_number,
                IssueType::HeaderHierarchy,
                format!("Header level skipped from H{} to H{}", prev_level, level),
                line,
                format!("{} {}", "#".repeat(prev_level + 1), text),
            ));
        }

        if text.ends_with('#') {
            let clean = text.trim_end_matches('#').trim_end();
            sink.push(Issue::new(
                line_number,
                IssueType::TrailingHashes,
                "Trailing hashes in header (not recommended)",
                line,
                format!("{} {}", hashes, clean),
            ));
        }

        prev_level = level;
    }
}
