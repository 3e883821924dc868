//! Emphasis checks
//!
//! Flags lines with an odd number of `**` or `__` bold markers. Inline
//! code spans are stripped first so code containing asterisks or
//! underscores does not trip the count; fence lines are skipped outright.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static CODE_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("code span pattern"));

pub fn check(doc: &Document, sink: &mut IssueSink) {
    for (line_number, line) in doc.numbered_lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            continue;
        }

        let without_code = CODE_SPAN_RE.replace_all(line, "");

        for marker in ["**", "__"] {
            if without_code.matches(marker).count() % 2 != 0 {
                sink.push(Issue::new(
                    line_number,
                    IssueType::UnmatchedBold,
                    format!("Possibly unmatched bold markers ({})", marker),
                    line,
                    format!("Ensure {} markers are properly paired", marker),
                ));
            }
        }
    }
}
