//! Table consistency checks
//!
//! The first pipe-delimited row after non-table context fixes the column
//! count for that table region; later rows with a different count are
//! errors unless they are pure separator rows. A pipe-free non-empty line
//! ends the region.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s|:-]+$").expect("separator row pattern"));

pub fn check(doc: &Document, sink: &mut IssueSink) {
    let mut in_table = false;
    let mut header_cols = 0usize;

    for (line_number, line) in doc.numbered_lines() {
        if line.contains('|') {
            let stripped = line.trim();
            if !(stripped.starts_with('|') || stripped.ends_with('|')) {
                continue;
            }
            let cols = column_count(stripped);

            if !in_table {
                in_table = true;
                header_cols = cols;
            } else if cols != header_cols && !SEPARATOR_RE.is_match(stripped) {
                sink.push(Issue::new(
                    line_number,
                    IssueType::TableColumnMismatch,
                    format!(
                        "Table has inconsistent columns (expected {}, found {})",
                        header_cols, cols
                    ),
                    line,
                    format!("Adjust to {} columns", header_cols),
                ));
            }
        } else if in_table && !line.trim().is_empty() {
            in_table = false;
        }
    }
}

/// Split on pipes, counting content segments and the empty segments a
/// leading or trailing pipe produces; whitespace-only interior cells are
/// not counted.
fn column_count(row: &str) -> usize {
    row.split('|')
        .filter(|cell| !cell.trim().is_empty() || cell.is_empty())
        .count()
}
