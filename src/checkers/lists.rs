//! List formatting checks
//!
//! Flags odd indentation between consecutive list items and empty items.
//! Blank lines do not break continuity, so loosely-spaced lists are still
//! tracked as one list.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+]|\d+[.)])\s+(.*)$").expect("list item pattern"));

pub fn check(doc: &Document, sink: &mut IssueSink) {
    let mut prev_was_list = false;

    for (line_number, line) in doc.numbered_lines() {
        let Some(caps) = LIST_ITEM_RE.captures(line) else {
            if !line.trim().is_empty() {
                prev_was_list = false;
            }
            continue;
        };
        let indent = caps.get(1).map_or(0, |m| m.as_str().len());
        let marker = caps.get(2).map_or("", |m| m.as_str());
        let content = caps.get(3).map_or("", |m| m.as_str());

        if prev_was_list && indent > 0 && indent % 2 != 0 && indent % 4 != 0 {
            sink.push(Issue::new(
                line_number,
                IssueType::InconsistentIndent,
                "Non-standard list indentation (use 2 or 4 spaces)",
                line,
                format!("{}{} {}", "  ".repeat(indent / 2), marker, content),
            ));
        }

        if content.trim().is_empty() {
            sink.push(Issue::new(
                line_number,
                IssueType::EmptyListItem,
                "Empty list item",
                line,
                "Add content or remove empty item",
            ));
        }

        prev_was_list = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Issue> {
        let doc = Document::from_text(text, ".");
        let mut sink = IssueSink::new();
        check(&doc, &mut sink);
        sink.finish()
    }

    #[test]
    fn even_indentation_is_clean() {
        assert!(run("- one\n  - nested\n    - deeper\n- two\n").is_empty());
    }

    #[test]
    fn odd_indentation_between_items_flagged() {
        let issues = run("- one\n   - nested\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::InconsistentIndent);
        assert_eq!(issues[0].line_number, 2);
        assert_eq!(issues[0].suggested_fix, "  - nested");
    }

    #[test]
    fn first_item_indent_not_flagged() {
        // Continuity requires a preceding list item
        assert!(run("   - floating item\n").is_empty());
    }

    #[test]
    fn empty_item_is_a_warning() {
        let issues = run("- one\n- \n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::EmptyListItem);
        assert_eq!(issues[0].line_number, 2);
    }

    #[test]
    fn blank_lines_keep_continuity() {
        let issues = run("- one\n\n   - nested\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::InconsistentIndent);
    }

    #[test]
    fn paragraph_resets_continuity() {
        assert!(run("- one\nparagraph text\n   - new list\n").is_empty());
    }

    #[test]
    fn ordered_markers_recognized() {
        let issues = run("1. one\n   3) \n");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].issue_type, IssueType::InconsistentIndent);
        assert_eq!(issues[1].issue_type, IssueType::EmptyListItem);
    }
}
