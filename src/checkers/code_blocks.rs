//! Fenced code block checks
//!
//! Tracks fence open/close state across the whole document. A block opened
//! with one fence character only closes on a fence of the same character
//! with at least as many repetitions; any other fence line inside the block
//! is inert (nesting is not supported). Outside a block, lines with an odd
//! number of non-fence backticks are flagged as unmatched inline code.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(`{3,}|~{3,})(\w*)$").expect("fence pattern"));

#[derive(Debug, Default)]
struct FenceState {
    in_block: bool,
    start_line: usize,
    fence_char: char,
    fence_count: usize,
}

pub fn check(doc: &Document, sink: &mut IssueSink) {
    let mut state = FenceState::default();

    for (line_number, line) in doc.numbered_lines() {
        if let Some(caps) = FENCE_RE.captures(line.trim()) {
            let fence = caps.get(1).map_or("", |m| m.as_str());
            let current_char = fence.chars().next().unwrap_or('`');
            let current_count = fence.len();

            if !state.in_block {
                state = FenceState {
                    in_block: true,
                    start_line: line_number,
                    fence_char: current_char,
                    fence_count: current_count,
                };
            } else if current_char == state.fence_char && current_count >= state.fence_count {
                state.in_block = false;
            }
        }

        if !state.in_block {
            let backticks = line.matches('`').count();
            let triples = line.matches("```").count();
            let singles = backticks.saturating_sub(triples * 3);
            if singles % 2 != 0 && !line.trim().starts_with("```") {
                sink.push(Issue::new(
                    line_number,
                    IssueType::UnmatchedBackticks,
                    "Possible unmatched inline code backticks",
                    line,
                    "Ensure backticks are properly paired",
                ));
            }
        }
    }

    if state.in_block {
        let fence: String = std::iter::repeat(state.fence_char)
            .take(state.fence_count)
            .collect();
        sink.push(Issue::new(
            state.start_line,
            IssueType::UnclosedCodeBlock,
            "Unclosed fenced code block",
            doc.line(state.start_line).unwrap_or(""),
            format!("Add closing fence: {}", fence),
        ));
    }
}
