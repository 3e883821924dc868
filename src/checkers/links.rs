//! Link and reference checks
//!
//! Two passes: the first collects reference definitions (`[id]: target`)
//! into a case-insensitive table, the second validates inline links against
//! the URL classifier and reference-style links against the table. Later
//! definitions of the same id overwrite earlier ones.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::checkers::url::UrlClassifier;
use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static INLINE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("inline link pattern"));
static REF_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\[([^\]]*)\]").expect("reference link pattern"));
static REF_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]:\s*(.+)$").expect("reference definition pattern"));

/// Lowercased reference id -> (definition line, target URL)
type ReferenceTable = HashMap<String, (usize, String)>;

pub fn check(doc: &Document, classifier: &UrlClassifier<'_>, sink: &mut IssueSink) {
    let references = collect_definitions(doc);
    log::debug!("collected {} reference definitions", references.len());

    for (line_number, line) in doc.numbered_lines() {
        for caps in INLINE_LINK_RE.captures_iter(line) {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let text = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str()).trim();

            if text.is_empty() {
                sink.push(Issue::new(
                    line_number,
                    IssueType::EmptyLinkText,
                    "Empty link text",
                    whole,
                    format!("[descriptive text]({})", url),
                ));
            }

            if url.is_empty() {
                sink.push(Issue::new(
                    line_number,
                    IssueType::EmptyUrl,
                    "Empty URL in link",
                    whole,
                    format!("[{}](https://example.com)", text),
                ));
                continue;
            }

            classifier.classify(line_number, url, whole, sink);
        }

        for caps in REF_LINK_RE.captures_iter(line) {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            // An empty second bracket means the link text doubles as the id
            let id = match caps.get(2).map(|m| m.as_str()) {
                Some(id) if !id.is_empty() => id.to_lowercase(),
                _ => caps.get(1).map_or("", |m| m.as_str()).to_lowercase(),
            };
            if !references.contains_key(&id) {
                sink.push(Issue::new(
                    line_number,
                    IssueType::UndefinedReference,
                    format!("Undefined link reference: [{}]", id),
                    whole,
                    format!("Add reference definition: [{}]: https://example.com", id),
                ));
            }
        }
    }
}

/// First pass over the document: gather `[id]: target` lines
fn collect_definitions(doc: &Document) -> ReferenceTable {
    let mut references = ReferenceTable::new();
    for (line_number, line) in doc.numbered_lines() {
        if let Some(caps) = REF_DEF_RE.captures(line) {
            let id = caps.get(1).map_or("", |m| m.as_str()).to_lowercase();
            let target = caps.get(2).map_or("", |m| m.as_str()).to_string();
            references.insert(id, (line_number, target));
        }
    }
    references
}
