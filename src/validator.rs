//! Validation orchestrator
//!
//! Loads the document, runs every checker in a fixed order against the same
//! line sequence and issue sink, then sorts the findings by line number
//! into the final report. Checker order is the tie-break for issues on the
//! same line, so it is part of the contract.

use std::path::Path;

use crate::checkers::{self, UrlClassifier};
use crate::document::Document;
use crate::issue::{IssueSink, ValidationReport};
use crate::probe::LinkProbe;

/// Validate a Markdown file on disk
///
/// Never fails: an unreadable file produces a report with one file-level
/// error issue and no checker runs.
pub fn validate_file(path: &Path, probe: Option<&dyn LinkProbe>) -> ValidationReport {
    let file_path = path.display().to_string();
    match Document::load(path) {
        Ok(doc) => run_checkers(&file_path, &doc, probe),
        Err(issue) => ValidationReport::from_issues(file_path, vec![issue]),
    }
}

/// Validate in-memory text, resolving relative references against `base_dir`
pub fn validate_text(text: &str, base_dir: &Path, probe: Option<&dyn LinkProbe>) -> ValidationReport {
    let doc = Document::from_text(text, base_dir);
    run_checkers("<text>", &doc, probe)
}

fn run_checkers(file_path: &str, doc: &Document, probe: Option<&dyn LinkProbe>) -> ValidationReport {
    let mut sink = IssueSink::new();
    let classifier = UrlClassifier::new(doc.base_dir(), probe);

    checkers::headers::check(doc, &mut sink);
    checkers::links::check(doc, &classifier, &mut sink);
    checkers::code_blocks::check(doc, &mut sink);
    checkers::lists::check(doc, &mut sink);
    checkers::images::check(doc, &mut sink);
    checkers::emphasis::check(doc, &mut sink);
    checkers::tables::check(doc, &mut sink);

    log::debug!("{}: {} raw issues collected", file_path, sink.len());
    ValidationReport::from_issues(file_path, sink.finish())
}
