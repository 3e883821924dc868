//! Image checks
//!
//! Validates `![alt](url)` syntax: alt text present, URL non-empty, and
//! local image files actually on disk relative to the document.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::issue::{Issue, IssueSink, IssueType};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("image pattern"));

const REMOTE_PREFIXES: [&str; 3] = ["http://", "https://", "data:"];

pub fn check(doc: &Document, sink: &mut IssueSink) {
    for (line_number, line) in doc.numbered_lines() {
        for caps in IMAGE_RE.captures_iter(line) {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let alt = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str()).trim();

            if alt.is_empty() {
                sink.push(Issue::new(
                    line_number,
                    IssueType::MissingAltText,
                    "Image missing alt text (accessibility issue)",
                    whole,
                    format!("![descriptive alt text]({})", url),
                ));
            }

            if url.is_empty() {
                sink.push(Issue::new(
                    line_number,
                    IssueType::EmptyImageUrl,
                    "Empty image URL",
                    whole,
                    format!("![{}](path/to/image.png)", alt),
                ));
                continue;
            }

            if !REMOTE_PREFIXES.iter().any(|p| url.starts_with(p)) {
                let img_path = doc.base_dir().join(url);
                if !img_path.exists() {
                    sink.push(Issue::new(
                        line_number,
                        IssueType::MissingImage,
                        format!("Image file not found: {}", url),
                        whole,
                        format!("Add image at: {}", img_path.display()),
                    ));
                }
            }
        }
    }
}
