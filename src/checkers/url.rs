//! URL classification
//!
//! Sorts a link target into one of three categories and validates each:
//! in-document anchors (accepted as-is), relative filesystem paths (must
//! exist under the document's base directory) and external URLs (must have
//! a scheme and host; optionally probed for reachability).

use std::path::Path;

use url::Url;

use crate::issue::{Issue, IssueSink, IssueType};
use crate::probe::{LinkProbe, ProbeOutcome};

const EXTERNAL_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

/// Classifies URLs found by the link checker, resolving relative paths
/// against the document's base directory and delegating reachability to an
/// optional probe.
pub struct UrlClassifier<'a> {
    base_dir: &'a Path,
    probe: Option<&'a dyn LinkProbe>,
}

impl<'a> UrlClassifier<'a> {
    pub fn new(base_dir: &'a Path, probe: Option<&'a dyn LinkProbe>) -> Self {
        Self { base_dir, probe }
    }

    /// Validate one URL, appending any finding to the sink. `original` is
    /// the full matched link text, reported as context.
    pub fn classify(&self, line_number: usize, url: &str, original: &str, sink: &mut IssueSink) {
        // Anchor links: accept without verifying the target heading exists.
        // Heading-id derivation differs across dialects, so checking would
        // guess more than it would catch.
        if url.starts_with('#') {
            return;
        }

        if !EXTERNAL_SCHEMES.iter().any(|s| url.starts_with(s)) {
            let path_part = url.split('#').next().unwrap_or(url);
            let full_path = self.base_dir.join(path_part);
            if !full_path.exists() {
                sink.push(Issue::new(
                    line_number,
                    IssueType::BrokenLocalLink,
                    format!("Local file not found: {}", url),
                    original,
                    format!("Verify file exists at: {}", full_path.display()),
                ));
            }
            return;
        }

        let host_present = match Url::parse(url) {
            Ok(parsed) => parsed.host_str().is_some_and(|h| !h.is_empty()),
            Err(_) => false,
        };
        if !host_present {
            sink.push(Issue::new(
                line_number,
                IssueType::InvalidUrlFormat,
                format!("Invalid URL format: {}", url),
                original,
                format!("Use full URL with scheme: https://{}", url),
            ));
            return;
        }

        let Some(probe) = self.probe else {
            return;
        };
        match probe.head(url) {
            ProbeOutcome::HttpStatus(status) => {
                sink.push(Issue::new(
                    line_number,
                    IssueType::BrokenExternalLink,
                    format!("Broken link (HTTP {}): {}", status, url),
                    original,
                    "Update URL or remove the link",
                ));
            }
            ProbeOutcome::Timeout => {
                sink.push(Issue::new(
                    line_number,
                    IssueType::LinkTimeout,
                    format!("Link timed out: {}", url),
                    original,
                    "Verify URL is accessible",
                ));
            }
            // Transport failures describe the network, not the document
            ProbeOutcome::Reachable | ProbeOutcome::TransportError => {}
        }
    }
}
