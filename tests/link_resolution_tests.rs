//! Link, image and probe behavior against on-disk fixtures

use std::fs;
use std::path::Path;

use markdown_validator::issue::IssueType;
use markdown_validator::probe::{LinkProbe, ProbeOutcome};
use markdown_validator::validator::{validate_file, validate_text};

/// Probe double that records nothing and answers the same for every URL
struct FixedProbe(ProbeOutcome);

impl LinkProbe for FixedProbe {
    fn head(&self, _url: &str) -> ProbeOutcome {
        self.0
    }
}

#[test]
fn local_links_resolve_against_the_file_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("other.md"), "# Other\n").expect("fixture");
    let doc_path = dir.path().join("index.md");
    fs::write(
        &doc_path,
        "See [other](other.md) and [gone](missing.md).\n",
    )
    .expect("fixture");

    let report = validate_file(&doc_path, None);
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.issues[0].issue_type, IssueType::BrokenLocalLink);
    assert!(report.issues[0].description.contains("missing.md"));
}

#[test]
fn local_images_checked_for_existence() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("logo.png"), b"\x89PNG").expect("fixture");
    let text = "![logo](logo.png)\n![gone](missing.png)\n";

    let report = validate_text(text, dir.path(), None);
    // The inline-link scan also matches the bracket portion of image
    // syntax, so a missing image reports as both a broken local link and a
    // missing image; the link checker runs first.
    assert_eq!(report.total_issues, 2);
    assert_eq!(report.issues[0].issue_type, IssueType::BrokenLocalLink);
    assert_eq!(report.issues[1].issue_type, IssueType::MissingImage);
    assert!(report.issues.iter().all(|i| i.line_number == 2));
}

#[test]
fn undefined_reference_is_case_insensitive() {
    let text = "Read [the guide][GUIDE].\n\n[guide]: https://example.com/guide\n";
    let report = validate_text(text, Path::new("."), None);
    assert!(report.issues.is_empty());

    let text = "Read [the guide][guide].\n";
    let report = validate_text(text, Path::new("."), None);
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.issues[0].issue_type, IssueType::UndefinedReference);
    assert_eq!(report.issues[0].line_number, 1);
}

#[test]
fn probe_drives_external_link_issues() {
    let text = "[site](https://example.com/page)\n";

    let probe = FixedProbe(ProbeOutcome::HttpStatus(404));
    let report = validate_text(text, Path::new("."), Some(&probe));
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.issues[0].issue_type, IssueType::BrokenExternalLink);

    let probe = FixedProbe(ProbeOutcome::Timeout);
    let report = validate_text(text, Path::new("."), Some(&probe));
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.issues[0].issue_type, IssueType::LinkTimeout);

    let probe = FixedProbe(ProbeOutcome::TransportError);
    let report = validate_text(text, Path::new("."), Some(&probe));
    assert!(report.issues.is_empty());

    let probe = FixedProbe(ProbeOutcome::Reachable);
    let report = validate_text(text, Path::new("."), Some(&probe));
    assert!(report.issues.is_empty());
}

#[test]
fn without_probe_external_urls_only_format_checked() {
    let text = "[ok](https://example.com) [bad](http://)\n";
    let report = validate_text(text, Path::new("."), None);
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.issues[0].issue_type, IssueType::InvalidUrlFormat);
}

#[test]
fn anchors_never_probed_or_resolved() {
    struct PanicProbe;
    impl LinkProbe for PanicProbe {
        fn head(&self, url: &str) -> ProbeOutcome {
            panic!("anchor was probed: {}", url);
        }
    }

    let report = validate_text("[top](#top)\n", Path::new("/nonexistent"), Some(&PanicProbe));
    assert!(report.issues.is_empty());
}
