//! Issue model
//!
//! Typed findings produced by the checkers, plus the sink they accumulate
//! into and the report handed back to callers.

use serde::{Deserialize, Serialize};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must fix
    Error,
    /// Should fix
    Warning,
    /// Consider fixing
    Info,
}

/// Discriminant for every kind of issue the validator can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    FileError,
    HeaderFormat,
    EmptyHeader,
    HeaderHierarchy,
    TrailingHashes,
    EmptyLinkText,
    EmptyUrl,
    UndefinedReference,
    BrokenLocalLink,
    InvalidUrlFormat,
    BrokenExternalLink,
    LinkTimeout,
    UnmatchedBackticks,
    UnclosedCodeBlock,
    InconsistentIndent,
    EmptyListItem,
    MissingAltText,
    EmptyImageUrl,
    MissingImage,
    UnmatchedBold,
    TableColumnMismatch,
}

impl IssueType {
    /// Canonical severity for this issue type
    pub fn severity(self) -> Severity {
        use IssueType::*;
        match self {
            FileError | EmptyUrl | UndefinedReference | BrokenLocalLink | InvalidUrlFormat
            | BrokenExternalLink | UnclosedCodeBlock | EmptyImageUrl | MissingImage
            | TableColumnMismatch => Severity::Error,
            HeaderFormat | EmptyHeader | EmptyLinkText | LinkTimeout | UnmatchedBackticks
            | EmptyListItem | MissingAltText | UnmatchedBold => Severity::Warning,
            HeaderHierarchy | TrailingHashes | InconsistentIndent => Severity::Info,
        }
    }
}

/// A single validation finding
///
/// `line_number` is 1-indexed; 0 means the issue is file-level rather than
/// tied to a specific line (e.g. the file could not be read at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub line_number: usize,
    pub issue_type: IssueType,
    pub severity: Severity,
    pub description: String,
    pub original_text: String,
    pub suggested_fix: String,
}

impl Issue {
    /// Build an issue, deriving the severity from its type
    pub fn new(
        line_number: usize,
        issue_type: IssueType,
        description: impl Into<String>,
        original_text: impl Into<String>,
        suggested_fix: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            issue_type,
            severity: issue_type.severity(),
            description: description.into(),
            original_text: original_text.into(),
            suggested_fix: suggested_fix.into(),
        }
    }
}

/// Append-only accumulator shared by all checkers during one run
///
/// Issues are kept in insertion order until `finish`, which sorts them by
/// line number. The sort is stable, so checker execution order decides ties
/// on the same line.
#[derive(Debug, Default)]
pub struct IssueSink {
    issues: Vec<Issue>,
}

impl IssueSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Sort by line number and hand back the issue list
    pub fn finish(mut self) -> Vec<Issue> {
        self.issues.sort_by_key(|issue| issue.line_number);
        self.issues
    }
}

/// Structured result of one validation run
///
/// This is the sole contract the CLI, web and agent consumers depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub file_path: String,
    pub total_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub issues: Vec<Issue>,
    pub summary: String,
}

impl ValidationReport {
    /// Build a report from a sorted issue list, tallying per-severity counts
    pub fn from_issues(file_path: impl Into<String>, issues: Vec<Issue>) -> Self {
        let mut errors = 0;
        let mut warnings = 0;
        let mut info = 0;
        for issue in &issues {
            match issue.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => info += 1,
            }
        }
        let summary = format!(
            "Found {} errors, {} warnings, and {} info messages",
            errors, warnings, info
        );
        Self {
            file_path: file_path.into(),
            total_issues: issues.len(),
            errors,
            warnings,
            info,
            issues,
            summary,
        }
    }

    /// True when no error-severity issue was found
    pub fn is_valid(&self) -> bool {
        self.errors == 0
    }
}
