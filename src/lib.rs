//! Markdown structural validator
//!
//! A single-pass, line-oriented linter for Markdown documents.
//!
//! This library provides:
//! - Header, link, code block, list, image, emphasis and table checks
//! - Typed issues with line numbers, severities and suggested fixes
//! - An injectable reachability probe for external URLs
//! - A serializable report consumed by the CLI and other front ends

pub mod checkers;
pub mod config;
pub mod document;
pub mod issue;
pub mod probe;
pub mod validator;

// Re-exports for clean public API
pub use config::Config;
pub use document::Document;
pub use issue::{Issue, IssueType, Severity, ValidationReport};
pub use probe::{HttpProbe, LinkProbe, ProbeOutcome};
pub use validator::{validate_file, validate_text};
