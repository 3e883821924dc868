//! Document loading
//!
//! Reads a Markdown file into an ordered line sequence and records the base
//! directory used to resolve relative links and image paths. Load failures
//! are reported as a file-level issue rather than an error return, so a
//! validation run always produces a result.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::issue::{Issue, IssueType};

/// An immutable, line-oriented view of a Markdown document
///
/// Lines are 1-indexed for reporting. The raw text is split on `\n`, so a
/// trailing newline yields a final empty line; issue line numbers line up
/// with what an editor shows.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
    base_dir: PathBuf,
}

impl Document {
    /// Load a document from disk, resolving the base directory from the
    /// file's parent. On failure the error is returned as a single
    /// file-level `Issue`.
    pub fn load(path: &Path) -> Result<Self, Issue> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Issue::new(
                    0,
                    IssueType::FileError,
                    format!("File not found: {}", path.display()),
                    "",
                    "Verify the file path is correct",
                ));
            }
            Err(err) => {
                return Err(Issue::new(
                    0,
                    IssueType::FileError,
                    format!("Error reading file: {}", err),
                    "",
                    "Check file permissions and encoding",
                ));
            }
        };

        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        log::debug!(
            "loaded {} ({} lines, base dir {})",
            path.display(),
            content.split('\n').count(),
            base_dir.display()
        );

        Ok(Self::from_text(&content, base_dir))
    }

    /// Build a document from in-memory text and an explicit base directory
    pub fn from_text(text: &str, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            base_dir: base_dir.into(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate lines with their 1-indexed line numbers
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    pub fn line(&self, number: usize) -> Option<&str> {
        self.lines.get(number.checked_sub(1)?).map(String::as_str)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
