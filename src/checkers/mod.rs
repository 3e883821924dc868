//! Structural checkers
//!
//! Each checker performs one linear scan of the document's line sequence
//! and appends findings to the shared issue sink. Checkers never call each
//! other; the orchestrator in `validator` runs them in a fixed order.

pub mod code_blocks;
pub mod emphasis;
pub mod headers;
pub mod images;
pub mod links;
pub mod lists;
pub mod tables;
pub mod url;

pub use url::UrlClassifier;
