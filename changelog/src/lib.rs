//! Locates a version's release notes in a changelog and either replaces
//! them with new content or strips the changeset preamble, normalizing the
//! version header to `## [v{version}]`.

pub mod config;
pub mod core;
pub mod error;
pub mod locate;
pub mod patterns;
pub mod rewriter;
pub mod types;

pub use config::{DEFAULT_CHANGELOG_PATH, RewriteConfig};
pub use crate::core::{
    ChangelogFile, normalize_line_endings, overwrite_changelog_section, rewrite_changelog,
};
pub use error::ChangelogError;
pub use patterns::{HeaderStyle, canonical_header, header_candidates};
pub use rewriter::normalize_headers;
pub use types::{HeaderMatch, Result, RewriteMode, RewriteOutcome, SectionSpan};
