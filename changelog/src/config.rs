use std::path::PathBuf;

use crate::error::ChangelogError;
use crate::types::{Result, RewriteMode};

pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Everything a section rewrite needs, built once by the caller
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    pub changelog_path: PathBuf,
    pub version: String,
    pub prev_version: Option<String>,
    pub new_content: Option<String>,
}

impl RewriteConfig {
    /// Creates a config targeting `version` in `CHANGELOG.md`
    ///
    /// # Errors
    /// Returns `ChangelogError::MissingVersion` if `version` is empty
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(ChangelogError::MissingVersion);
        }

        Ok(Self {
            changelog_path: PathBuf::from(DEFAULT_CHANGELOG_PATH),
            version,
            prev_version: None,
            new_content: None,
        })
    }

    #[must_use]
    pub fn with_changelog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.changelog_path = path.into();
        self
    }

    /// An empty previous version means the section runs to the end of the document
    #[must_use]
    pub fn with_prev_version(mut self, prev_version: impl Into<String>) -> Self {
        self.prev_version = non_empty(prev_version.into());
        self
    }

    /// Empty content selects reformat mode
    #[must_use]
    pub fn with_new_content(mut self, new_content: impl Into<String>) -> Self {
        self.new_content = non_empty(new_content.into());
        self
    }

    #[must_use]
    pub fn mode(&self) -> RewriteMode {
        match &self.new_content {
            Some(content) => RewriteMode::Replace(content.clone()),
            None => RewriteMode::Reformat,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
