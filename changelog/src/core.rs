use crate::config::RewriteConfig;
use crate::error::ChangelogError;
use crate::locate::locate_section;
use crate::rewriter::{create_section_rewriter, normalize_headers};
use crate::types::{Result, RewriteOutcome};
use std::fs;
use std::path::{Path, PathBuf};

/// Rewrites `version`'s section of an in-memory changelog.
///
/// Locates the section, replaces or reformats it depending on the
/// configured mode, then normalizes the version's header everywhere in
/// the document.
///
/// # Errors
///
/// Returns `ChangelogError::VersionHeaderNotFound` if the document has no
/// header for the configured version. The input is left untouched.
pub fn rewrite_changelog(content: &str, config: &RewriteConfig) -> Result<RewriteOutcome> {
    let span = locate_section(content, &config.version, config.prev_version.as_deref())?;
    let original_section = span.text(content).to_string();

    let mode = config.mode();
    let rewritten = create_section_rewriter(&mode).rewrite(content, &span);

    Ok(RewriteOutcome {
        span,
        mode,
        original_section,
        content: normalize_headers(&rewritten, &config.version),
    })
}

/// Converts CRLF and lone CR line breaks to LF; headers are only matched with `\n`
#[must_use]
pub fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

/// A changelog loaded from disk
pub struct ChangelogFile {
    path: PathBuf,
    content: String,
}

impl ChangelogFile {
    /// Reads the whole changelog into memory
    ///
    /// # Errors
    /// Returns error if the file cannot be read
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(ChangelogError::ReadError)?;

        Ok(Self {
            path,
            content: normalize_line_endings(content),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Computes the rewritten changelog without touching the file
    ///
    /// # Errors
    /// See [`rewrite_changelog`]
    pub fn rewrite(&self, config: &RewriteConfig) -> Result<RewriteOutcome> {
        rewrite_changelog(&self.content, config)
    }

    /// Overwrites the file with the rewritten changelog
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn save(&mut self, outcome: &RewriteOutcome) -> Result<()> {
        fs::write(&self.path, &outcome.content).map_err(ChangelogError::WriteError)?;
        self.content.clone_from(&outcome.content);
        Ok(())
    }
}

/// Reads the configured changelog, rewrites the version's section and
/// writes the result back.
///
/// The file is written only if the rewrite succeeds.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if the
/// version's header is missing from the changelog.
pub fn overwrite_changelog_section(config: &RewriteConfig) -> Result<RewriteOutcome> {
    let mut changelog = ChangelogFile::open(&config.changelog_path)?;
    let outcome = changelog.rewrite(config)?;
    changelog.save(&outcome)?;

    Ok(outcome)
}
