use crate::error::ChangelogError;
use crate::patterns::HeaderStyle;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// A version header found in the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub style: HeaderStyle,
    /// The searched pattern, including its trailing line break
    pub pattern: String,
    /// Byte offset of the first character of the header
    pub offset: usize,
}

impl HeaderMatch {
    /// Byte offset just past the header's line break
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.pattern.len()
    }
}

/// Byte range of a version's release notes inside the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
    pub current: HeaderMatch,
    /// Header of the previous version, when one bounded the section
    pub previous: Option<HeaderMatch>,
}

impl SectionSpan {
    #[must_use]
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    #[must_use]
    pub fn extends_to_end(&self) -> bool {
        self.previous.is_none()
    }
}

/// How the located section gets rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteMode {
    /// Replace the whole section with the given content
    Replace(String),
    /// Drop the changeset preamble from the existing section
    Reformat,
}

impl RewriteMode {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Replace(_) => "replace",
            Self::Reformat => "reformat",
        }
    }
}

/// Result of a successful in-memory rewrite
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub span: SectionSpan,
    pub mode: RewriteMode,
    /// Section text as it was before the rewrite
    pub original_section: String,
    /// The full rewritten changelog
    pub content: String,
}

impl RewriteOutcome {
    /// Whether the rewritten document differs from the input
    #[must_use]
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}
