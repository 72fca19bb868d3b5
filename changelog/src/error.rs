use thiserror::Error;

/// Errors that can occur when rewriting a changelog section
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("Failed to write changelog file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("Version is required and must not be empty")]
    MissingVersion,

    #[error("Could not find any version header for {version} (tried {patterns:?})")]
    VersionHeaderNotFound {
        version: String,
        patterns: Vec<String>,
        preview: String,
    },

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Returns true when the current version's header was not found,
    /// looking through any context wrappers.
    #[must_use]
    pub fn is_header_not_found(&self) -> bool {
        match self {
            Self::VersionHeaderNotFound { .. } => true,
            Self::WithContext(_, err) => err.is_header_not_found(),
            _ => false,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("Failed to read changelog: {e}"),
            Self::WriteError(e) => format!("Failed to write changelog: {e}"),
            Self::MissingVersion => "VERSION must be set to a non-empty value".to_string(),
            Self::VersionHeaderNotFound {
                version,
                patterns,
                preview,
            } => format!(
                "Could not find any version pattern for {version}\nTried: {patterns:?}\nFirst 500 chars of changelog:\n{preview}"
            ),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
