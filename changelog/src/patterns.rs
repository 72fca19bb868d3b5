use std::fmt;

/// The header styles a version section can be introduced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// `## 1.2.3`
    Bare,
    /// `## [1.2.3]`
    Bracketed,
    /// `## [v1.2.3]`
    VPrefixed,
}

impl HeaderStyle {
    /// All styles in the order they are searched for
    pub const ALL: [HeaderStyle; 3] = [Self::Bare, Self::Bracketed, Self::VPrefixed];

    /// Header text for `version` in this style, without a line break
    #[must_use]
    pub fn header(self, version: &str) -> String {
        match self {
            Self::Bare => format!("## {version}"),
            Self::Bracketed => format!("## [{version}]"),
            Self::VPrefixed => format!("## [v{version}]"),
        }
    }

    /// Header text followed by a line break, as searched for in the document
    #[must_use]
    pub fn pattern(self, version: &str) -> String {
        format!("{}\n", self.header(version))
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bare => "bare",
            Self::Bracketed => "bracketed",
            Self::VPrefixed => "v-prefixed",
        };
        f.write_str(name)
    }
}

/// The three header candidates for `version`, each ending in a line break
#[must_use]
pub fn header_candidates(version: &str) -> [String; 3] {
    HeaderStyle::ALL.map(|style| style.pattern(version))
}

/// The header form every rewritten changelog ends up with
#[must_use]
pub fn canonical_header(version: &str) -> String {
    HeaderStyle::VPrefixed.header(version)
}
