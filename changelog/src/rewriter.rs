use crate::patterns::{HeaderStyle, canonical_header};
use crate::types::{RewriteMode, SectionSpan};

/// Lines of changeset boilerplate preceding the notes, e.g. a blank line
/// followed by `### Patch Changes`
pub const CHANGESET_PREAMBLE_LINES: usize = 2;

// --- Traits ---

pub trait SectionRewriter: Send + Sync {
    /// Produces the text that takes the place of the section
    fn rewrite_section(&self, section: &str) -> String;

    /// Splices the rewritten section back into `content`
    fn rewrite(&self, content: &str, span: &SectionSpan) -> String {
        let replacement = self.rewrite_section(span.text(content));
        let mut rewritten =
            String::with_capacity(content.len() - (span.end - span.start) + replacement.len());

        rewritten.push_str(&content[..span.start]);
        rewritten.push_str(&replacement);
        rewritten.push_str(&content[span.end..]);
        rewritten
    }
}

// --- Rewriters ---

/// Swaps the section for externally supplied notes
#[derive(Debug, Clone)]
pub struct ReplaceRewriter {
    pub new_content: String,
}

impl SectionRewriter for ReplaceRewriter {
    fn rewrite_section(&self, _section: &str) -> String {
        format!("{}\n", self.new_content)
    }
}

/// Strips the leading changeset preamble from the existing notes
#[derive(Debug, Clone)]
pub struct ReformatRewriter {
    pub dropped_lines: usize,
}

impl Default for ReformatRewriter {
    fn default() -> Self {
        Self {
            dropped_lines: CHANGESET_PREAMBLE_LINES,
        }
    }
}

impl SectionRewriter for ReformatRewriter {
    fn rewrite_section(&self, section: &str) -> String {
        // Shorter sections simply lose whatever lines they have.
        section
            .split('\n')
            .skip(self.dropped_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[must_use]
pub fn create_section_rewriter(mode: &RewriteMode) -> Box<dyn SectionRewriter> {
    match mode {
        RewriteMode::Replace(new_content) => Box::new(ReplaceRewriter {
            new_content: new_content.clone(),
        }),
        RewriteMode::Reformat => Box::new(ReformatRewriter::default()),
    }
}

/// Rewrites every header for `version` in the document to `## [v{version}]`.
///
/// The substitution is global and literal: any text matching one of the
/// header forms is rewritten, inside the section or not.
#[must_use]
pub fn normalize_headers(content: &str, version: &str) -> String {
    let canonical = canonical_header(version);

    HeaderStyle::ALL
        .into_iter()
        .fold(content.to_string(), |text, style| {
            text.replace(&style.header(version), &canonical)
        })
}
