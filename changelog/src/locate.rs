use crate::error::ChangelogError;
use crate::patterns::{HeaderStyle, header_candidates};
use crate::types::{HeaderMatch, Result, SectionSpan};

/// Number of characters of the changelog shown when no header matches
pub const PREVIEW_CHARS: usize = 500;

/// Finds the first header style for `version` present anywhere at or after `from`.
///
/// Styles are tried in priority order, so a bare header wins over a
/// bracketed one even if the bracketed one appears earlier in the text.
pub fn find_header(content: &str, version: &str, from: usize) -> Option<HeaderMatch> {
    let haystack = content.get(from..)?;

    HeaderStyle::ALL.into_iter().find_map(|style| {
        let pattern = style.pattern(version);
        haystack.find(&pattern).map(|pos| HeaderMatch {
            style,
            pattern,
            offset: from + pos,
        })
    })
}

/// Locates the header that opens `version`'s section.
///
/// # Errors
/// Returns `ChangelogError::VersionHeaderNotFound` with the patterns tried
/// and a preview of the start of the document when no header matches.
pub fn find_section_start(content: &str, version: &str) -> Result<HeaderMatch> {
    find_header(content, version, 0).ok_or_else(|| ChangelogError::VersionHeaderNotFound {
        version: version.to_string(),
        patterns: header_candidates(version).to_vec(),
        preview: content.chars().take(PREVIEW_CHARS).collect(),
    })
}

/// Finds where the section starting at `start` ends.
///
/// Returns the previous version's header when it appears at or after
/// `start`; otherwise the section runs to the end of the document.
pub fn find_section_end(
    content: &str,
    prev_version: Option<&str>,
    start: usize,
) -> (usize, Option<HeaderMatch>) {
    prev_version
        .and_then(|prev| find_header(content, prev, start))
        .map_or((content.len(), None), |header| (header.offset, Some(header)))
}

/// Locates the full span of `version`'s release notes
///
/// # Errors
/// Fails only when the current version's header cannot be found
pub fn locate_section(
    content: &str,
    version: &str,
    prev_version: Option<&str>,
) -> Result<SectionSpan> {
    let current = find_section_start(content, version)?;
    let start = current.end();
    let (end, previous) = find_section_end(content, prev_version, start);

    Ok(SectionSpan {
        start,
        end,
        current,
        previous,
    })
}
