//! Shared fixtures for the changelog integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A changelog as produced by `changeset version`, with bare headers and
/// the blank line plus `### ... Changes` preamble under each version.
pub const CHANGESET_CHANGELOG: &str = "# kilo-code

## 4.2.0

### Minor Changes

- Add the thing
- Fix the other thing

## 4.1.0

### Patch Changes

- Older fix
";

/// Writes `content` as `CHANGELOG.md` inside `dir` and returns its path
pub fn write_changelog(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_changelog() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_changelog(temp_dir.path(), CHANGESET_CHANGELOG).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), CHANGESET_CHANGELOG);
    }
}
