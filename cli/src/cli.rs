use changelog::{DEFAULT_CHANGELOG_PATH, RewriteConfig};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "changelog-rewrite")]
#[command(
    author,
    version,
    about = "Rewrite a version's release notes in a changelog"
)]
pub struct Cli {
    /// Path to the changelog to rewrite
    #[clap(short = 'p', long, env = "CHANGELOG_PATH", default_value = DEFAULT_CHANGELOG_PATH)]
    pub changelog_path: String,

    /// Version whose section should be rewritten
    #[clap(id = "release_version", long = "release-version", env = "VERSION", value_parser = NonEmptyStringValueParser::new())]
    pub version: String,

    /// Previous version, whose header ends the section (defaults to end of file)
    #[clap(long, env = "PREV_VERSION", default_value = "")]
    pub prev_version: String,

    /// Notes replacing the section; when empty the existing section is reformatted
    #[clap(long, env = "NEW_CONTENT", default_value = "", allow_hyphen_values = true)]
    pub new_content: String,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Print the rewritten changelog
    #[clap(long, default_value_t = false)]
    pub print: bool,
}

impl Cli {
    /// Builds the rewrite configuration from the parsed arguments
    pub fn rewrite_config(&self) -> Result<RewriteConfig> {
        Ok(RewriteConfig::new(self.version.as_str())?
            .with_changelog_path(&self.changelog_path)
            .with_prev_version(self.prev_version.as_str())
            .with_new_content(self.new_content.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog::RewriteMode;
    use std::path::PathBuf;

    fn cli(prev_version: &str, new_content: &str) -> Cli {
        Cli {
            changelog_path: "docs/CHANGELOG.md".to_string(),
            version: "1.2.0".to_string(),
            prev_version: prev_version.to_string(),
            new_content: new_content.to_string(),
            verbose: true,
            print: false,
        }
    }

    #[test]
    fn test_parse_explicit_flags() {
        let cli = Cli::try_parse_from([
            "changelog-rewrite",
            "--changelog-path",
            "CHANGES.md",
            "--release-version",
            "2.0.0",
            "--prev-version",
            "1.9.0",
            "--new-content",
            "- notes",
            "--print",
        ])
        .unwrap();

        assert_eq!(cli.changelog_path, "CHANGES.md");
        assert_eq!(cli.version, "2.0.0");
        assert_eq!(cli.prev_version, "1.9.0");
        assert_eq!(cli.new_content, "- notes");
        assert!(cli.print);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_new_content_may_start_with_hyphen() {
        let cli = Cli::try_parse_from([
            "changelog-rewrite",
            "--release-version",
            "2.0.0",
            "--new-content",
            "- Fixed the thing\n- Added the other",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.new_content, "- Fixed the thing\n- Added the other");
        assert!(cli.verbose);
    }

    #[test]
    fn test_empty_version_rejected() {
        let result = Cli::try_parse_from(["changelog-rewrite", "--release-version", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reformat_config() {
        let config = cli("", "").rewrite_config().unwrap();
        assert_eq!(config.changelog_path, PathBuf::from("docs/CHANGELOG.md"));
        assert_eq!(config.prev_version, None);
        assert_eq!(config.mode(), RewriteMode::Reformat);
    }

    #[test]
    fn test_replace_config() {
        let config = cli("1.1.0", "- did Z").rewrite_config().unwrap();
        assert_eq!(config.prev_version.as_deref(), Some("1.1.0"));
        assert_eq!(config.mode(), RewriteMode::Replace("- did Z".to_string()));
    }
}
