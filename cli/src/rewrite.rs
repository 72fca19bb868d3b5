use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::{ChangelogFile, RewriteConfig, RewriteOutcome, header_candidates};

const SECTION_PREVIEW_CHARS: usize = 200;

pub fn execute(cli: &Cli) -> Result<()> {
    let config = cli.rewrite_config()?;
    let path = config.changelog_path.display().to_string();

    let mut progress = ProgressTracker::new("Changelog Rewrite").with_steps([
        format!("Reading {path}"),
        format!("Rewriting section for {}", config.version),
        format!("Writing {path}"),
    ]);

    ui::info_message(&format!("latest version: {}", config.version));
    ui::info_message(&format!(
        "prev version: {}",
        config.prev_version.as_deref().unwrap_or("(none, section runs to end of file)")
    ));
    ui::info_message(&format!("mode: {}", config.mode().name()));
    if cli.verbose {
        report_patterns(&config);
    }

    progress.start_step();
    let mut changelog = ChangelogFile::open(&config.changelog_path)
        .map_err(|e| CliError::from(e).with_context(format!("Failed to open {path}")))?;
    progress.complete_step();

    progress.start_step();
    let outcome = changelog
        .rewrite(&config)
        .map_err(|e| CliError::from(e).with_context(format!("Failed to rewrite {path}")))?;
    if cli.verbose {
        report_outcome(&outcome);
    }
    if !outcome.changed(changelog.content()) {
        ui::warning_message("Section is already up to date, changelog content is unchanged");
    }
    progress.complete_step();

    if cli.print {
        ui::rule_block(&outcome.content);
    }

    progress.start_step();
    changelog
        .save(&outcome)
        .map_err(|e| CliError::from(e).with_context(format!("Failed to save {path}")))?;
    progress.complete_step();

    progress.complete();
    ui::success_message(&format!("{path} updated successfully!"));

    Ok(())
}

fn report_patterns(config: &RewriteConfig) {
    ui::detail(
        "Looking for version patterns",
        &format!("{:?}", header_candidates(&config.version)),
    );
    if let Some(prev) = &config.prev_version {
        ui::detail(
            "Looking for prev version patterns",
            &format!("{:?}", header_candidates(prev)),
        );
    }
}

fn report_outcome(outcome: &RewriteOutcome) {
    let span = &outcome.span;

    ui::detail(
        "Found current version",
        &format!(
            "{:?} ({} header) at index {}",
            span.current.pattern, span.current.style, span.current.offset
        ),
    );
    match &span.previous {
        Some(prev) => ui::detail(
            "Found previous version boundary",
            &format!("{:?} ({} header) at index {}", prev.pattern, prev.style, prev.offset),
        ),
        None => ui::detail("Previous version boundary", "end of file"),
    }
    ui::detail(
        "Content section",
        &format!("from {} to {}", span.start, span.end),
    );

    let preview: String = outcome
        .original_section
        .chars()
        .take(SECTION_PREVIEW_CHARS)
        .collect();
    ui::detail("Section content (first 200 chars)", &format!("{preview:?}"));
}
