// crates/engine/src/lib.rs
pub mod collector;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod report;

use crate::collector::{Collector, SkippedFile};
use crate::config::Config;
use crate::error::Result;
use crate::filesystem::Visit;
use crate::report::Report;

/// Outcome of one walk: the joined report plus the matched files that could
/// not be read.
#[derive(Debug)]
pub struct RunResult {
    pub report: Report,
    pub skipped: Vec<SkippedFile>,
}

/// Walk `config.walk.root`, attribute every file, and build the report.
///
/// # Errors
///
/// Returns an error for any filesystem error met while visiting an entry; the
/// walk stops there and no report is built. Read failures on individual
/// source files or manifests are not errors; they end up in
/// `RunResult::skipped`.
pub fn run(config: &Config) -> Result<RunResult> {
    run_with(config, |_| {})
}

/// Same as [`run`], calling `on_skip` for each skipped file as soon as the
/// walk reaches it, so skips are seen even when the walk fails later.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<F>(config: &Config, mut on_skip: F) -> Result<RunResult>
where
    F: FnMut(&SkippedFile),
{
    let walk = &config.walk;
    let mut collector = Collector::new(&walk.root, &config.rules);

    filesystem::walk(walk, |entry| {
        if !filesystem::is_dir(entry)
            && let Some(skipped) = collector.collect_file(entry.path())
        {
            on_skip(skipped);
        }
        Visit::Continue
    })?;

    log::debug!(
        "walk finished: {} directories with source, {} owners, {} skipped",
        collector.tally.len(),
        collector.owners.len(),
        collector.skipped.len()
    );

    let report = Report::build(&collector.tally, &collector.owners);
    Ok(RunResult {
        report,
        skipped: collector.skipped,
    })
}
