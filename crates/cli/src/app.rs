// crates/cli/src/app.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::presentation;
use std::io::Write;

/// Walk, report skipped files as they are met, then emit the JSON document.
///
/// Everything meant for the user's terminal goes to `out`. The document goes
/// to `out` too unless `config.output_path` is set.
///
/// # Errors
/// A walk failure, a serialization failure or a failed report write returns
/// before any document is emitted; skip messages printed up to that point
/// stay. Errors writing to `out` are [`AppError::Io`].
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let root = &config.walk.root;
    presentation::write_walking(out, root)?;

    let mut write_error = None;
    let walked = owner_lines_engine::run_with(config, |skipped| {
        if write_error.is_none()
            && let Err(e) = presentation::write_skipped(out, skipped)
        {
            write_error = Some(e);
        }
    });
    let result = walked.map_err(|source| AppError::Walk {
        root: root.clone(),
        source,
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    let json = result.report.to_json_vec().map_err(AppError::Serialize)?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &json).map_err(|source| AppError::WriteReport {
                path: path.clone(),
                source,
            })?;
            log::debug!("report written to {}", path.display());
        }
        None => presentation::write_document(out, &json)?,
    }

    Ok(())
}
