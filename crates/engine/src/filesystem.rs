use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use ignore::{DirEntry, WalkBuilder};
use std::path::Path;

/// Visitor decision for a single walked entry.
#[derive(Debug)]
pub enum Visit {
    Continue,
    /// Stop the whole traversal and surface the error to the caller.
    Abort(EngineError),
}

/// Sequential depth-first walk in lexical order within each directory.
///
/// Every entry is visited exactly once, the root and directories included.
/// Hidden files and ignore files are not filtered. Directories named in
/// `options.exclude_dirs` are neither yielded nor entered.
///
/// # Errors
/// Any error the walker yields for an entry aborts the traversal and is
/// returned as [`EngineError::Walk`]. The error of a [`Visit::Abort`] is
/// returned unchanged.
pub fn walk<F>(options: &WalkOptions, mut visit: F) -> Result<()>
where
    F: FnMut(&DirEntry) -> Visit,
{
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    if !options.exclude_dirs.is_empty() {
        let exclude_dirs = options.exclude_dirs.clone();
        builder.filter_entry(move |entry| {
            let excluded = entry.depth() > 0
                && is_dir(entry)
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| exclude_dirs.iter().any(|d| d == name));
            if excluded {
                log::debug!("skipping subtree {}", entry.path().display());
            }
            !excluded
        });
    }

    for item in builder.build() {
        if let Visit::Abort(err) = visit(&item?) {
            return Err(err);
        }
    }

    Ok(())
}

pub fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Containing directory of `path`, relative to `root`, `/`-separated.
/// The root directory itself is `.`.
pub fn containing_dir(root: &Path, path: &Path) -> String {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let Ok(rel) = parent.strip_prefix(root) else {
        // root is a file: report its parent as given
        return if parent.as_os_str().is_empty() {
            ".".to_string()
        } else {
            parent.to_string_lossy().into_owned()
        };
    };
    let joined = rel
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
