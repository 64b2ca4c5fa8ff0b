//! Attribution of visited files: line tallies for source files and owner
//! lists for ownership manifests.

use crate::config::MatchRules;
use crate::error::{EngineError, Result};
use crate::filesystem::containing_dir;
use hashbrown::HashMap;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Source,
    Manifest,
    Other,
}

impl MatchRules {
    /// Source suffix wins over the manifest name, so a manifest name ending
    /// in the source suffix counts as source.
    pub fn classify(&self, file_name: &str) -> FileKind {
        if file_name.ends_with(&self.source_suffix) {
            FileKind::Source
        } else if file_name == self.manifest_name {
            FileKind::Manifest
        } else {
            FileKind::Other
        }
    }
}

/// Line counts summed per directory, non-recursive.
#[derive(Debug, Default, Clone)]
pub struct LineTally {
    counts: HashMap<String, u64>,
}

impl LineTally {
    pub fn add(&mut self, dir: &str, lines: u64) {
        *self.counts.entry_ref(dir).or_insert(0) += lines;
    }

    /// A directory without counted source files has zero lines.
    pub fn lines_in(&self, dir: &str) -> u64 {
        self.counts.get(dir).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Owner -> directories that declared the owner, in declaration order.
/// Duplicates are kept.
#[derive(Debug, Default, Clone)]
pub struct OwnershipMap {
    owners: BTreeMap<String, Vec<String>>,
}

impl OwnershipMap {
    pub fn record(&mut self, owner: String, dir: &str) {
        self.owners.entry(owner).or_default().push(dir.to_string());
    }

    pub fn dirs_of(&self, owner: &str) -> &[String] {
        self.owners.get(owner).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.owners.iter().map(|(o, dirs)| (o.as_str(), dirs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// A matched file whose content could not be read. It contributes nothing.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub kind: FileKind,
    pub error: EngineError,
}

/// Accumulates tallies and owners over a single walk.
#[derive(Debug)]
pub struct Collector<'a> {
    root: &'a Path,
    rules: &'a MatchRules,
    pub tally: LineTally,
    pub owners: OwnershipMap,
    pub skipped: Vec<SkippedFile>,
}

impl<'a> Collector<'a> {
    pub fn new(root: &'a Path, rules: &'a MatchRules) -> Self {
        Self {
            root,
            rules,
            tally: LineTally::default(),
            owners: OwnershipMap::default(),
            skipped: Vec::new(),
        }
    }

    /// Attribute one visited (non-directory) file. Returns the skip record
    /// when a matched file could not be read.
    pub fn collect_file(&mut self, path: &Path) -> Option<&SkippedFile> {
        let name = path.file_name()?;
        let kind = self.rules.classify(&name.to_string_lossy());
        if kind == FileKind::Other {
            return None;
        }

        let dir = containing_dir(self.root, path);
        let outcome = match kind {
            FileKind::Source => count_file_lines(path).map(|lines| {
                log::debug!("{}: {lines} lines", path.display());
                self.tally.add(&dir, lines);
            }),
            FileKind::Manifest => read_manifest(path).map(|owners| {
                log::debug!("{}: {} owners", path.display(), owners.len());
                for owner in owners {
                    self.owners.record(owner, &dir);
                }
            }),
            FileKind::Other => Ok(()),
        };

        let error = outcome.err()?;
        log::warn!("skipping {}: {error}", path.display());
        self.skipped.push(SkippedFile {
            path: path.to_path_buf(),
            kind,
            error,
        });
        self.skipped.last()
    }
}

/// Count newline-delimited lines. An unterminated final line counts.
///
/// # Errors
/// Propagates read failures from `reader`.
pub fn count_lines<R: BufRead>(reader: &mut R) -> std::io::Result<u64> {
    let mut lines = 0u64;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        last_byte = buf.last().copied();
        lines += bytecount::count(buf, b'\n') as u64;
        let len = buf.len();
        reader.consume(len);
    }

    // 末尾に改行がない場合の行カウント補正
    if last_byte.is_some_and(|b| b != b'\n') {
        lines += 1;
    }

    Ok(lines)
}

/// # Errors
/// Returns [`EngineError::FileRead`] when the file cannot be opened or read.
pub fn count_file_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    count_lines(&mut BufReader::new(file)).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Owner named on one manifest line, if any.
///
/// Blank lines and lines starting with `;`, `#` or `[` declare nothing.
/// Leading `*` then leading `@` characters are stripped from the owner.
pub fn parse_owner_line(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line).trim_matches(' ');
    if line.is_empty() || line.starts_with([';', '#', '[']) {
        return None;
    }
    Some(line.trim_start_matches('*').trim_start_matches('@'))
}

/// # Errors
/// Propagates read failures from `reader`.
pub fn read_owners<R: BufRead>(reader: &mut R) -> std::io::Result<Vec<String>> {
    let mut owners = Vec::new();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&line_buf);
        let line = text.strip_suffix('\n').unwrap_or(&*text);
        if let Some(owner) = parse_owner_line(line) {
            owners.push(owner.to_string());
        }
    }

    Ok(owners)
}

/// # Errors
/// Returns [`EngineError::FileRead`] when the manifest cannot be opened or read.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_owners(&mut BufReader::new(file)).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
