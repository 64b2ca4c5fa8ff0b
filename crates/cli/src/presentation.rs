// crates/cli/src/presentation.rs
use owner_lines_engine::collector::{FileKind, SkippedFile};
use std::io::{self, Write};
use std::path::Path;

pub fn write_walking<W: Write>(out: &mut W, root: &Path) -> io::Result<()> {
    writeln!(out, "Walking {}", root.display())
}

/// One line for a matched file that contributed nothing.
pub fn write_skipped<W: Write>(out: &mut W, skipped: &SkippedFile) -> io::Result<()> {
    match skipped.kind {
        FileKind::Source => writeln!(
            out,
            "couldn't count {}: {}",
            skipped.path.display(),
            skipped.error
        ),
        FileKind::Manifest => writeln!(
            out,
            "couldn't parse owners {}: {}",
            skipped.path.display(),
            skipped.error
        ),
        FileKind::Other => Ok(()),
    }
}

pub fn write_document<W: Write>(out: &mut W, json: &[u8]) -> io::Result<()> {
    out.write_all(json)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use owner_lines_engine::error::EngineError;
    use std::path::PathBuf;

    fn skipped(path: &str, kind: FileKind) -> SkippedFile {
        SkippedFile {
            path: PathBuf::from(path),
            kind,
            error: EngineError::FileRead {
                path: PathBuf::from(path),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
        }
    }

    #[test]
    fn test_skip_messages_name_the_file() {
        let mut out = Vec::new();
        write_skipped(&mut out, &skipped("a/main.go", FileKind::Source)).unwrap();
        write_skipped(&mut out, &skipped("b/owners.txt", FileKind::Manifest)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("couldn't count a/main.go: "));
        assert!(lines[1].starts_with("couldn't parse owners b/owners.txt: "));
    }

    #[test]
    fn test_walking_line() {
        let mut out = Vec::new();
        write_walking(&mut out, Path::new("repo")).unwrap();
        assert_eq!(out, b"Walking repo\n");
    }
}
