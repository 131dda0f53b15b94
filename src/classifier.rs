//! Per-file classification and line counting.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::aggregate::FileAnalysis;
use crate::error::StatsError;
use crate::languages::language_for_extension;

/// Identify the registered language of `file_path` from its extension, if any.
pub fn language_of(file_path: &Path) -> Option<&'static str> {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_for_extension)
}

/// Number of segments produced by splitting `content` on `\n`.
///
/// A trailing newline yields a trailing empty segment, and empty content counts as one line.
pub fn count_lines(content: &str) -> u64 {
    content.split('\n').count() as u64
}

/// Read and count a file already known to belong to `language`.
pub fn measure_file(file_path: &Path, language: &'static str) -> Result<FileAnalysis, StatsError> {
    let content = fs::read_to_string(file_path).map_err(|source| StatsError::FileReadFailed {
        path: file_path.to_path_buf(),
        source,
    })?;
    Ok(FileAnalysis {
        language,
        line_count: count_lines(&content),
    })
}

/// Classify and count one file.
///
/// Returns `None` for files with no registered extension, and for matched files
/// that cannot be read as UTF-8 text; the latter are reported as a warning.
pub fn analyze_file(file_path: &Path) -> Option<FileAnalysis> {
    let language = language_of(file_path)?;
    match measure_file(file_path, language) {
        Ok(analysis) => Some(analysis),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> io::Result<std::path::PathBuf> {
        let path = dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn test_count_lines_split_semantics() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("fn main(){}"), 1);
        assert_eq!(count_lines("x\ny\n"), 3);
        assert_eq!(count_lines("x\ny"), 2);
        assert_eq!(count_lines("\n\n"), 3);
        assert_eq!(count_lines("a\r\nb\r\n"), 3);
    }

    #[test]
    fn test_language_of_uses_last_extension() {
        assert_eq!(language_of(Path::new("src/main.rs")), Some("Rust"));
        assert_eq!(language_of(Path::new("archive.tar.py")), Some("Python"));
        assert_eq!(language_of(Path::new("types.d.ts")), Some("TypeScript"));
        assert_eq!(language_of(Path::new("App.swift")), Some("Swift"));
        assert_eq!(language_of(Path::new("init.lua")), Some("Lua"));
        assert_eq!(language_of(Path::new("Main.hs")), Some("Haskell"));
        assert_eq!(language_of(Path::new("index.js")), Some("JavaScript"));
        assert_eq!(language_of(Path::new("rs.backup")), None);
        assert_eq!(language_of(Path::new("Makefile")), None);
        assert_eq!(language_of(Path::new("c.txt")), None);
    }

    #[test]
    fn test_language_of_is_case_sensitive() {
        assert_eq!(language_of(Path::new("x.PY")), None);
        assert_eq!(language_of(Path::new("x.Rs")), None);
    }

    #[test]
    fn test_analyze_file_counts_lines() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let py = create_test_file(temp_dir.path(), "a.py", b"x\ny\n")?;
        let rs = create_test_file(temp_dir.path(), "b.rs", b"fn main(){}")?;
        let empty = create_test_file(temp_dir.path(), "empty.js", b"")?;

        assert_eq!(
            analyze_file(&py),
            Some(FileAnalysis {
                language: "Python",
                line_count: 3
            })
        );
        assert_eq!(
            analyze_file(&rs),
            Some(FileAnalysis {
                language: "Rust",
                line_count: 1
            })
        );
        assert_eq!(
            analyze_file(&empty),
            Some(FileAnalysis {
                language: "JavaScript",
                line_count: 1
            })
        );
        Ok(())
    }

    #[test]
    fn test_unmatched_file_is_not_read() {
        // The file does not exist; an unmatched extension must not touch the filesystem.
        assert_eq!(analyze_file(Path::new("/does/not/exist/c.txt")), None);
    }

    #[test]
    fn test_invalid_utf8_is_a_read_failure() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = create_test_file(temp_dir.path(), "bad.py", &[0x66, 0x6f, 0xff, 0xfe, b'\n'])?;

        match measure_file(&path, "Python") {
            Err(StatsError::FileReadFailed { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected FileReadFailed, got {other:?}"),
        }
        assert_eq!(analyze_file(&path), None);
        Ok(())
    }

    #[test]
    fn test_missing_matched_file_is_skipped() {
        let path = Path::new("/does/not/exist/gone.rs");
        assert!(matches!(
            measure_file(path, "Rust"),
            Err(StatsError::FileReadFailed { .. })
        ));
        assert_eq!(analyze_file(path), None);
    }
}
