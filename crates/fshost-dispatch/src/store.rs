use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, PatternError};

/// File-system capability used by the request handlers.
///
/// Every call is blocking and owns any handle it opens for the duration of
/// the call only.
pub trait FileStore {
    /// Whether `path` exists, following symlinks.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file at `path` and write `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create `path` and every missing ancestor. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Expand a glob pattern into the paths that currently match it.
    fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>, PatternError>;

    /// Metadata for `path`, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<fs::Metadata>;
}

/// `FileStore` backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Glob options: case-sensitive, `*` never crosses a separator and never
    /// matches a leading dot.
    pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
        let paths = glob::glob_with(pattern, Self::MATCH_OPTIONS)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(err) => {
                    tracing::debug!(
                        path = %err.path().display(),
                        error = %err.error(),
                        "skipping unreadable entry"
                    );
                    None
                }
            })
            .collect();
        Ok(paths)
    }

    fn metadata(&self, path: &Path) -> io::Result<fs::Metadata> {
        fs::metadata(path)
    }
}
