//! The file operations behind `getFile`, `writeFile` and `listFiles`.
//!
//! Each operation returns an explicit `OpResult`; failures never escape as
//! panics and are turned into error replies by the router.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{OpError, OpResult};
use crate::message::{FileContents, FileEntry, Listing, WriteReceipt};
use crate::store::FileStore;

/// MIME type reported when the extension is unknown.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Read a whole file and return it base64-encoded with its metadata.
pub fn get_file<S: FileStore + ?Sized>(store: &S, path: &str) -> OpResult<FileContents> {
    let target = Path::new(path);
    if !store.exists(target) {
        return Err(OpError::NotFound {
            what: "File",
            path: path.to_string(),
        });
    }

    let contents = store
        .read(target)
        .map_err(|err| OpError::from_io(path, err))?;

    Ok(FileContents {
        data: STANDARD.encode(&contents),
        filename: file_name(target),
        mime_type: mime_type(target),
        size: contents.len() as u64,
    })
}

/// Decode `data` and write it to `path`, creating parent directories.
///
/// The file is truncated and rewritten in place. There is no temporary file
/// and rename, so a crash mid-write can leave a partial file behind.
pub fn write_file<S: FileStore + ?Sized>(
    store: &S,
    path: &str,
    data: &str,
) -> OpResult<WriteReceipt> {
    let contents = STANDARD.decode(data)?;
    let target = Path::new(path);

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        store
            .create_dir_all(parent)
            .map_err(|err| OpError::from_io(parent.to_string_lossy(), err))?;
    }

    store
        .write(target, &contents)
        .map_err(|err| OpError::from_io(path, err))?;

    Ok(WriteReceipt {
        success: true,
        path: path.to_string(),
        size: contents.len() as u64,
    })
}

/// List the regular files in `directory` whose names match `pattern`.
///
/// Entries come back in enumeration order; callers sort if they care.
pub fn list_files<S: FileStore + ?Sized>(
    store: &S,
    directory: &str,
    pattern: &str,
) -> OpResult<Listing> {
    let root = Path::new(directory);
    if !store.exists(root) {
        return Err(OpError::NotFound {
            what: "Directory",
            path: directory.to_string(),
        });
    }

    // Only `pattern` is a glob; the directory itself is matched literally.
    let search = Path::new(&glob::Pattern::escape(directory)).join(single_level(pattern));
    let search = search.to_string_lossy();
    let matches = store
        .expand(&search)
        .map_err(|source| OpError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

    let mut files = Vec::with_capacity(matches.len());
    for path in matches {
        let metadata = match store.metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "skipping entry without metadata"
                );
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        files.push(FileEntry {
            path: path.to_string_lossy().into_owned(),
            name: file_name(&path),
            size: metadata.len(),
            modified: metadata.modified().map(epoch_seconds).unwrap_or_default(),
        });
    }

    Ok(Listing::from(files))
}

/// Collapse runs of `*` so `**` matches like `*` within one path component
/// instead of recursing into subdirectories.
fn single_level(pattern: &str) -> String {
    let mut collapsed = String::with_capacity(pattern.len());
    let mut previous = None;
    for c in pattern.chars() {
        if !(c == '*' && previous == Some('*')) {
            collapsed.push(c);
        }
        previous = Some(c);
    }
    collapsed
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string()
}

fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}
