//! Reading raw notes text from a file or stdin, and atomic write-back.

use std::io::{self, Read, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while reading or writing a raw notes blob.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("notes file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl BlobError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => BlobError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => BlobError::PermissionDenied { path: path.into() },
            _ => BlobError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Where a raw notes blob comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobSource {
    Stdin,
    File(PathBuf),
}

impl BlobSource {
    /// Interprets a CLI `FILE` argument: absent or `-` means stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => BlobSource::File(path.to_path_buf()),
            _ => BlobSource::Stdin,
        }
    }

    /// Returns the file path, if the source is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            BlobSource::Stdin => None,
            BlobSource::File(path) => Some(path),
        }
    }
}

/// Reads the blob from its source.
///
/// With `missing_ok`, a file that does not exist yields `Ok(None)` so that
/// mutating commands can create it. A leading UTF-8 byte order mark is
/// stripped.
///
/// # Errors
///
/// Returns `BlobError::NotFound` if the file is missing and `missing_ok` is false.
/// Returns `BlobError::InvalidEncoding` if the bytes are not UTF-8.
pub fn read_blob(source: &BlobSource, missing_ok: bool) -> Result<Option<String>, BlobError> {
    match source {
        BlobSource::Stdin => read_blob_from(io::stdin().lock(), Path::new("<stdin>")).map(Some),
        BlobSource::File(path) => match std::fs::read(path) {
            Ok(bytes) => decode_bytes(bytes, path).map(Some),
            Err(e) if missing_ok && e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobError::from_io(path, e)),
        },
    }
}

/// Reads a blob from any reader. `label` names the source in errors.
pub fn read_blob_from<R: Read>(mut reader: R, label: &Path) -> Result<String, BlobError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| BlobError::from_io(label, e))?;
    decode_bytes(bytes, label)
}

fn decode_bytes(bytes: Vec<u8>, path: &Path) -> Result<String, BlobError> {
    let content = String::from_utf8(bytes).map_err(|e| BlobError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

/// Writes a blob to a file path atomically.
///
/// Uses a temporary file in the same directory and an atomic rename. A
/// trailing newline is added so the file reads well in an editor; the
/// decoder ignores it.
///
/// # Errors
///
/// Returns `BlobError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `BlobError::AtomicWrite` if the atomic rename fails.
pub fn write_blob(path: &Path, text: &str) -> Result<(), BlobError> {
    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return Err(BlobError::ParentNotFound { path: path.into() }),
    };

    if !parent.exists() {
        return Err(BlobError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| BlobError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(text.as_bytes())
        .and_then(|()| temp.write_all(b"\n"))
        .map_err(|e| BlobError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| BlobError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
