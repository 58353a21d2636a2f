//! Exact-length file reading
//!
//! A [`FileHandle`] captures a file's size before reading and guarantees that
//! the buffer it returns contains exactly that many bytes. A file that
//! shrinks (or grows) between the size check and the read fails loudly
//! instead of producing a buffer that silently disagrees with what the
//! caller was told.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::{ConvertError, ConvertResult};

/// A file selected for conversion, with its size captured at open time
///
/// The handle is cheap: no descriptor is held between [`FileHandle::open`]
/// and [`FileHandle::read`]. The descriptor opened during `read` is released
/// on every exit path by RAII drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
    size_bytes: u64,
}

impl FileHandle {
    /// Validates that `path` names an existing regular file and records its
    /// current size
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` if:
    /// - The path does not resolve (`NotFound`)
    /// - The path resolves to a directory or other non-regular file
    ///   (`NotAFile`)
    /// - Metadata cannot be read for permission reasons (`NotReadable`)
    pub fn open(path: &Path) -> ConvertResult<Self> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConvertError::NotFound(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                ConvertError::NotReadable(path.display().to_string())
            }
            _ => ConvertError::Io(e),
        })?;

        if !metadata.is_file() {
            return Err(ConvertError::NotAFile(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }

    /// Returns the path this handle was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file size recorded at open time
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Reads the entire file into memory
    ///
    /// The returned buffer always holds exactly [`Self::size_bytes`] bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` if:
    /// - The file vanished since `open` (`NotFound`) or permissions changed
    ///   (`NotReadable`)
    /// - The declared size does not fit in addressable memory
    ///   (`FileTooLarge`)
    /// - The byte count on disk no longer matches the declared size
    ///   (`IncompleteRead`)
    pub fn read(&self) -> ConvertResult<Vec<u8>> {
        let file = fs::File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ConvertError::NotFound(self.path.display().to_string())
            }
            std::io::ErrorKind::PermissionDenied => {
                ConvertError::NotReadable(self.path.display().to_string())
            }
            _ => ConvertError::Io(e),
        })?;

        let buffer = read_declared(file, self.size_bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = buffer.len(),
            "read file contents"
        );
        Ok(buffer)
    }
}

/// Reads `source` to end and verifies the byte count against `declared`
///
/// Both a short read (the file shrank) and a long read (the file grew) are
/// reported as `IncompleteRead`: the declared size is stale either way, and
/// the contract is an exact-length buffer or an error.
fn read_declared<R: Read>(mut source: R, declared: u64) -> ConvertResult<Vec<u8>> {
    let capacity =
        usize::try_from(declared).map_err(|_| ConvertError::FileTooLarge { size: declared })?;

    let mut buffer = Vec::with_capacity(capacity);
    source.read_to_end(&mut buffer)?;

    if buffer.len() as u64 != declared {
        return Err(ConvertError::IncompleteRead {
            expected: declared,
            actual: buffer.len() as u64,
        });
    }

    Ok(buffer)
}
