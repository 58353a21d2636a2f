use std::path::Path;

use crate::reader::FileHandle;
use crate::{encoder, ConvertResult};

/// Converts a file's contents to Base64 text
///
/// Opens the file, reads it in full, and encodes the bytes. Decoding the
/// returned text reproduces the file's bytes exactly.
///
/// # Errors
///
/// Returns `ConvertError` if the path does not name a readable regular file
/// or the read does not match the file's declared size. Encoding itself
/// cannot fail.
pub fn convert_file(path: &Path) -> ConvertResult<String> {
    let handle = FileHandle::open(path)?;
    let bytes = handle.read()?;
    let encoded = encoder::encode(&bytes);

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoded_chars = encoded.len(),
        "converted file to Base64"
    );

    Ok(encoded)
}
