//! clip64 core
//!
//! Conversion pipeline for clip64: read a file's raw bytes exactly, encode
//! them as Base64 text, and decide which file proceeds when several are
//! presented at once.
//!
//! ## Design Principles
//!
//! - Reads are exact-length or they fail: a buffer shorter (or longer) than
//!   the size reported at open time is an error, never a silent truncation
//! - Encoding is pure and infallible: RFC 4648 standard alphabet, `=`
//!   padding, no line wrapping
//! - Selection is an explicit outcome vocabulary, including the
//!   "no recognisable choice was made" case, so callers handle it
//!   exhaustively instead of falling into a default branch
//!
//! **No sink concerns**: clipboard access, stdout, prompting, and process
//! exit codes belong to the binary crate (`clip64-cli`).
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let encoded = clip64_core::convert_file(Path::new("logo.png"))?;
//! println!("{encoded}");
//! # Ok(())
//! # }
//! ```

mod convert;
mod encoder;
mod messages;
mod reader;
mod selection;

pub use convert::convert_file;
pub use encoder::encode;
pub use messages::{pick, PHRASES};
pub use reader::FileHandle;
pub use selection::{select, DropPrompt, Selection, SelectionOutcome, CHOICE_LABELS};

/// Errors that can occur while converting a file to Base64 text
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The supplied path does not resolve to anything
    #[error("file not found: {0}")]
    NotFound(String),

    /// The path resolves to something other than a regular file
    #[error("not a regular file: {0}")]
    NotAFile(String),

    /// The file exists but could not be opened for reading
    #[error("file is not readable: {0}")]
    NotReadable(String),

    /// The file's declared size cannot be held in addressable memory
    #[error("file too large to encode: {size} bytes")]
    FileTooLarge { size: u64 },

    /// The read produced a different byte count than the size declared at
    /// open time (the file changed underneath us)
    #[error("incomplete read: expected {expected} bytes, got {actual}")]
    IncompleteRead { expected: u64, actual: u64 },

    /// A drop event carried no paths at all
    #[error("selection requires at least one path")]
    EmptyDrop,

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
