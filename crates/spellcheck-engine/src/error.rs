// Error type shared by every component of the engine

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Errors produced while building dictionaries and correctors, scanning
/// tokens, or checking a document.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// A query received input it cannot work with (e.g. a non-word passed
    /// to a corrector).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A named source file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Low-level read or write failure, including malformed UTF-8.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A correction file line does not have the `misspelling,correction` shape.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A token or user-input request was made with nothing left to read.
    #[error("no more input available")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, SpellError>;

/// Open a source file, mapping a missing file to [`SpellError::FileNotFound`].
pub(crate) fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SpellError::FileNotFound(path.to_path_buf()),
        _ => SpellError::Io(e),
    })
}
