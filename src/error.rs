//! Error types for tag operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tag operation result type
pub type TagResult<T> = Result<T, TagError>;

/// Tag operation errors
///
/// A frame missing from the file is not an error; the edit path reports it
/// as [`crate::id3::RewriteOutcome::NotFound`].
#[derive(Error, Debug)]
pub enum TagError {
    /// Source path could not be opened
    #[error("unable to open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Tag header is short, has bad magic, or an unsupported version
    #[error("invalid ID3 header: {reason}")]
    InvalidHeader { reason: String },

    /// A declared read length was not satisfied
    #[error("truncated frame at offset {offset}: {what}")]
    TruncatedFrame { offset: u64, what: &'static str },

    /// Frame declares a size of zero, which cannot account for its encoding byte
    #[error("frame {id} at offset {offset} declares a size of zero")]
    InvalidFrame { id: String, offset: u64 },

    /// Edit requested for an identifier outside the recognized set
    #[error("unsupported frame identifier: {0}")]
    UnsupportedFrameId(String),

    /// Write failure on the staged output, before commit; the original file
    /// is untouched
    #[error("error writing staged output: {0}")]
    Staging(#[source] io::Error),

    /// The rename or unlink step failed after staging succeeded; the original
    /// and the staged file may both remain on disk
    #[error("error committing staged output: {0}")]
    Commit(#[source] io::Error),

    /// Unclassified stream error
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),
}
