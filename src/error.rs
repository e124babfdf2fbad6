use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting the canvas or touching the filesystem.
///
/// User cancellation (declined overwrite, dismissed dialog) is deliberately
/// not an error: the operation just stops.
#[derive(Debug, Error)]
pub enum DrawerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// The target filename has no extension, or one no codec is registered for.
    #[error("{0:?} has no supported image extension (expected png or jpg)")]
    UnsupportedExtension(PathBuf),

    /// The target exists but the filesystem marks it read-only.
    #[error("cannot write to {0:?}")]
    NotWritable(PathBuf),
}
