use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving the canvas as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Canvas has no area to export ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
