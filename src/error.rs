use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an inversion. Both variants are terminal:
/// `main` prints the message and exits with status 1.
#[derive(Debug, Error)]
pub enum InvertError {
    /// The input path does not exist. Checked up front so the common
    /// mistake gets a direct message instead of a raw decoder error.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Anything the image library reports: corrupt or truncated data,
    /// unsupported formats, failed writes.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
