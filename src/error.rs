use std::path::PathBuf;

use crate::grid::Size;

/// Everything that can stop a conversion once the arguments are parsed.
///
/// All variants are fatal; nothing is written to the output directory when
/// one is returned before the writer stage.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unable to open {}", .path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("invalid picture dimensions ({actual}), expected {expected}")]
    DimensionMismatch { actual: Size, expected: Size },

    #[error("no usable array name left in {}", .path.display())]
    EmptyName { path: PathBuf },

    #[error("unable to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
