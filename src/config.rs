use crate::grid::Size;
use crate::imgproc::{BinarizeMode, PackMode};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Required input dimensions. Images of any other size are rejected.
    pub image_size: Size,
    pub binarize: BinarizeMode,
    pub pack: PackMode,
}

impl ConvertOptions {
    /// Panel resolution of the watch face the headers are generated for.
    pub const DISPLAY_SIZE: Size = Size {
        width: 200,
        height: 200,
    };
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            image_size: Self::DISPLAY_SIZE,
            binarize: BinarizeMode::default(),
            pack: PackMode::default(),
        }
    }
}
