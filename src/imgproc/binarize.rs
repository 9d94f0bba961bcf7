use log::{debug, trace};

use super::dithering::{self, BW_TARGET_COLOR_SPACE};
use super::{BinarizeMode, DitheringMethod};
use crate::grid::{PixelGrid, Size};
use crate::source::PixelSource;

/// Reads `img` into a grid of `size` cells, one per pixel.
///
/// With [`BinarizeMode::Raw`] the monochrome conversion is requested but
/// not applied, so each cell is channel 0 of the picture as decoded. That
/// is only 0/1 data when the input already is a 1-bit picture. The other
/// modes use the converted picture and always yield 0 or 1 (1 = white).
pub fn binarize(img: &impl PixelSource, size: Size, mode: BinarizeMode) -> PixelGrid {
    assert_eq!(img.size(), size, "picture must be validated before binarizing");

    match mode {
        BinarizeMode::Raw => {
            if !img.is_mono() {
                debug!("Monochrome conversion result discarded, reading channel 0 as decoded");
            }
            PixelGrid::from_fn(size, |x, y| img.channel(x, y, 0))
        }
        BinarizeMode::Mono => to_mono(img, size, DitheringMethod::FloydSteinberg),
        BinarizeMode::Threshold => to_mono(img, size, DitheringMethod::NoDithering),
    }
}

fn to_mono(img: &impl PixelSource, size: Size, method: DitheringMethod) -> PixelGrid {
    trace!("Converting {} picture to mono, {:?}", size, method);
    let grey = PixelGrid::from_fn(size, |x, y| img.luma(x, y));
    dithering::quantize(&grey, &BW_TARGET_COLOR_SPACE, method)
}
