use log::trace;

use super::PackMode;
use crate::grid::{PixelGrid, Size};

pub fn pack(grid: &PixelGrid, mode: PackMode) -> PixelGrid {
    match mode {
        PackMode::Copy => grid.clone(),
        PackMode::Vertical => pack_vertical(grid),
    }
}

/// Packs 8 vertically adjacent cells of each column into one byte.
///
/// Bit `k` of output row `band` is set when cell `(x, band*8 + k)` is
/// nonzero. A trailing partial band leaves its missing high bits clear.
pub fn pack_vertical(grid: &PixelGrid) -> PixelGrid {
    let bands = (grid.height() + 7) / 8;
    let mut packed = PixelGrid::new(Size {
        width: grid.width(),
        height: bands,
    });
    trace!("Packing {} into {}", grid.size(), packed.size());

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.get(x, y) != 0 {
                *packed.get_mut(x, y / 8) |= 1 << (y % 8);
            }
        }
    }

    packed
}
