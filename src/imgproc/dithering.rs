use super::DitheringMethod;
use crate::grid::PixelGrid;

pub struct TargetColorSpace {
    step: u8,
    n_levels: u8,
}

impl TargetColorSpace {
    // returns the level index and the (signed) quantization error
    fn find_nearest_and_residual(&self, src: u8) -> (u8, i32) {
        let level = ((src as u32 + self.step as u32 / 2) / self.step as u32)
            .min(self.n_levels as u32 - 1) as u8;
        let dst = level as i32 * self.step as i32;
        (level, src as i32 - dst)
    }
}

pub const BW_TARGET_COLOR_SPACE: TargetColorSpace = TargetColorSpace {
    step: 0xff,
    n_levels: 2,
};

/// Quantizes a grey grid to level indices of `target_color_space`
/// (0 or 1 for black/white).
pub fn quantize(grey_src: &PixelGrid,
                target_color_space: &TargetColorSpace,
                method: DitheringMethod) -> PixelGrid {
    match method {
        DitheringMethod::NoDithering => PixelGrid::from_fn(grey_src.size(), |x, y| {
            target_color_space.find_nearest_and_residual(grey_src.get(x, y)).0
        }),
        DitheringMethod::FloydSteinberg => floyd_steinberg(grey_src, target_color_space),
    }
}

pub fn floyd_steinberg(grey_src: &PixelGrid, target_color_space: &TargetColorSpace) -> PixelGrid {
    let mut dst = PixelGrid::new(grey_src.size());
    let cols = grey_src.width() as usize;

    let mut current_row_additions: Vec<i32> = vec![0; cols + 1];
    let mut next_row_additions: Vec<i32> = vec![0; cols + 1];

    for row in 0..grey_src.height() {
        for col in 0..cols {
            let (level, residual) = target_color_space.find_nearest_and_residual(
                (grey_src.get(col as u32, row) as i32 + current_row_additions[col] / 256)
                    .clamp(0, 255) as u8);
            dst.set(col as u32, row, level);

            // row_additions are scaled by 256 to preserve precision
            let residual_16th = residual * 16;
            current_row_additions[col+1] += residual_16th * 7;
            if col >= 1 {
                next_row_additions[col-1] += residual_16th * 3;
            }
            next_row_additions[col] += residual_16th * 5;
            next_row_additions[col+1] += residual_16th;
        }
        std::mem::swap(&mut current_row_additions, &mut next_row_additions);
        next_row_additions.fill(0);
    }
    dst
}
