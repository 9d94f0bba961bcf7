#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<u32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed-size grid of byte values, addressed as `grid[x][y]`.
///
/// Storage is column-major: all rows of column 0 come first, then column 1,
/// and so on. Producers and consumers only go through `get`/`set` so the
/// layout never leaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    size: Size,
    data: Vec<u8>,
}

impl PixelGrid {
    pub fn new(size: Size) -> Self {
        assert!(
            size.width > 0 && size.height > 0,
            "invalid width {} and height {}",
            size.width,
            size.height
        );
        PixelGrid {
            size,
            data: vec![0; (size.width * size.height) as usize],
        }
    }

    pub fn from_fn(size: Size, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut grid = Self::new(size);
        for x in 0..size.width {
            for y in 0..size.height {
                grid.set(x, y, f(x, y));
            }
        }
        grid
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.size.width && y < self.size.height,
            "({}, {}) out of bounds for {}",
            x,
            y,
            self.size
        );
        (x * self.size.height + y) as usize
    }

    pub fn size(&self) -> Size {
        self.size
    }
    pub fn width(&self) -> u32 {
        self.size.width
    }
    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset(x, y)]
    }
    pub fn set(&mut self, x: u32, y: u32, val: u8) {
        let offset = self.offset(x, y);
        self.data[offset] = val;
    }
    pub fn get_mut(&mut self, x: u32, y: u32) -> &mut u8 {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }

    /// Values in output order: row by row, left to right within a row.
    pub fn row_major(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| self.get(x, y)))
    }
}
