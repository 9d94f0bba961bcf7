use std::path::Path;

use ::image::{DynamicImage, GenericImageView, Pixel};
use log::{debug, info};

use crate::error::ConvertError;
use crate::grid::{PixelGrid, Size};

// Decoded picture the binarizer reads from. Pixel queries go through this
// trait so the pipeline does not care which decoder produced the pixels.
pub trait PixelSource {
    fn size(&self) -> Size;

    /// Component `channel` of the pixel at (x, y), in the source's own
    /// representation.
    fn channel(&self, x: u32, y: u32, channel: usize) -> u8;

    /// Greyscale intensity of the pixel at (x, y).
    fn luma(&self, x: u32, y: u32) -> u8;

    /// Whether pixels already hold one bit each, i.e. no monochrome
    /// conversion is needed.
    fn is_mono(&self) -> bool {
        false
    }
}

impl PixelSource for DynamicImage {
    fn size(&self) -> Size {
        self.dimensions().into()
    }
    fn channel(&self, x: u32, y: u32, channel: usize) -> u8 {
        self.get_pixel(x, y).0[channel]
    }
    fn luma(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).to_luma().0[0]
    }
}

// single channel, values as stored
impl PixelSource for PixelGrid {
    fn size(&self) -> Size {
        PixelGrid::size(self)
    }
    fn channel(&self, x: u32, y: u32, channel: usize) -> u8 {
        assert_eq!(channel, 0, "grid has a single channel");
        self.get(x, y)
    }
    fn luma(&self, x: u32, y: u32) -> u8 {
        self.get(x, y)
    }
    fn is_mono(&self) -> bool {
        self.row_major().all(|v| v <= 1)
    }
}

pub fn open(path: &Path) -> Result<DynamicImage, ConvertError> {
    let to_err = |source| ConvertError::ImageOpen {
        path: path.to_path_buf(),
        source,
    };
    let img = ::image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| to_err(::image::ImageError::IoError(err)))?
        .decode()
        .map_err(to_err)?;
    debug!("Decoded {} as {:?}, {}", path.display(), img.color(), PixelSource::size(&img));
    Ok(img)
}

pub fn validate(img: &impl PixelSource, expected: Size) -> Result<(), ConvertError> {
    let actual = img.size();
    if actual != expected {
        return Err(ConvertError::DimensionMismatch { actual, expected });
    }
    Ok(())
}

/// Opens `path` and checks it is exactly `expected` pixels large.
pub fn open_validated(path: &Path, expected: Size) -> Result<DynamicImage, ConvertError> {
    let img = open(path)?;
    validate(&img, expected)?;
    info!("Loaded {} ({})", path.display(), expected);
    Ok(img)
}
