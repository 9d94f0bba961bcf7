use log::info;
use std::path::{Path, PathBuf};

use super::config::ConvertOptions;
use super::error::ConvertError;
use super::grid::PixelGrid;
use super::header;
use super::imgproc::{binarize::binarize, bitpack::pack};
use super::source::{self, PixelSource};

pub struct Conversion {
    pub header_path: PathBuf,
    pub text: String,
}

pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Converter {
        Converter { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Binarizes and packs an already validated picture.
    pub fn process(&self, img: &impl PixelSource) -> PixelGrid {
        let binary = binarize(img, self.options.image_size, self.options.binarize);
        pack(&binary, self.options.pack)
    }

    /// Full pipeline: open and validate `input`, convert it, and write the
    /// header into `output_dir`. Nothing is written if any earlier step fails.
    pub fn convert(&self, input: &Path, output_dir: &Path) -> Result<Conversion, ConvertError> {
        let data = {
            let img = source::open_validated(input, self.options.image_size)?;
            self.process(&img)
        };
        info!("Converted {} to {} values ({:?}, {:?})",
              input.display(), data.size(), self.options.binarize, self.options.pack);

        let (header_path, text) = header::output(&data, input, output_dir)?;
        Ok(Conversion { header_path, text })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}
