pub mod binarize;
pub mod bitpack;
pub mod dithering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BinarizeMode {
    /// Channel 0 of the decoded image, unconverted
    #[default]
    Raw,
    /// Greyscale, Floyd-Steinberg dithered to 0/1
    Mono,
    /// Greyscale, 0/1 split at mid-grey
    Threshold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PackMode {
    /// One output value per pixel
    #[default]
    Copy,
    /// Eight vertically adjacent pixels per byte, LSB on top
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DitheringMethod {
    NoDithering,
    FloydSteinberg,
}
