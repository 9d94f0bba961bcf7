pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod header;
pub mod imgproc;
pub mod source;

pub use app::{Conversion, Converter};
pub use config::ConvertOptions;
pub use error::ConvertError;
