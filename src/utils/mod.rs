//! Shared utilities.
//!
//! - `luminance`: the `LuminanceSource` trait and the two concrete buffer
//!   adapters (grayscale, interleaved RGB) callers use to hand pixels in.

pub mod luminance;

pub use luminance::{GrayscaleImage, LuminanceSource, RgbImage};
