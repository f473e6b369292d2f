//! RustQR - a pure Rust QR code decoding library.
//!
//! Given a pixel buffer (grayscale or RGB) known to contain a single,
//! axis-aligned QR symbol, `decode` runs the full pipeline: binarization,
//! connected-component grouping, position-detection-pattern location,
//! module-grid sampling, format-info recovery, unmasking, bit-stream
//! extraction, Reed-Solomon correction, and payload decoding.

/// Error types returned by `decode`.
pub mod error;

/// QR code decoding modules (error correction, format extraction, data modes).
pub mod decoder;
/// QR code detection modules (binarization, component grouping, finder location, grid sampling).
pub mod detector;
/// Core data structures (QrCode, BitMatrix, Point, etc).
pub mod models;
/// Pixel buffer adapters (grayscale, interleaved RGB).
pub mod utils;

pub use decoder::qr_decoder::decode;
pub use error::{DecodeError, DecodeResult};
pub use models::{BitMatrix, ECLevel, MaskPattern, Point, QrCode, Version};
pub use utils::{GrayscaleImage, LuminanceSource, RgbImage};
