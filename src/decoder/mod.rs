//! QR code decoding modules
//!
//! This module contains all the logic for decoding QR codes after detection:
//! - Error correction (Reed-Solomon, BCH)
//! - Format and version information extraction
//! - Data mode decoding (numeric, alphanumeric, byte, kanji)
//! - Bitstream extraction and unmasking

/// BCH error correction for format info
pub mod bch;
/// Bitstream extraction from the unmasked module matrix
pub mod bitstream;
/// Block de-interleaving and Reed-Solomon correction
pub mod deinterleave;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// Function-pattern / data-area mask construction
pub mod function_mask;
/// Data mode decoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Payload mode dispatcher
pub mod payload;
/// Main QR decoder that orchestrates the decoding pipeline
pub mod qr_decoder;
/// Reed-Solomon error correction over GF(256)
pub mod reed_solomon;
/// Version/EC-level block layout and alignment pattern tables
pub mod tables;
/// QR code unmasking (removes mask patterns)
pub mod unmask;
