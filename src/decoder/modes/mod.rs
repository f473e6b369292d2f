//! QR code data mode decoders
//!
//! This module contains decoders for different QR data modes:
//! - Numeric: efficient encoding for digits (0-9)
//! - Alphanumeric: letters, numbers, and a small symbol set
//! - Byte: raw 8-bit data
//! - Kanji: Shift-JIS character pairs

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;
