//! Payload mode dispatcher (§4.I): reads the 4-bit mode indicator, the
//! version/mode-dependent character-count indicator, then decodes that many
//! characters with the matching mode decoder.
use crate::decoder::modes::{
    alphanumeric::AlphanumericDecoder, byte::ByteDecoder, kanji::KanjiDecoder,
    numeric::NumericDecoder,
};
use crate::error::DecodeError;

const MODE_TERMINATOR: u8 = 0b0000;
const MODE_NUMERIC: u8 = 0b0001;
const MODE_ALPHANUMERIC: u8 = 0b0010;
const MODE_BYTE: u8 = 0b0100;
const MODE_KANJI: u8 = 0b1000;

fn read_bits(bits: &[bool], offset: usize, width: usize) -> u32 {
    let mut value = 0u32;
    for &bit in &bits[offset..offset + width] {
        value = (value << 1) | bit as u32;
    }
    value
}

/// Character-count indicator width in bits, per ISO/IEC 18004 Table 3.
fn char_count_bits(mode: u8, version: u8) -> Option<usize> {
    let tier = if version <= 9 {
        0
    } else if version <= 26 {
        1
    } else {
        2
    };
    match mode {
        MODE_NUMERIC => Some([10, 12, 14][tier]),
        MODE_ALPHANUMERIC => Some([9, 11, 13][tier]),
        MODE_BYTE => Some([8, 16, 16][tier]),
        MODE_KANJI => Some([8, 10, 12][tier]),
        _ => None,
    }
}

/// Decode a single payload segment from `bits` (already de-interleaved and
/// Reed-Solomon-corrected) into its byte content. Stops after the first
/// segment per the mode indicator it reads, matching a single-segment QR
/// symbol; a leading terminator (`0000`) yields an empty payload.
pub fn decode(bits: &[bool], version: u8) -> Result<Vec<u8>, DecodeError> {
    if bits.len() < 4 {
        return Err(DecodeError::TruncatedPayload { bit_offset: 0 });
    }
    let mode = read_bits(bits, 0, 4) as u8;
    if mode == MODE_TERMINATOR {
        return Ok(Vec::new());
    }

    let count_bits = char_count_bits(mode, version).ok_or(DecodeError::UnknownMode {
        mode,
        bit_offset: 0,
    })?;

    let mut offset = 4;
    if offset + count_bits > bits.len() {
        return Err(DecodeError::TruncatedPayload { bit_offset: offset });
    }
    let character_count = read_bits(bits, offset, count_bits) as usize;
    offset += count_bits;

    let body = &bits[offset..];
    match mode {
        MODE_NUMERIC => NumericDecoder::decode(body, character_count)
            .map(|(s, _)| s.into_bytes())
            .ok_or(DecodeError::TruncatedPayload { bit_offset: offset }),
        MODE_ALPHANUMERIC => AlphanumericDecoder::decode(body, character_count)
            .map(|(s, _)| s.into_bytes())
            .ok_or(DecodeError::TruncatedPayload { bit_offset: offset }),
        MODE_BYTE => ByteDecoder::decode(body, character_count)
            .map(|(b, _)| b)
            .ok_or(DecodeError::TruncatedPayload { bit_offset: offset }),
        MODE_KANJI => KanjiDecoder::decode(body, character_count)
            .map(|(b, _)| b)
            .ok_or(DecodeError::TruncatedPayload { bit_offset: offset }),
        _ => Err(DecodeError::UnknownMode { mode, bit_offset: 0 }),
    }
}
