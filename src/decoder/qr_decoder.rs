//! Top-level decode pipeline (§2): wires stages A-I together, from a raw
//! luminance source through to a decoded `QrCode`.
use crate::decoder::{deinterleave, format, function_mask::DataAreaMask, payload, unmask};
use crate::detector::{binarizer, components, finder, grid};
use crate::error::{DecodeError, DecodeResult};
use crate::models::QrCode;
use crate::utils::LuminanceSource;

/// Decode a single QR symbol from `source`.
///
/// Runs the full pipeline: binarize, group dark pixels into connected
/// components, locate the three position-detection patterns, sample the
/// module grid, read format info, unmask, extract the bit stream, de-
/// interleave and Reed-Solomon correct, and finally decode the payload.
pub fn decode(source: &dyn LuminanceSource) -> DecodeResult<QrCode> {
    if source.width() == 0 || source.height() == 0 {
        return Err(DecodeError::ImageUnreadable {
            reason: "zero-sized image",
        });
    }

    let raster = binarizer::binarize(source);
    let groups = components::group_dark_pixels(&raster);
    let candidates = finder::find_candidates(&groups);
    let triple = finder::find_triple(&candidates)?;
    let sampled = grid::sample(&raster, &triple)?;

    let format_info = format::read(&sampled.matrix)?;

    let mut matrix = sampled.matrix;
    unmask::unmask(&mut matrix, &format_info.mask_pattern);

    let data_area = DataAreaMask::new(sampled.version.number());
    let bits = crate::decoder::bitstream::extract(&matrix, &data_area);

    let corrected = deinterleave::decode(&bits, sampled.version.number(), format_info.ec_level)?;
    let payload_bits = deinterleave::bytes_to_bits(&corrected);
    let content = payload::decode(&payload_bits, sampled.version.number())?;

    Ok(QrCode {
        content,
        version: sampled.version,
        ec_level: format_info.ec_level,
        mask_pattern: format_info.mask_pattern,
    })
}
