use crate::models::BitMatrix;
use crate::utils::LuminanceSource;

/// Fixed global threshold: a pixel is dark iff its gray value is below this.
pub const THRESHOLD: u8 = 128;

/// Binarize a luminance source into a boolean raster (`true` = dark module).
///
/// This is deliberately a single global threshold rather than an adaptive
/// scheme: the rest of the pipeline assumes a cleanly binarized image, and
/// images outside that regime are out of scope.
pub fn binarize(source: &dyn LuminanceSource) -> BitMatrix {
    let width = source.width();
    let height = source.height();
    let mut raster = BitMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            raster.set(x, y, source.luminance(x, y) < THRESHOLD);
        }
    }
    raster
}
