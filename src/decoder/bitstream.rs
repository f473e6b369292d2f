//! Bit-stream reader (§4.G): walks the unmasked matrix `U` in right-to-left,
//! column-pair serpentine order, emitting one bit per data-area module
//! visited.
use crate::decoder::function_mask::DataAreaMask;
use crate::models::BitMatrix;

/// Extract the raw codeword bit stream from an already-unmasked matrix.
pub fn extract(matrix: &BitMatrix, data_area: &DataAreaMask) -> Vec<bool> {
    let side = matrix.width();
    let mut bits = Vec::new();
    let mut t = side - 1;

    while t > 0 {
        visit_column_pair(matrix, data_area, side, t, true, &mut bits);
        t = step_down(t);

        if t == 0 {
            break;
        }
        visit_column_pair(matrix, data_area, side, t, false, &mut bits);
        t = step_down(t);
    }

    bits
}

fn step_down(t: usize) -> usize {
    let t = t.saturating_sub(2);
    if t == 6 {
        t.saturating_sub(1)
    } else {
        t
    }
}

fn visit_column_pair(
    matrix: &BitMatrix,
    data_area: &DataAreaMask,
    side: usize,
    t: usize,
    upward: bool,
    bits: &mut Vec<bool>,
) {
    let right = t;
    let left = t.saturating_sub(1);

    let rows: Box<dyn Iterator<Item = usize>> = if upward {
        Box::new((0..side).rev())
    } else {
        Box::new(0..side)
    };

    for y in rows {
        for x in [right, left] {
            if data_area.is_data(x, y) {
                bits.push(matrix.get(x, y));
            }
        }
    }
}
