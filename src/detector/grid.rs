//! Module pitch estimation and grid sampling (§4.D): derives the module
//! pitch from the three PDP bounding boxes, walks the timing pattern
//! between finders to recover the interior module centers, and samples the
//! full module matrix from the resulting coordinate lists.
use crate::detector::finder::PdpTriple;
use crate::error::DecodeError;
use crate::models::{BitMatrix, Version};

/// A sampled module matrix together with the version it implies.
pub struct Grid {
    pub matrix: BitMatrix,
    pub version: Version,
}

/// Module pitch in pixels: sum both bounding-box extents across the three
/// PDPs and divide by 60 (§4.D, §9 — an empirical calibration, not a
/// geometric identity).
fn estimate_pitch(triple: &PdpTriple) -> f64 {
    let mut sum = 0.0;
    for pdp in [&triple.top_left, &triple.right, &triple.bottom] {
        let (min, max) = pdp.bbox();
        sum += (max.x - min.x + 1) as f64;
        sum += (max.y - min.y + 1) as f64;
    }
    sum / 60.0
}

fn pixel_dark(raster: &BitMatrix, x: i64, y: i64) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    raster.get(x as usize, y as usize)
}

/// Run-length segments (inclusive start/end) along a horizontal line at
/// fixed `y`, from `x0` to `x1` (`x0 <= x1`).
fn runs_horizontal(raster: &BitMatrix, y: i64, x0: i64, x1: i64) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    if x0 > x1 {
        return out;
    }
    let mut start = x0;
    let mut current = pixel_dark(raster, x0, y);
    for x in (x0 + 1)..=x1 {
        let v = pixel_dark(raster, x, y);
        if v != current {
            out.push((start, x - 1));
            start = x;
            current = v;
        }
    }
    out.push((start, x1));
    out
}

/// Run-length segments along a vertical line at fixed `x`, from `y0` to
/// `y1` (`y0 <= y1`).
fn runs_vertical(raster: &BitMatrix, x: i64, y0: i64, y1: i64) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    if y0 > y1 {
        return out;
    }
    let mut start = y0;
    let mut current = pixel_dark(raster, x, y0);
    for y in (y0 + 1)..=y1 {
        let v = pixel_dark(raster, x, y);
        if v != current {
            out.push((start, y - 1));
            start = y;
            current = v;
        }
    }
    out.push((start, y1));
    out
}

/// The most frequent run length, used as the estimated module pitch along
/// a given axis (§4.D). Zero if `runs` is empty.
fn modal_run_length(runs: &[(i64, i64)]) -> i64 {
    let mut counts: std::collections::HashMap<i64, usize> = std::collections::HashMap::new();
    for &(s, e) in runs {
        *counts.entry(e - s + 1).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(len, _)| len)
        .unwrap_or(0)
}

/// Sample the full module matrix from a PDP triple (§4.D). Walks the
/// horizontal timing strip between TopLeft and Right, and the vertical
/// strip between TopLeft and Bottom, to recover the interior module
/// centers; the three PDPs themselves fix the outer seven modules on each
/// axis.
pub fn sample(raster: &BitMatrix, triple: &PdpTriple) -> Result<Grid, DecodeError> {
    let pitch = estimate_pitch(triple);
    if pitch <= 0.0 {
        return Err(DecodeError::GridSampleFailed {
            reason: "non-positive module pitch",
        });
    }

    let tl = triple.top_left.center();
    let tr = triple.right.center();
    let bl = triple.bottom.center();

    let y_h = (tl.y as f64 + 3.0 * pitch).round() as i64;
    let hx0 = (tl.x as f64 + 3.5 * pitch).round() as i64;
    let hx1 = (tr.x as f64 - 3.5 * pitch).round() as i64;
    let h_runs = runs_horizontal(raster, y_h, hx0.min(hx1), hx0.max(hx1));
    if modal_run_length(&h_runs) <= 1 {
        return Err(DecodeError::GridSampleFailed {
            reason: "horizontal timing pattern run length is degenerate",
        });
    }

    let x_v = (tl.x as f64 + 3.0 * pitch).round() as i64;
    let vy0 = (tl.y as f64 + 3.5 * pitch).round() as i64;
    let vy1 = (bl.y as f64 - 3.5 * pitch).round() as i64;
    let v_runs = runs_vertical(raster, x_v, vy0.min(vy1), vy0.max(vy1));
    if modal_run_length(&v_runs) <= 1 {
        return Err(DecodeError::GridSampleFailed {
            reason: "vertical timing pattern run length is degenerate",
        });
    }

    if h_runs.len() != v_runs.len() {
        return Err(DecodeError::GridSampleFailed {
            reason: "horizontal and vertical timing walks disagree on module count",
        });
    }

    let side = h_runs.len() + 14;
    let version = Version::from_side(side).ok_or(DecodeError::GridSampleFailed {
        reason: "module count does not match any legal version",
    })?;

    let mut xs = Vec::with_capacity(side);
    for i in -3..=3i64 {
        xs.push(tl.x as f64 + i as f64 * pitch);
    }
    for &(s, e) in &h_runs {
        xs.push((s + e) as f64 / 2.0);
    }
    for i in -3..=3i64 {
        xs.push(tr.x as f64 + i as f64 * pitch);
    }

    let mut ys = Vec::with_capacity(side);
    for i in -3..=3i64 {
        ys.push(tl.y as f64 + i as f64 * pitch);
    }
    for &(s, e) in &v_runs {
        ys.push((s + e) as f64 / 2.0);
    }
    for i in -3..=3i64 {
        ys.push(bl.y as f64 + i as f64 * pitch);
    }

    let mut matrix = BitMatrix::new(side, side);
    for (yi, &yf) in ys.iter().enumerate() {
        let py = yf.round() as i64;
        if py < 0 {
            continue;
        }
        for (xi, &xf) in xs.iter().enumerate() {
            let px = xf.round() as i64;
            if px < 0 {
                continue;
            }
            matrix.set(xi, yi, raster.get(px as usize, py as usize));
        }
    }

    Ok(Grid { matrix, version })
}
