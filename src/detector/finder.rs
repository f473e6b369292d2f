//! Position-detection-pattern pairing and right-angle triple selection
//! (§4.C). Operates on the `PixelGroup`s the component grouper (stage B)
//! produced.
use crate::error::DecodeError;
use crate::models::{PixelGroup, Point};

/// A position-detection pattern: a solid inner group nested inside a hollow
/// outer group (§3).
#[derive(Debug, Clone)]
pub struct Pdp {
    inner: PixelGroup,
    outer: PixelGroup,
}

impl Pdp {
    /// Centroid of the union of the two member groups (§3).
    pub fn center(&self) -> Point {
        self.inner.union(&self.outer).centroid()
    }

    /// Bounding box of the union of the two member groups, used by the grid
    /// sampler to estimate module pitch (§4.D).
    pub fn bbox(&self) -> (Point, Point) {
        let union = self.inner.union(&self.outer);
        (union.min(), union.max())
    }
}

/// Three PDPs labeled by their role in the symbol (§3's `PDPTriple`).
pub struct PdpTriple {
    pub top_left: Pdp,
    pub right: Pdp,
    pub bottom: Pdp,
}

/// True iff `inner`'s bounding box lies strictly inside `outer`'s, and
/// `outer`'s centroid lies inside `inner`'s bounding box (§3).
fn is_nested(inner: &PixelGroup, outer: &PixelGroup) -> bool {
    let (imin, imax) = (inner.min(), inner.max());
    let (omin, omax) = (outer.min(), outer.max());
    let strictly_inside = omin.x < imin.x && omin.y < imin.y && omax.x > imax.x && omax.y > imax.y;
    if !strictly_inside {
        return false;
    }
    let c = outer.centroid();
    c.x >= imin.x && c.x <= imax.x && c.y >= imin.y && c.y <= imax.y
}

/// Find every candidate PDP among `groups` by pairing solid members with
/// hollow members that nest around them (§4.C).
pub fn find_candidates(groups: &[PixelGroup]) -> Vec<Pdp> {
    let mut candidates = Vec::new();
    for inner in groups.iter().filter(|g| !g.is_hollow()) {
        for outer in groups.iter().filter(|g| g.is_hollow()) {
            if is_nested(inner, outer) {
                candidates.push(Pdp {
                    inner: inner.clone(),
                    outer: outer.clone(),
                });
            }
        }
    }
    candidates
}

/// Maximum deviation from a perfect right angle, in radians, still accepted
/// as a triple (§4.C calls for "perpendicular ±tolerance" without pinning
/// down the tolerance; chosen generously since the upstream PDP centroids
/// are themselves only pixel-precision estimates).
const RIGHT_ANGLE_TOLERANCE: f64 = 0.3;

fn angle(from: Point, to: Point) -> f64 {
    ((to.y - from.y) as f64).atan2((to.x - from.x) as f64)
}

/// Select the PDP triple whose TopLeft->Right and TopLeft->Bottom vectors
/// come closest to a right angle (§4.C). Fails with `FinderNotFound` if
/// fewer than three candidates exist, or `FinderAmbiguous` if none of the
/// candidate triples is square enough.
pub fn find_triple(candidates: &[Pdp]) -> Result<PdpTriple, DecodeError> {
    if candidates.len() < 3 {
        return Err(DecodeError::FinderNotFound {
            found: candidates.len(),
        });
    }

    let mut best: Option<(usize, usize, usize, f64)> = None;
    for (ai, a) in candidates.iter().enumerate() {
        for (bi, b) in candidates.iter().enumerate() {
            if bi == ai {
                continue;
            }
            let theta_ab = angle(a.center(), b.center());
            for (ci, c) in candidates.iter().enumerate() {
                if ci == ai || ci == bi {
                    continue;
                }
                let theta_ac = angle(a.center(), c.center());
                // Signed difference, per spec §4.C and the reference
                // decoder's `Radian`/`IsVertical` (original_source/qrcode.go):
                // `dk = theta_ac - theta_ab` is *not* wrapped in `abs` before
                // subtracting pi/2, so the mirrored (chirally-reversed)
                // assignment scores ~pi instead of tying with the correct one.
                let diff = theta_ac - theta_ab;
                let score = (diff - std::f64::consts::FRAC_PI_2).abs();

                let better = match best {
                    None => true,
                    Some((_, _, _, best_score)) => score < best_score,
                };
                if better {
                    best = Some((ai, bi, ci, score));
                }
            }
        }
    }

    match best {
        Some((ai, bi, ci, score)) if score <= RIGHT_ANGLE_TOLERANCE => Ok(PdpTriple {
            top_left: candidates[ai].clone(),
            right: candidates[bi].clone(),
            bottom: candidates[ci].clone(),
        }),
        _ => Err(DecodeError::FinderAmbiguous),
    }
}
