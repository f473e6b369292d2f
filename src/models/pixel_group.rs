use super::Point;
use std::collections::HashSet;

/// An 8-connected component of dark pixels, as produced by the component
/// grouper (detector::components).
///
/// Immutable after construction: bounding box, centroid and the hollow flag
/// are all derived once from the member set.
#[derive(Debug, Clone)]
pub struct PixelGroup {
    members: Vec<Point>,
    min: Point,
    max: Point,
    centroid: Point,
    is_hollow: bool,
}

impl PixelGroup {
    /// Build a group from its member pixels. `members` must be non-empty.
    pub fn new(members: Vec<Point>) -> Self {
        debug_assert!(!members.is_empty());

        let mut min = members[0];
        let mut max = members[0];
        let mut sum_x: i64 = 0;
        let mut sum_y: i64 = 0;
        for p in &members {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            sum_x += p.x as i64;
            sum_y += p.y as i64;
        }
        let n = members.len() as i64;
        let centroid = Point::new((sum_x / n) as i32, (sum_y / n) as i32);
        let is_hollow = Self::compute_hollow(&members, min, max);

        Self {
            members,
            min,
            max,
            centroid,
            is_hollow,
        }
    }

    /// A group is hollow iff its member count is strictly less than the
    /// area spanned per-row between the leftmost and rightmost member of
    /// that row (i.e. some row has a gap between its dark pixels).
    fn compute_hollow(members: &[Point], min: Point, max: Point) -> bool {
        let set: HashSet<Point> = members.iter().copied().collect();
        let mut filled_area: i64 = 0;
        for y in min.y..=max.y {
            let mut row_min = None;
            let mut row_max = None;
            for x in min.x..=max.x {
                if set.contains(&Point::new(x, y)) {
                    if row_min.is_none() {
                        row_min = Some(x);
                    }
                    row_max = Some(x);
                }
            }
            if let (Some(lo), Some(hi)) = (row_min, row_max) {
                filled_area += (hi - lo + 1) as i64;
            }
        }
        (members.len() as i64) < filled_area
    }

    pub fn members(&self) -> &[Point] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn is_hollow(&self) -> bool {
        self.is_hollow
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    /// Merge this group's members with another's into a new group (used to
    /// compute a PDP's center from the union of its solid and hollow parts).
    pub fn union(&self, other: &PixelGroup) -> PixelGroup {
        let mut members = self.members.clone();
        members.extend_from_slice(&other.members);
        PixelGroup::new(members)
    }
}
