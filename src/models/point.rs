/// Integer 2-D pixel coordinate.
///
/// Detection works entirely in this integer pixel space: pixel group
/// membership, bounding boxes and centroids are all `Point`s. Sub-pixel
/// geometry (module pitch, line walks) is computed in `f64` and truncated
/// back to `Point` at the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Alias for call sites that want to be explicit about integer grid
/// coordinates (module indices) rather than pixel coordinates.
pub type PointI = Point;
