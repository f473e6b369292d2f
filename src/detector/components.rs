use crate::models::{BitMatrix, Point};
use crate::models::PixelGroup;
use std::collections::VecDeque;

/// Scan the raster in row-major order and flood-fill every dark pixel into
/// its 8-connected component. Determinism: group order follows the
/// row-major scan of seeds; traversal inside each group follows FIFO
/// expansion from the seed (a plain BFS queue).
pub fn group_dark_pixels(raster: &BitMatrix) -> Vec<PixelGroup> {
    let width = raster.width();
    let height = raster.height();
    let mut consumed = vec![false; width * height];
    let mut groups = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if consumed[idx] || !raster.get(x, y) {
                continue;
            }

            let mut members = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back(Point::new(x as i32, y as i32));
            consumed[idx] = true;

            while let Some(p) = queue.pop_front() {
                members.push(p);
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = p.x + dx;
                        let ny = p.y + dy;
                        if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                            continue;
                        }
                        let nidx = ny as usize * width + nx as usize;
                        if consumed[nidx] || !raster.get(nx as usize, ny as usize) {
                            continue;
                        }
                        consumed[nidx] = true;
                        queue.push_back(Point::new(nx, ny));
                    }
                }
            }

            groups.push(PixelGroup::new(members));
        }
    }

    groups
}
