//! Data-area mask (§4.F's `DataAreaMask D`): every module that is *not* a
//! position-detection pattern, separator, timing strip, alignment pattern,
//! format-info strip, dark module, or (v7+) version-info block.
//!
//! Construction marks the function-pattern footprint onto an initially-clear
//! mask, then `is_data` reports the complement — `D[y][x] = true` iff the
//! module carries user data or ECC bits.

use crate::decoder::tables::alignment_pattern_positions;
use crate::models::BitMatrix;

/// Data-area mask for a specific QR version.
pub struct DataAreaMask {
    function: BitMatrix,
    version: u8,
}

impl DataAreaMask {
    pub fn new(version: u8) -> Self {
        let size = 17 + 4 * version as usize;
        let mut function = BitMatrix::new(size, size);

        // Finder pattern + separator footprints (9x9 / 8x9 / 9x8 once
        // combined with the format-info strips marked below).
        Self::mark_finder_area(&mut function, 0, 0);
        Self::mark_finder_area(&mut function, size - 7, 0);
        Self::mark_finder_area(&mut function, 0, size - 7);

        // Timing patterns: row 6 and column 6 entirely.
        for i in 0..size {
            function.set(6, i, true);
            function.set(i, 6, true);
        }

        // Alignment patterns, excluding centers that coincide with a PDP.
        let align = alignment_pattern_positions(version);
        for &cx in &align {
            for &cy in &align {
                let in_tl = cx <= 8 && cy <= 8;
                let in_tr = cx >= size - 9 && cy <= 8;
                let in_bl = cx <= 8 && cy >= size - 9;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                for dy in 0..5 {
                    for dx in 0..5 {
                        let x = cx.saturating_sub(2) + dx;
                        let y = cy.saturating_sub(2) + dy;
                        if x < size && y < size {
                            function.set(x, y, true);
                        }
                    }
                }
            }
        }

        // Format info strips: copy 1 (rows/cols 0-8 near TopLeft) and copy 2
        // (rows/cols size-8..size-1 near Right/Bottom).
        for i in 0..9 {
            if i != 6 {
                function.set(8, i, true);
                function.set(i, 8, true);
            }
        }
        for i in 0..8 {
            function.set(size - 1 - i, 8, true);
            function.set(8, size - 1 - i, true);
        }

        // Dark module: always dark, always a function module.
        function.set(8, size - 8, true);

        // Version-info blocks (v7+): two 3x6 blocks adjacent to Right/Bottom.
        if version >= 7 {
            for dy in 0..6 {
                for dx in 0..3 {
                    function.set(size - 11 + dx, dy, true);
                    function.set(dx, size - 11 + dy, true);
                }
            }
        }

        Self { function, version }
    }

    pub fn size(&self) -> usize {
        self.function.width()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// `D[y][x]` per §3/§4.F: true iff the module carries user data or ECC.
    pub fn is_data(&self, x: usize, y: usize) -> bool {
        !self.function.get(x, y)
    }

    /// Count of `true` cells in `D` — used by the invariant test in §8.4.
    pub fn data_modules_count(&self) -> usize {
        let size = self.function.width();
        let mut count = 0;
        for y in 0..size {
            for x in 0..size {
                if self.is_data(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    fn mark_finder_area(function: &mut BitMatrix, x: usize, y: usize) {
        let size = function.width();
        let start_x = x.saturating_sub(1);
        let start_y = y.saturating_sub(1);
        let end_x = (x + 7 + 1).min(size);
        let end_y = (y + 7 + 1).min(size);
        for yy in start_y..end_y {
            for xx in start_x..end_x {
                function.set(xx, yy, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::tables::{block_specs, num_raw_data_modules};
    use crate::models::ECLevel;

    #[test]
    fn version1_data_area_matches_raw_module_count() {
        let mask = DataAreaMask::new(1);
        assert_eq!(mask.data_modules_count(), num_raw_data_modules(1) * 8);
    }

    #[test]
    fn data_area_count_matches_version_table_for_all_versions() {
        for v in 1..=40u8 {
            let mask = DataAreaMask::new(v);
            let specs = block_specs(v, ECLevel::L).unwrap();
            let total_bits: usize = specs.iter().map(|s| s.total_codewords * 8).sum();
            assert_eq!(mask.data_modules_count(), total_bits, "version {v}");
        }
    }

    #[test]
    fn dark_module_is_never_data() {
        let mask = DataAreaMask::new(1);
        assert!(!mask.is_data(8, 13));
    }
}
