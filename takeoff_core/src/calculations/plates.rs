//! Floor Plate Packing
//!
//! Decomposes the span-run length into standard 4 m / 3 m / 2 m ground
//! boards. One representative line is packed greedily, largest plate first,
//! and any positive remainder rounds up to one more 2 m board (no partial
//! plates). The per-line result is then repeated for every boundary line of
//! the layout: `face_columns + 1` rows, because boards run under both outer
//! edges as well as every interior column line.

use serde::{Deserialize, Serialize};

/// Plate counts for the 4 m / 3 m / 2 m board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlateCounts {
    pub four_m: u32,
    pub three_m: u32,
    pub two_m: u32,
}

impl PlateCounts {
    /// Total length covered by these plates, mm
    pub fn covered_mm(&self) -> u64 {
        4000 * u64::from(self.four_m) + 3000 * u64::from(self.three_m) + 2000 * u64::from(self.two_m)
    }

    /// Multiply every count by `rows` parallel lines
    pub fn scaled(self, rows: u32) -> PlateCounts {
        PlateCounts {
            four_m: self.four_m * rows,
            three_m: self.three_m * rows,
            two_m: self.two_m * rows,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.four_m == 0 && self.three_m == 0 && self.two_m == 0
    }
}

/// Pack one line of `length_mm` with boards, greedy largest-first.
///
/// A zero run yields a zero result; any other run is fully covered, with a
/// positive remainder after the greedy passes rounding up to one extra 2 m
/// board.
pub fn pack_run(length_mm: u32) -> PlateCounts {
    let mut remaining = length_mm;

    let four_m = remaining / 4000;
    remaining -= four_m * 4000;

    let three_m = remaining / 3000;
    remaining -= three_m * 3000;

    let mut two_m = remaining / 2000;
    remaining -= two_m * 2000;

    if remaining > 0 {
        two_m += 1;
    }

    PlateCounts { four_m, three_m, two_m }
}

/// Pack the whole layout: one packed line per boundary row,
/// `face_columns + 1` rows in total.
pub fn pack_layout(span_mm_total: u32, face_columns: u32) -> PlateCounts {
    pack_run(span_mm_total).scaled(face_columns + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_run_yields_nothing() {
        assert!(pack_run(0).is_zero());
    }

    #[test]
    fn test_short_run_rounds_up_to_one_board() {
        assert_eq!(pack_run(1), PlateCounts { four_m: 0, three_m: 0, two_m: 1 });
        assert_eq!(pack_run(1999), PlateCounts { four_m: 0, three_m: 0, two_m: 1 });
    }

    #[test]
    fn test_greedy_largest_first() {
        // 18 m: four 4 m boards, then 2000 left for one 2 m board
        assert_eq!(pack_run(18000), PlateCounts { four_m: 4, three_m: 0, two_m: 1 });
        // 7 m: one 4 m, one 3 m, exact
        assert_eq!(pack_run(7000), PlateCounts { four_m: 1, three_m: 1, two_m: 0 });
    }

    #[test]
    fn test_coverage_and_tightness() {
        // Every packing covers the run, and no single board can be removed
        // without falling short.
        for length in [1, 500, 2000, 2500, 3500, 5000, 6500, 7000, 9999, 18000, 54321] {
            let packed = pack_run(length);
            assert!(packed.covered_mm() >= u64::from(length), "undercovers {}", length);

            let mut reduced = Vec::new();
            if packed.four_m > 0 {
                reduced.push(PlateCounts { four_m: packed.four_m - 1, ..packed });
            }
            if packed.three_m > 0 {
                reduced.push(PlateCounts { three_m: packed.three_m - 1, ..packed });
            }
            if packed.two_m > 0 {
                reduced.push(PlateCounts { two_m: packed.two_m - 1, ..packed });
            }
            for r in reduced {
                assert!(r.covered_mm() < u64::from(length), "loose packing for {}", length);
            }
        }
    }

    #[test]
    fn test_layout_multiplies_per_boundary_line() {
        // Two columns mean three board lines
        let layout = pack_layout(7000, 2);
        assert_eq!(layout, PlateCounts { four_m: 3, three_m: 3, two_m: 0 });
        // Zero columns: a single board line
        assert_eq!(pack_layout(4000, 0), PlateCounts { four_m: 1, three_m: 0, two_m: 0 });
    }
}
