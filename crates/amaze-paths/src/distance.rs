//! Distance metrics.

use amaze_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// Every maze edge has unit cost, so this never overestimates the true
/// remaining distance on the orthogonal grid: it is an admissible (and
/// consistent) A* heuristic.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_absolute_deltas() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(0, 0)), 0);
        assert_eq!(manhattan(Coord::new(9, 0), Coord::new(0, 9)), 18);
        assert_eq!(manhattan(Coord::new(2, 7), Coord::new(5, 3)), 7);
        // Symmetric.
        assert_eq!(
            manhattan(Coord::new(1, 2), Coord::new(4, 0)),
            manhattan(Coord::new(4, 0), Coord::new(1, 2)),
        );
    }
}
