//! Circle rasterization.
//!
//! Implements the integer midpoint circle algorithm: a single octant is
//! walked and reflected eight ways across both axes and both diagonals.

use crate::grid::Grid;

/// Rasterize a circle of the given radius.
///
/// Returns a `(2r+1) x (2r+1)` grid with the circle centered on cell
/// `(r, r)`. Cells visited twice during the symmetry sweep (where the two
/// octant halves meet on the diagonals) come out
/// [`Overdrawn`](crate::grid::Cell::Overdrawn); this is deliberate and exact,
/// since which cells double-mark is what separates a correct midpoint circle
/// from an off-by-one one.
///
/// # Panics
///
/// Panics for radii above `(u32::MAX - 1) / 2`, whose `2r + 1` bounding box
/// is wider than a grid dimension can hold.
///
/// # Example
///
/// ```
/// use trazar::raster::rasterize_circle;
///
/// let grid = rasterize_circle(1);
/// assert_eq!(grid.to_string(), ".X.\nX.X\n.X.\n");
/// ```
#[must_use]
pub fn rasterize_circle(radius: u32) -> Grid {
    let r = i64::from(radius);
    let size = u32::try_from(2 * r + 1).unwrap_or_else(|_| {
        panic!(
            "radius {radius} needs a {}-cell-wide grid, exceeding the {}-cell grid dimension limit",
            2 * u64::from(radius) + 1,
            u32::MAX
        )
    });
    let mut grid =
        Grid::new(size, size).expect("circle bounding box is always at least 1x1");

    // All four reflections of the origin coincide; a single mark keeps the
    // center Drawn rather than Overdrawn.
    if radius == 0 {
        grid.mark(0, 0);
        return grid;
    }

    let (mut x, mut y) = (r, 0i64);
    let (mut dx, mut dy) = (1 - 2 * r, 1i64);
    let mut re = 0i64;

    while x >= y {
        for (px, py) in [(x, -y), (-x, y), (-y, -x), (y, x)] {
            grid.mark((py + r) as u32, (px + r) as u32);
        }
        // The second group duplicates the first on the cardinal axes when
        // y == 0; skipping it there keeps axis cells singly marked.
        if y > 0 {
            for (px, py) in [(x, y), (-x, -y), (-y, x), (y, -x)] {
                grid.mark((py + r) as u32, (px + r) as u32);
            }
        }

        y += 1;
        re += dy;
        dy += 2;
        if 2 * re + dx > 0 {
            x -= 1;
            re += dx;
            dx += 2;
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_radius_zero() {
        let grid = rasterize_circle(0);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.get(0, 0), Cell::Drawn);
        assert_eq!(grid.marked_cells().count(), 1);
    }

    #[test]
    fn test_radius_one() {
        let grid = rasterize_circle(1);
        assert_eq!(grid.to_string(), ".X.\nX.X\n.X.\n");
    }

    #[test]
    fn test_radius_two() {
        let grid = rasterize_circle(2);
        assert_eq!(
            grid.to_string(),
            ".XXX.\nX...X\nX...X\nX...X\n.XXX.\n"
        );
    }

    #[test]
    fn test_radius_three_overdraws_diagonals() {
        // The octant walk ends exactly on the diagonal for r = 3, so the two
        // symmetry groups double-mark the four diagonal cells.
        let grid = rasterize_circle(3);
        assert_eq!(
            grid.to_string(),
            "..XXX..\n.O...O.\nX.....X\nX.....X\nX.....X\n.O...O.\n..XXX..\n"
        );
    }

    #[test]
    fn test_dimensions() {
        for r in 0..32 {
            let grid = rasterize_circle(r);
            assert_eq!(grid.height(), 2 * r + 1);
            assert_eq!(grid.width(), 2 * r + 1);
        }
    }

    #[test]
    fn test_cardinal_cells_drawn_once() {
        for r in 1..16u32 {
            let grid = rasterize_circle(r);
            assert_eq!(grid.get(r, 0), Cell::Drawn);
            assert_eq!(grid.get(r, 2 * r), Cell::Drawn);
            assert_eq!(grid.get(0, r), Cell::Drawn);
            assert_eq!(grid.get(2 * r, r), Cell::Drawn);
        }
    }

    #[test]
    #[should_panic(expected = "grid dimension limit")]
    fn test_radius_beyond_grid_dimension_panics() {
        // 2r + 1 exceeds u32::MAX for the first radius past (u32::MAX - 1) / 2
        let _ = rasterize_circle(2_147_483_648);
    }

    #[test]
    fn test_center_stays_empty() {
        for r in 2..16u32 {
            let grid = rasterize_circle(r);
            assert_eq!(grid.get(r, r), Cell::Empty);
        }
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
