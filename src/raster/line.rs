//! Line segment rasterization.
//!
//! Implements Bresenham's incremental-error algorithm, generalized to all 8
//! octants by normalizing into canonical space (non-negative direction,
//! shallow slope) and mapping each walked point back through a pure placement
//! function.

use crate::grid::Grid;

/// How a segment maps between canonical walk space and grid coordinates.
///
/// The walk itself always runs along the major axis from 0 to `major`
/// inclusive with the minor coordinate in `[0, minor]`. `place` undoes, in
/// order, the tall-swap and the two independent axis negations. Each negation
/// mirrors its axis's walk coordinate as `extent - coordinate`; the y mapping
/// is additionally flipped so that larger y lands on a smaller row index
/// (row 0 is the top of the rendered dump).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Orientation {
    /// Segment runs right-to-left (`x0 > x1`).
    neg_x: bool,
    /// Segment runs top-to-bottom in y terms (`y0 > y1`).
    neg_y: bool,
    /// Slope steeper than 1; axis roles swapped for the walk.
    tall: bool,
    /// Extent along the walked (major) axis.
    major: i64,
    /// Extent along the other (minor) axis.
    minor: i64,
}

impl Orientation {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let neg_x = x0 > x1;
        let neg_y = y0 > y1;
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = (i64::from(y1) - i64::from(y0)).abs();
        let tall = dx < dy;
        let (major, minor) = if tall { (dy, dx) } else { (dx, dy) };

        Self {
            neg_x,
            neg_y,
            tall,
            major,
            minor,
        }
    }

    /// Grid height for the bounding box.
    fn rows(self) -> u32 {
        let extent = if self.tall { self.major } else { self.minor };
        Self::dimension(extent)
    }

    /// Grid width for the bounding box.
    fn cols(self) -> u32 {
        let extent = if self.tall { self.minor } else { self.major };
        Self::dimension(extent)
    }

    /// A span of `extent + 1` cells as a grid dimension.
    ///
    /// The only endpoint pairs this rejects span more than `u32::MAX` cells
    /// along an axis (the extreme ends of the `i32` domain); wrapping instead
    /// would misplace every cell of the walk.
    fn dimension(extent: i64) -> u32 {
        u32::try_from(extent + 1).unwrap_or_else(|_| {
            panic!(
                "segment spans {} cells along one axis, exceeding the {}-cell grid dimension limit",
                extent + 1,
                u32::MAX
            )
        })
    }

    /// Map a canonical walk point to its `(row, col)` grid cell.
    fn place(self, x: i64, y: i64) -> (u32, u32) {
        let col = if self.neg_x {
            if self.tall {
                self.minor - y
            } else {
                self.major - x
            }
        } else if self.tall {
            y
        } else {
            x
        };

        let row = if self.neg_y {
            if self.tall {
                x
            } else {
                y
            }
        } else if self.tall {
            self.major - x
        } else {
            self.minor - y
        };

        (row as u32, col as u32)
    }
}

/// Rasterize the segment from `(x0, y0)` to `(x1, y1)`.
///
/// Returns the unique minimal grid containing the discrete approximation of
/// the segment, translated so the bounding box's minimum corner maps to grid
/// cell `(0, 0)`. Endpoints may be equal (a single-point segment yields a 1x1
/// grid) and may have any sign or ordering; the path is 4-connected and
/// minimally thick for every slope.
///
/// # Panics
///
/// Panics if the segment spans more than `u32::MAX` cells along an axis
/// (endpoints at the extreme ends of the `i32` domain), since the bounding
/// box is then wider than a grid dimension can hold.
///
/// # Example
///
/// ```
/// use trazar::raster::rasterize_line;
///
/// let grid = rasterize_line(0, 0, 5, 0);
/// assert_eq!(grid.to_string(), "XXXXXX\n");
/// ```
#[must_use]
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Grid {
    let orient = Orientation::new(x0, y0, x1, y1);
    let mut grid = Grid::new(orient.rows(), orient.cols())
        .expect("line bounding box is always at least 1x1");

    // Incremental error walk in canonical space. Tie-break: y advances
    // whenever d >= 0, checked after marking, before the unconditional
    // d += minor.
    let mut d = orient.minor - orient.major;
    let mut y = 0i64;
    for x in 0..=orient.major {
        let (row, col) = orient.place(x, y);
        grid.mark(row, col);

        if d >= 0 {
            y += 1;
            d -= orient.major;
        }
        d += orient.minor;
    }

    grid
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
