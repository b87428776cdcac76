//! Rotating-line sweep driver.
//!
//! Reusable form of the reference driver that rasterizes the diameters of a
//! circle over a full revolution, one grid per step. Kept mainly as a
//! deterministic fixture generator for tests and visual inspection; the
//! rasterizers themselves never consume it.

use crate::grid::Grid;
use crate::raster::rasterize_line;

/// A full-revolution sweep of rasterized diameter lines.
///
/// Step `i` of `steps` rasterizes the segment from
/// `(-radius*cos t, -radius*sin t)` to `(radius*cos t, radius*sin t)` with
/// `t = 2*pi*i/steps`, endpoints truncated toward zero. Fully deterministic:
/// identical parameters always produce identical grids.
///
/// # Example
///
/// ```
/// use trazar::sweep::LineSweep;
///
/// let sweep = LineSweep::new(5.0, 360);
/// assert_eq!(sweep.grids().count(), 360);
/// // Step 0 is the horizontal diameter
/// let first = sweep.grids().next().unwrap();
/// assert_eq!(first.to_string(), "XXXXXXXXXXX\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSweep {
    /// Sweep radius in cells.
    radius: f64,
    /// Number of angular steps over the full revolution.
    steps: u32,
}

impl LineSweep {
    /// Create a sweep with the given radius and step count.
    #[must_use]
    pub const fn new(radius: f64, steps: u32) -> Self {
        Self { radius, steps }
    }

    /// Lazily rasterize one grid per angular step.
    pub fn grids(&self) -> impl Iterator<Item = Grid> + '_ {
        (0..self.steps).map(move |i| {
            let t = std::f64::consts::TAU * f64::from(i) / f64::from(self.steps);
            let (ex, ey) = (self.radius * t.cos(), self.radius * t.sin());
            rasterize_line(-ex as i32, -ey as i32, ex as i32, ey as i32)
        })
    }
}
