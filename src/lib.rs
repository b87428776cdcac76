//! # Trazar
//!
//! Integer-only rasterization of lines and circles onto tri-state text grids.
//!
//! Given integer endpoints (lines) or an integer radius (circles), trazar
//! produces a minimal bitmap approximation of the ideal continuous shape
//! using incremental-error arithmetic only: no floating point anywhere in the
//! core, so there is no rounding drift and every marked cell is exactly
//! reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use trazar::prelude::*;
//!
//! let line = rasterize_line(0, 0, 3, 5);
//! let circle = rasterize_circle(3);
//!
//! // Render to text: `.` empty, `X` drawn, `O` overdrawn
//! print!("{line}");
//! assert_eq!(circle.height(), 7);
//! ```
//!
//! ## Cell marks
//!
//! Grids are tri-state rather than boolean: a cell visited twice in one pass
//! becomes [`grid::Cell::Overdrawn`] and renders with a distinct symbol. The
//! circle rasterizer's eightfold symmetry revisits cells where octant halves
//! meet, and preserving that artifact is what lets a test tell a correct
//! midpoint circle from an off-by-one one.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or
//!   hyperbolae with a digital plotter." *The Computer Journal*, 10(3).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Tri-state cell marks and the raster grid.
pub mod grid;

/// Line and circle rasterizers.
pub mod raster;

// ============================================================================
// Driver & Output Modules
// ============================================================================

/// Rotating-line sweep fixture generator.
pub mod sweep;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazar operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trazar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Cell, Grid};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{rasterize_circle, rasterize_line};
    pub use crate::sweep::LineSweep;
}
