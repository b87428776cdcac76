//! Output encoders.
//!
//! Text output is [`crate::grid::Grid::render`] itself; this module adds a
//! PNG dump for inspecting grids too large to eyeball as text.

mod png_encoder;

pub use png_encoder::PngEncoder;
