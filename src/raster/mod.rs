//! Integer rasterization of geometric primitives.
//!
//! Both rasterizers are pure functions: each call allocates and returns a
//! fresh [`crate::grid::Grid`] sized exactly to the shape it draws.

mod circle;
mod line;

pub use circle::rasterize_circle;
pub use line::rasterize_line;
