//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. One grayscale pixel per
//! cell.

use crate::error::Result;
use crate::grid::{Cell, Grid};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Grayscale shade for a cell: white empty, black drawn, gray overdrawn.
const fn shade(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 255,
        Cell::Drawn => 0,
        Cell::Overdrawn => 128,
    }
}

/// PNG encoder for grid output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a grid to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Self::encode(grid, writer)
    }

    /// Encode a grid to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(grid: &Grid) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(grid, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: std::io::Write>(grid: &Grid, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut pixels = Vec::with_capacity(grid.cell_count());
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                pixels.push(shade(grid.get(row, col)));
            }
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::rasterize_circle;

    #[test]
    fn test_png_to_bytes() {
        let grid = rasterize_circle(10);

        let bytes = PngEncoder::to_bytes(&grid).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_shades_distinct() {
        assert_ne!(shade(Cell::Empty), shade(Cell::Drawn));
        assert_ne!(shade(Cell::Drawn), shade(Cell::Overdrawn));
        assert_ne!(shade(Cell::Empty), shade(Cell::Overdrawn));
    }
}
