//! Conversion between plain text and character grids

use log::debug;

use crate::io::configuration::{CELL_PLACEHOLDER, MAX_GRID_DIMENSION};
use crate::io::error::{GridError, Result};
use crate::spatial::grid::{GridDimensions, grid_dimensions};

/// Parse text into a character grid, one row per line
///
/// Carriage returns are stripped and trailing blank lines are ignored.
///
/// # Errors
///
/// Returns [`GridError::RaggedGrid`] if lines differ in length and
/// [`GridError::GridTooLarge`] if either dimension exceeds
/// [`MAX_GRID_DIMENSION`]
pub fn parse_char_grid(text: &str) -> Result<Vec<Vec<char>>> {
    let mut grid: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .collect();

    while grid.last().is_some_and(Vec::is_empty) {
        grid.pop();
    }

    let GridDimensions { height, width } = grid_dimensions(&grid);
    if height > MAX_GRID_DIMENSION || width > MAX_GRID_DIMENSION {
        return Err(GridError::GridTooLarge {
            height,
            width,
            limit: MAX_GRID_DIMENSION,
        });
    }

    if let Some((row, found)) = grid
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(GridError::RaggedGrid {
            row,
            expected: width,
            found,
        });
    }

    debug!("Parsed {height}x{width} character grid");
    Ok(grid)
}

/// Render a character grid as text, one line per row
///
/// Rows shorter than row 0 are padded with [`CELL_PLACEHOLDER`].
pub fn render_char_grid(grid: &[Vec<char>]) -> String {
    let width = grid_dimensions(grid).width;
    let mut out = String::with_capacity(grid.len() * (width + 1));

    for row in grid {
        out.extend(row.iter());
        out.extend(std::iter::repeat_n(
            CELL_PLACEHOLDER,
            width.saturating_sub(row.len()),
        ));
        out.push('\n');
    }

    out
}
