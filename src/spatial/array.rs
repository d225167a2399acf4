//! Conversions between row vectors and dense `ndarray` matrices
//!
//! Dense arrays require a true rectangle, so jagged input is rejected here
//! instead of being read from row 0 as the free grid functions do.

use ndarray::Array2;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::{GridDimensions, grid_dimensions};

/// Copy a row-major grid into an `Array2` indexed by `[row, col]`
///
/// # Errors
///
/// Returns [`GridError::RaggedGrid`] if any row differs in length from row 0
pub fn to_array2<T: Clone>(grid: &[Vec<T>]) -> Result<Array2<T>> {
    let GridDimensions { height, width } = grid_dimensions(grid);

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

    let cells: Vec<T> = grid.iter().flatten().cloned().collect();
    Ok(Array2::from_shape_vec((height, width), cells)?)
}

/// Copy an `Array2` back into row vectors
pub fn from_array2<T: Clone>(array: &Array2<T>) -> Vec<Vec<T>> {
    array.rows().into_iter().map(|row| row.to_vec()).collect()
}
