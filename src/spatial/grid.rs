//! Free functions over caller-owned row-major grids
//!
//! A grid is a `Vec<Vec<T>>` (or a slice of rows) owned by the caller. Height
//! is the number of rows and width is the length of row 0, recomputed on
//! every call. Rectangular input is assumed; jagged grids never cause a
//! panic, but cells past the end of a short row are simply missing.

use crate::spatial::coord::Coord;

/// Height and width of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDimensions {
    /// Number of rows
    pub height: usize,
    /// Number of columns in row 0
    pub width: usize,
}

/// Measure a grid; width is 0 for an empty grid
pub fn grid_dimensions<T>(grid: &[Vec<T>]) -> GridDimensions {
    GridDimensions {
        height: grid.len(),
        width: grid.first().map_or(0, Vec::len),
    }
}

/// Check `0 <= row < height` and `0 <= col < width`
pub fn within_2d_grid(row: i32, col: i32, height: usize, width: usize) -> bool {
    usize::try_from(row).is_ok_and(|r| r < height)
        && usize::try_from(col).is_ok_and(|c| c < width)
}

/// Check whether `coord` addresses a cell of `grid`
pub fn contains_coord<T>(grid: &[Vec<T>], coord: Coord) -> bool {
    let GridDimensions { height, width } = grid_dimensions(grid);
    coord.within_2d_grid(height, width)
}

/// Build a `rows` x `cols` grid with every cell set to a clone of `fill_value`
///
/// Cells are independent clones, so for plain values each cell can be
/// changed on its own. Shared-pointer cell types (`Rc<RefCell<_>>`) clone
/// the pointer, leaving every cell aliasing a single value. Use
/// [`create_matrix_with`] to build one value per cell.
pub fn create_filled_matrix<T: Clone>(rows: usize, cols: usize, fill_value: T) -> Vec<Vec<T>> {
    vec![vec![fill_value; cols]; rows]
}

/// Build a `rows` x `cols` grid calling `factory` once per cell in row-major order
pub fn create_matrix_with<T, F>(rows: usize, cols: usize, mut factory: F) -> Vec<Vec<T>>
where
    F: FnMut(Coord) -> T,
{
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| factory(Coord::from_indices(row, col)))
                .collect()
        })
        .collect()
}

/// Swap rows and columns
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = grid_dimensions(matrix).width;

    (0..width)
        .map(|col| {
            matrix
                .iter()
                .filter_map(|row| row.get(col).cloned())
                .collect()
        })
        .collect()
}

/// Rotate a grid by 90 degrees
///
/// Clockwise transposes then reverses each row. Counter-clockwise
/// transposes then reverses the order of the rows.
pub fn rotate_matrix_90<T: Clone>(matrix: &[Vec<T>], clockwise: bool) -> Vec<Vec<T>> {
    let mut rotated = transpose(matrix);

    if clockwise {
        for row in &mut rotated {
            row.reverse();
        }
    } else {
        rotated.reverse();
    }

    rotated
}

/// Apply `f` to every cell, preserving shape
pub fn map_2d_grid<T, U, F>(grid: &[Vec<T>], mut f: F) -> Vec<Vec<U>>
where
    F: FnMut(&T) -> U,
{
    grid.iter()
        .map(|row| row.iter().map(&mut f).collect())
        .collect()
}

/// All coordinates whose cell satisfies `predicate`, in row-major order
pub fn find_indices_2d<T, P>(grid: &[Vec<T>], mut predicate: P) -> Vec<Coord>
where
    P: FnMut(&T) -> bool,
{
    let width = grid_dimensions(grid).width;

    grid.iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            row.iter()
                .take(width)
                .enumerate()
                .map(move |(col_index, cell)| (Coord::from_indices(row_index, col_index), cell))
        })
        .filter_map(|(coord, cell)| predicate(cell).then_some(coord))
        .collect()
}

/// Read the cell at `coord`, `None` when out of bounds
pub fn get_value_at<T>(matrix: &[Vec<T>], coord: Coord) -> Option<&T> {
    if !contains_coord(matrix, coord) {
        return None;
    }

    let (row, col) = coord.to_indices()?;
    matrix.get(row)?.get(col)
}

/// Overwrite the cell at `coord`
///
/// Returns `false` and leaves the grid untouched when `coord` is out of bounds.
pub fn set_value_at<T>(matrix: &mut [Vec<T>], coord: Coord, value: T) -> bool {
    if !contains_coord(matrix, coord) {
        return false;
    }

    let Some(cell) = coord
        .to_indices()
        .and_then(|(row, col)| matrix.get_mut(row)?.get_mut(col))
    else {
        return false;
    };

    *cell = value;
    true
}

/// Copy each row into a new vector
///
/// Cells are cloned one level deep: plain values are independent in the
/// copy, while shared-pointer cell types still point at the original values.
pub fn copy_2d_grid<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    grid.iter().map(Clone::clone).collect()
}
