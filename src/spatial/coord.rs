//! Immutable row/column coordinates with arithmetic and neighbor derivation

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::io::configuration::COORD_SEPARATOR;
use crate::io::error::{GridError, Result};
use crate::math::distance::{euclidean_distance, manhattan_distance};
use crate::spatial::direction::Direction;
use crate::spatial::neighbors::{NeighborSet, NeighborSet8};

/// A position on a 2D grid, or a delta between two positions
///
/// Every operation returns a new value. Rows grow downwards and columns
/// grow to the right, matching `grid[row][col]` indexing. Arithmetic
/// saturates at the `i32` limits, so a result clamped there is still off
/// any realistic grid rather than wrapping back onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (0 is the top row)
    pub row: i32,
    /// Column index (0 is the leftmost column)
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from signed components
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Create a coordinate from grid indices
    pub const fn from_indices(row: usize, col: usize) -> Self {
        Self::new(row as i32, col as i32)
    }

    /// Component-wise sum
    // Named method mirrors the `+` operator for call sites without `std::ops::Add` in scope
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self::new(
            self.row.saturating_add(other.row),
            self.col.saturating_add(other.col),
        )
    }

    /// Component-wise difference
    #[must_use]
    pub const fn subtract(self, other: Self) -> Self {
        Self::new(
            self.row.saturating_sub(other.row),
            self.col.saturating_sub(other.col),
        )
    }

    /// Structural equality on both components
    pub const fn equals(self, other: Self) -> bool {
        self.row == other.row && self.col == other.col
    }

    /// Components as `[row, col]`
    pub const fn to_array(self) -> [i32; 2] {
        [self.row, self.col]
    }

    /// Components as grid indices, `None` if either is negative
    pub fn to_indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some((row, col))
    }

    /// One step in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        self.add(direction.to_vector())
    }

    /// One step in `direction`, `None` if a component would overflow
    pub const fn checked_step(self, direction: Direction) -> Option<Self> {
        let delta = direction.to_vector();
        match (
            self.row.checked_add(delta.row),
            self.col.checked_add(delta.col),
        ) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }

    /// `n` steps in `direction`
    ///
    /// Negative `n` walks the opposite way; zero returns an equal copy.
    #[must_use]
    pub const fn step_n(self, direction: Direction, n: i32) -> Self {
        self.add(direction.to_vector().scale(n))
    }

    /// Both components multiplied by `factor`
    #[must_use]
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(
            self.row.saturating_mul(factor),
            self.col.saturating_mul(factor),
        )
    }

    /// Taxicab distance to `other`
    ///
    /// Computed in `i64` so coordinates at opposite `i32` limits still
    /// have a representable distance.
    pub fn manhattan_distance(self, other: Self) -> i64 {
        manhattan_distance(
            i64::from(self.row),
            i64::from(self.col),
            i64::from(other.row),
            i64::from(other.col),
        )
    }

    /// Straight-line distance to `other`
    pub fn euclidean_distance(self, other: Self) -> f64 {
        euclidean_distance(self.row, self.col, other.row, other.col)
    }

    /// Check if this coordinate lies inside a `grid_height` x `grid_width` grid
    pub fn within_2d_grid(self, grid_height: usize, grid_width: usize) -> bool {
        crate::spatial::grid::within_2d_grid(self.row, self.col, grid_height, grid_width)
    }

    /// The 4 orthogonal neighbors, absent where they fall outside the grid
    pub fn neumann_neighbors(self, grid_height: usize, grid_width: usize) -> NeighborSet {
        let slot = |direction| self.bounded_step(direction, grid_height, grid_width);

        NeighborSet {
            north: slot(Direction::North),
            east: slot(Direction::East),
            south: slot(Direction::South),
            west: slot(Direction::West),
        }
    }

    /// All 8 surrounding neighbors, absent where they fall outside the grid
    pub fn moore_neighbors(self, grid_height: usize, grid_width: usize) -> NeighborSet8 {
        let slot = |direction| self.bounded_step(direction, grid_height, grid_width);

        NeighborSet8 {
            north: slot(Direction::North),
            north_east: slot(Direction::NorthEast),
            east: slot(Direction::East),
            south_east: slot(Direction::SouthEast),
            south: slot(Direction::South),
            south_west: slot(Direction::SouthWest),
            west: slot(Direction::West),
            north_west: slot(Direction::NorthWest),
        }
    }

    fn bounded_step(
        self,
        direction: Direction,
        grid_height: usize,
        grid_width: usize,
    ) -> Option<Self> {
        self.checked_step(direction)
            .filter(|next| next.within_2d_grid(grid_height, grid_width))
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::add(self, other)
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        self.scale(factor)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<[i32; 2]> for Coord {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{COORD_SEPARATOR}{})", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = GridError;

    /// Parses `"(row,col)"` or the bare `"row,col"` form
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GridError::InvalidCoord {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (row, col) = inner.split_once(COORD_SEPARATOR).ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_parse_error| invalid())?;
        let col = col.trim().parse().map_err(|_parse_error| invalid())?;

        Ok(Self::new(row, col))
    }
}
