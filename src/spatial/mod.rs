//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Compass directions and their lookup tables
//! - Coordinates and neighbor derivation
//! - Free functions over caller-owned grids
//! - Dense array interop

/// Conversions to and from `ndarray::Array2`
pub mod array;
/// Row/column coordinates
pub mod coord;
/// Compass directions
pub mod direction;
/// Grid construction, transformation and bounds-checked access
pub mod grid;
/// Fixed-shape neighbor records
pub mod neighbors;

pub use coord::Coord;
pub use direction::Direction;
pub use neighbors::{NeighborSet, NeighborSet8, Neighborhood};
