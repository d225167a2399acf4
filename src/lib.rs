//! Coordinate, direction and neighbor helpers for small 2D grid puzzles
//!
//! Grids stay plain `Vec<Vec<T>>` values owned by the caller. The crate
//! supplies a `Coord` type with compass stepping and bounds-aware neighbor
//! enumeration, plus free functions to build, rotate, search and index grids.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Scalar distance metrics
pub mod math;
/// Directions, coordinates, neighbor sets and grid functions
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Coord, Direction, NeighborSet, NeighborSet8, Neighborhood};
