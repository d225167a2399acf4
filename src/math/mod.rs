//! Mathematical utilities for grid geometry

/// Manhattan and Euclidean distance on scalar point pairs
pub mod distance;
