//! Fixed-shape neighbor records with named access per direction
//!
//! A neighbor set is computed once for a specific coordinate and grid
//! extent. Slots that would fall outside the grid hold `None`; nothing is
//! re-validated if the grid later changes size.

use crate::spatial::coord::Coord;
use crate::spatial::direction::Direction;

/// Shared views over the fixed-arity neighbor records
pub trait Neighborhood {
    /// Directions held by this record, in construction order
    const DIRECTIONS: &'static [Direction];

    /// Neighbor in `direction`, `None` if absent or not held by this record
    fn get(&self, direction: Direction) -> Option<Coord>;

    /// Present `(direction, coord)` pairs in construction order
    fn to_entries(&self) -> Vec<(Direction, Coord)> {
        Self::DIRECTIONS
            .iter()
            .filter_map(|&direction| self.get(direction).map(|coord| (direction, coord)))
            .collect()
    }

    /// Present neighbors in construction order
    fn to_array(&self) -> Vec<Coord> {
        Self::DIRECTIONS
            .iter()
            .filter_map(|&direction| self.get(direction))
            .collect()
    }

    /// Present neighbors accepted by `predicate`
    fn filter<P>(&self, mut predicate: P) -> Vec<Coord>
    where
        P: FnMut(&Coord) -> bool,
    {
        self.to_array()
            .into_iter()
            .filter(|coord| predicate(coord))
            .collect()
    }

    /// Number of in-bounds neighbors
    fn len_present(&self) -> usize {
        Self::DIRECTIONS
            .iter()
            .filter(|&&direction| self.get(direction).is_some())
            .count()
    }
}

/// The 4 orthogonal (von Neumann) neighbors of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborSet {
    /// Row - 1
    pub north: Option<Coord>,
    /// Col + 1
    pub east: Option<Coord>,
    /// Row + 1
    pub south: Option<Coord>,
    /// Col - 1
    pub west: Option<Coord>,
}

impl NeighborSet {
    /// All slots in N, E, S, W order, absent ones included
    pub const fn to_array_all(&self) -> [Option<Coord>; 4] {
        [self.north, self.east, self.south, self.west]
    }
}

impl Neighborhood for NeighborSet {
    const DIRECTIONS: &'static [Direction] = &Direction::CARDINALS;

    fn get(&self, direction: Direction) -> Option<Coord> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::NorthEast
            | Direction::SouthEast
            | Direction::SouthWest
            | Direction::NorthWest => None,
        }
    }
}

/// All 8 surrounding (Moore) neighbors of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborSet8 {
    /// Row - 1
    pub north: Option<Coord>,
    /// Row - 1, col + 1
    pub north_east: Option<Coord>,
    /// Col + 1
    pub east: Option<Coord>,
    /// Row + 1, col + 1
    pub south_east: Option<Coord>,
    /// Row + 1
    pub south: Option<Coord>,
    /// Row + 1, col - 1
    pub south_west: Option<Coord>,
    /// Col - 1
    pub west: Option<Coord>,
    /// Row - 1, col - 1
    pub north_west: Option<Coord>,
}

impl NeighborSet8 {
    /// All slots in compass order from North, absent ones included
    pub const fn to_array_all(&self) -> [Option<Coord>; 8] {
        [
            self.north,
            self.north_east,
            self.east,
            self.south_east,
            self.south,
            self.south_west,
            self.west,
            self.north_west,
        ]
    }

    /// Drop the diagonal slots
    pub const fn cardinal_only(&self) -> NeighborSet {
        NeighborSet {
            north: self.north,
            east: self.east,
            south: self.south,
            west: self.west,
        }
    }
}

impl Neighborhood for NeighborSet8 {
    const DIRECTIONS: &'static [Direction] = &Direction::ALL;

    fn get(&self, direction: Direction) -> Option<Coord> {
        match direction {
            Direction::North => self.north,
            Direction::NorthEast => self.north_east,
            Direction::East => self.east,
            Direction::SouthEast => self.south_east,
            Direction::South => self.south,
            Direction::SouthWest => self.south_west,
            Direction::West => self.west,
            Direction::NorthWest => self.north_west,
        }
    }
}
