//! Compass directions and their lookup tables
//!
//! Directions are laid out on a row/column grid: North decreases the row,
//! East increases the column. Diagonal steps move one row and one column
//! at once, so every direction maps to a unit vector in taxicab space.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GridError, Result};
use crate::spatial::coord::Coord;

/// One of the eight compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row - 1
    North,
    /// Col + 1
    East,
    /// Row + 1
    South,
    /// Col - 1
    West,
    /// Row - 1, col + 1
    NorthEast,
    /// Row + 1, col + 1
    SouthEast,
    /// Row + 1, col - 1
    SouthWest,
    /// Row - 1, col - 1
    NorthWest,
}

impl Direction {
    /// All directions in compass order starting at North
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four cardinal directions in N, E, S, W order
    pub const CARDINALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four diagonal directions in NE, SE, SW, NW order
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Unit delta for a single step in this direction
    pub const fn to_vector(self) -> Coord {
        let (row, col) = match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::NorthEast => (-1, 1),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (1, -1),
            Self::NorthWest => (-1, -1),
        };
        Coord::new(row, col)
    }

    /// Direction whose unit vector is `(row, col)`
    ///
    /// Returns `None` for anything other than the eight unit vectors,
    /// including the zero vector.
    pub const fn from_vector(row: i32, col: i32) -> Option<Self> {
        match (row, col) {
            (-1, 0) => Some(Self::North),
            (0, 1) => Some(Self::East),
            (1, 0) => Some(Self::South),
            (0, -1) => Some(Self::West),
            (-1, 1) => Some(Self::NorthEast),
            (1, 1) => Some(Self::SouthEast),
            (1, -1) => Some(Self::SouthWest),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// Rotate 90 degrees counter-clockwise
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDirection`] for diagonal directions
    pub const fn turn_left(self) -> Result<Self> {
        match self {
            Self::North => Ok(Self::West),
            Self::West => Ok(Self::South),
            Self::South => Ok(Self::East),
            Self::East => Ok(Self::North),
            _ => Err(GridError::InvalidDirection {
                operation: "turn_left",
                direction: self,
            }),
        }
    }

    /// Rotate 90 degrees clockwise
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDirection`] for diagonal directions
    pub const fn turn_right(self) -> Result<Self> {
        match self {
            Self::North => Ok(Self::East),
            Self::East => Ok(Self::South),
            Self::South => Ok(Self::West),
            Self::West => Ok(Self::North),
            _ => Err(GridError::InvalidDirection {
                operation: "turn_right",
                direction: self,
            }),
        }
    }

    /// Opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Whether this is one of N, E, S, W
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// Whether this is one of NE, SE, SW, NW
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Short compass label (`"N"`, `"NE"`, ...)
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Accepts abbreviations and full names in any case, with or without
    /// separators in the compound names (`"ne"`, `"NorthEast"`, `"north-east"`)
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "n" | "north" => Ok(Self::North),
            "e" | "east" => Ok(Self::East),
            "s" | "south" => Ok(Self::South),
            "w" | "west" => Ok(Self::West),
            "ne" | "northeast" => Ok(Self::NorthEast),
            "se" | "southeast" => Ok(Self::SouthEast),
            "sw" | "southwest" => Ok(Self::SouthWest),
            "nw" | "northwest" => Ok(Self::NorthWest),
            _ => Err(GridError::UnknownDirection {
                input: s.to_string(),
            }),
        }
    }
}
