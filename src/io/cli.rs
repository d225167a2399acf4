//! Command-line interface for inspecting and transforming character grids

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use crate::io::configuration::STDOUT_DESTINATION;
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::text::{parse_char_grid, render_char_grid};
use crate::spatial::coord::Coord;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{
    GridDimensions, find_indices_2d, get_value_at, grid_dimensions, rotate_matrix_90, transpose,
};
use crate::spatial::neighbors::Neighborhood;

/// Whole-grid transformation applied before reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Swap rows and columns
    Transpose,
    /// Rotate 90 degrees clockwise
    #[value(name = "cw")]
    Clockwise,
    /// Rotate 90 degrees counter-clockwise
    #[value(name = "ccw")]
    CounterClockwise,
}

impl Transform {
    /// Produce the transformed copy of `grid`
    pub fn apply<T: Clone>(self, grid: &[Vec<T>]) -> Vec<Vec<T>> {
        match self {
            Self::Transpose => transpose(grid),
            Self::Clockwise => rotate_matrix_90(grid, true),
            Self::CounterClockwise => rotate_matrix_90(grid, false),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gridkit")]
#[command(author, version, about = "Inspect and transform character grids")]
/// Command-line arguments for the grid inspection tool
pub struct Cli {
    /// Text file holding one grid row per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Transformations to apply, in order
    #[arg(short, long = "transform", value_enum, value_name = "TRANSFORM")]
    pub transforms: Vec<Transform>,

    /// Report every cell holding this character
    #[arg(short, long, value_name = "CHAR")]
    pub find: Option<char>,

    /// Report the neighbors of this cell (after transforms)
    #[arg(short, long, value_name = "ROW,COL", allow_hyphen_values = true)]
    pub neighbors: Option<Coord>,

    /// Include diagonal neighbors
    #[arg(short, long)]
    pub moore: bool,

    /// Restrict the neighbor report to these directions
    #[arg(short, long = "direction", value_name = "DIR")]
    pub directions: Vec<Direction>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if a direction passes the `--direction` filter
    pub fn wants_direction(&self, direction: Direction) -> bool {
        self.directions.is_empty() || self.directions.contains(&direction)
    }
}

/// Loads a grid file and writes the requested report
pub struct GridProcessor {
    cli: Cli,
}

impl GridProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the report, writing to `--output` or stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, if the
    /// neighbor origin is outside the grid, or if writing the report fails
    pub fn process(&self) -> Result<()> {
        if let Some(path) = &self.cli.output {
            let file = File::create(path).with_path(path, "create")?;
            let mut writer = BufWriter::new(file);
            self.run(&mut writer, path)?;
            writer.flush().with_path(path, "write")
        } else {
            let stdout = std::io::stdout();
            self.run(&mut stdout.lock(), Path::new(STDOUT_DESTINATION))
        }
    }

    /// Load, transform and report into `out`
    ///
    /// `destination` names `out` in write errors.
    ///
    /// # Errors
    ///
    /// Same as [`GridProcessor::process`]
    pub fn run<W: Write>(&self, out: &mut W, destination: &Path) -> Result<()> {
        let grid = self.load_grid()?;
        let grid = self.apply_transforms(grid);
        let report = self.build_report(&grid)?;
        out.write_all(report.as_bytes()).with_path(destination, "write")
    }

    /// Read and parse the input file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or not a rectangular grid
    pub fn load_grid(&self) -> Result<Vec<Vec<char>>> {
        let path = &self.cli.input;
        let text = std::fs::read_to_string(path).with_path(path, "read")?;
        let grid = parse_char_grid(&text)?;

        let GridDimensions { height, width } = grid_dimensions(&grid);
        info!("Loaded {height}x{width} grid from {}", path.display());

        Ok(grid)
    }

    /// Apply every `--transform` in order
    pub fn apply_transforms(&self, grid: Vec<Vec<char>>) -> Vec<Vec<char>> {
        self.cli.transforms.iter().fold(grid, |current, transform| {
            debug!("Applying {transform:?}");
            transform.apply(&current)
        })
    }

    /// Render the grid followed by search and neighbor sections
    ///
    /// # Errors
    ///
    /// Returns an error if the neighbor origin is outside the grid
    pub fn build_report(&self, grid: &[Vec<char>]) -> Result<String> {
        let mut lines = Vec::new();

        if let Some(target) = self.cli.find {
            let matches = find_indices_2d(grid, |&cell| cell == target);
            lines.push(format!("found {} '{target}'", matches.len()));
            lines.extend(matches.iter().map(ToString::to_string));
        }

        if let Some(origin) = self.cli.neighbors {
            let GridDimensions { height, width } = grid_dimensions(grid);
            if !origin.within_2d_grid(height, width) {
                return Err(invalid_parameter(
                    "neighbors",
                    &origin,
                    &format!("outside the {height}x{width} grid"),
                ));
            }

            lines.push(format!("neighbors of {origin}"));
            if self.cli.moore {
                lines.extend(self.neighbor_lines(&origin.moore_neighbors(height, width), grid));
            } else {
                for direction in self.cli.directions.iter().filter(|d| d.is_diagonal()) {
                    warn!("Ignoring diagonal direction {direction} without --moore");
                }
                lines.extend(self.neighbor_lines(&origin.neumann_neighbors(height, width), grid));
            }
        }

        let mut report = render_char_grid(grid);
        for line in lines {
            report.push_str(&line);
            report.push('\n');
        }
        Ok(report)
    }

    fn neighbor_lines<N: Neighborhood>(&self, neighbors: &N, grid: &[Vec<char>]) -> Vec<String> {
        neighbors
            .to_entries()
            .into_iter()
            .filter(|&(direction, _)| self.cli.wants_direction(direction))
            .filter_map(|(direction, coord)| {
                get_value_at(grid, coord).map(|cell| format!("{direction} {coord} '{cell}'"))
            })
            .collect()
    }
}
