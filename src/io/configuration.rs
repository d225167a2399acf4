//! Parsing limits, output formatting constants and logging defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed rows or columns in a text grid
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Separator between row and column in coordinate text
pub const COORD_SEPARATOR: char = ',';

// Only reachable when rendering a grid whose rows differ in length
/// Cell written in place of a missing cell when rendering
pub const CELL_PLACEHOLDER: char = ' ';

/// Destination name reported when writing to stdout fails
pub const STDOUT_DESTINATION: &str = "<stdout>";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter used under `--quiet` when `RUST_LOG` is unset
pub const QUIET_LOG_LEVEL: &str = "warn";
