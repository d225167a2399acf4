//! Input/output, configuration and error handling
//!
//! This module contains everything outside the pure grid helpers:
//! - Error types shared by the whole crate
//! - Text grid parsing and rendering
//! - Command-line interface and logger setup

/// Command-line parsing and report generation
pub mod cli;
/// Limits and formatting constants
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Logger initialisation
pub mod logging;
/// Character grid parsing and rendering
pub mod text;
