//! Errors, configuration and adapters between grids and the outside world

/// Command-line interface for image processing
pub mod cli;
/// Text layout and processing defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG import and export
pub mod image;
/// Batch progress display
pub mod progress;
/// Text rendering of grids
pub mod text;
