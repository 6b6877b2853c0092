// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the lint orchestration.
/// This includes the `Linter` struct that discovers, loads and lints files.
pub mod analyzer;

/// Module defining the run configuration (scan root and extension).
pub mod config;

/// Module defining the fatal and per-file error types.
pub mod error;

/// Module containing the line categorizer.
/// Each physical line is tagged with the kind of declaration it starts.
pub mod lines;

/// Module defining the aggregated report structures.
pub mod report;

/// Module containing file role classification and base name derivation.
pub mod role;

/// Module containing the rule table and naming validators.
pub mod rules;

/// Module defining where files come from.
/// This includes the `FileSource` trait and its filesystem implementation.
pub mod source;

/// Module containing utility functions.
pub mod utils;
