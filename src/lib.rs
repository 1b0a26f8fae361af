//! pingen renders a pin-mapping configuration through Jinja-style templates
//! to produce generated source files, such as microcontroller pin setup code.

/// Command-line interface module for pingen
pub mod cli;

/// Loading of the YAML configuration tree
pub mod config;

/// Conventional file and folder names
pub mod constants;

/// Error types and handling for pingen
pub mod error;

/// Exclude patterns for recursive template discovery
pub mod ignore;

/// Template discovery
/// Produces one generation job per template, either:
/// - every `.j2` file under a root directory
/// - a single designated template
pub mod loader;

/// Logger initialisation
pub mod logger;

/// Output path resolution and the generation pipeline
pub mod processor;

/// Template rendering with the `pinbank` and `pinno` filters
pub mod renderer;

/// Writing generated files to disk
pub mod writer;
