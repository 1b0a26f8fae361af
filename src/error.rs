//! Error handling for pingen.
//! Defines the error taxonomy and the result type used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating files.
///
/// Every variant is terminal for the run: the generator stops at the first
/// error and reports which stage and which file failed.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file does not exist
    #[error("Configuration file '{path}' does not exist.")]
    ConfigNotFoundError { path: PathBuf },

    /// The configuration file exists but is not valid YAML or not a mapping
    #[error("Failed to parse configuration file '{path}': {reason}.")]
    ConfigParseError { path: PathBuf, reason: String },

    /// The configuration file exists but could not be read
    #[error("Failed to read configuration file '{path}': {source}.")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template file could not be found
    #[error("Template '{path}' does not exist.")]
    TemplateNotFoundError { path: PathBuf },

    /// A template's file name cannot be handed to the template loader
    #[error("Template file name '{path}' is not valid UTF-8.")]
    TemplateNameError { path: PathBuf },

    /// A template could not be parsed
    #[error("Syntax error in template '{path}': {source}.")]
    TemplateSyntaxError {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// A template failed while being rendered against the configuration
    #[error("Failed to render template '{path}': {source}.")]
    TemplateRenderError {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// The rendered output could not be written
    #[error("Failed to write '{path}': {source}.")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two templates resolve to the same output file
    #[error("Templates '{first}' and '{second}' both generate '{output}'.")]
    OutputCollisionError { output: PathBuf, first: PathBuf, second: PathBuf },

    /// An exclude pattern is not a valid glob
    #[error("Invalid exclude pattern '{pattern}': {source}.")]
    IgnorePatternError {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The template tree could not be walked
    #[error("Failed to search for templates under '{root}': {source}.")]
    DiscoveryError {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Convenience type alias for Results with pingen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
