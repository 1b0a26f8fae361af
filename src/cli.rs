//! Command-line interface implementation for pingen.
//! Provides argument parsing using clap and maps the arguments onto a template source.

use crate::constants::{CONFIG_FILE, FIXED_TEMPLATE_DIR, FIXED_TEMPLATE_NAME};
use crate::error::Result;
use crate::loader::TemplateSource;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments structure for pingen.
#[derive(Parser, Debug)]
#[command(author, version, about = "pingen: generate pin-setup sources from config.yaml and .j2 templates", long_about = None)]
pub struct Args {
    /// Configuration file the templates are rendered against
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory searched recursively for templates
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Glob pattern, relative to the root, of templates to skip. May be repeated.
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Generate only the designated setup source instead of searching for templates
    #[arg(long, conflicts_with_all = ["root", "exclude"])]
    pub fixed: bool,

    /// Template used in fixed mode instead of the designated one
    #[arg(short, long, value_name = "FILE", requires = "fixed")]
    pub template: Option<PathBuf>,

    /// Output file used in fixed mode instead of the derived one
    #[arg(short, long, value_name = "FILE", requires = "fixed")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the template source these arguments select.
    pub fn template_source(&self) -> Result<TemplateSource> {
        if !self.fixed {
            return TemplateSource::tree(&self.root, self.exclude.as_slice());
        }

        match (&self.template, &self.output) {
            (None, None) => Ok(TemplateSource::fixed()),
            // an overridden template without an output override derives its output
            (template, output) => Ok(TemplateSource::File {
                template: template
                    .clone()
                    .unwrap_or_else(|| Path::new(FIXED_TEMPLATE_DIR).join(FIXED_TEMPLATE_NAME)),
                output: output.clone(),
            }),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
