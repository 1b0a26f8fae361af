//! Core generation pipeline.
//! Resolves where each template's output goes, rejects colliding outputs,
//! then renders and writes every job in order, stopping at the first failure.
use crate::config::load_config;
use crate::constants::{TEMPLATES_DIR, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use crate::loader::TemplateSource;
use crate::renderer::TemplateRenderer;
use crate::writer::write_file;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where a job's output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Computed from the template location by [`resolve_output_path`]
    Derived,
    /// Written to exactly this path
    Explicit(PathBuf),
}

/// One template to render and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    pub template: PathBuf,
    pub output: OutputTarget,
}

impl GenerationJob {
    pub fn derived<P: Into<PathBuf>>(template: P) -> Self {
        Self { template: template.into(), output: OutputTarget::Derived }
    }

    pub fn explicit<P: Into<PathBuf>, Q: Into<PathBuf>>(template: P, output: Q) -> Self {
        Self { template: template.into(), output: OutputTarget::Explicit(output.into()) }
    }

    /// The path this job writes to.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            OutputTarget::Derived => resolve_output_path(&self.template),
            OutputTarget::Explicit(path) => path.clone(),
        }
    }
}

/// A job whose output path has been fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: PathBuf,
    pub output: PathBuf,
}

/// Computes the output path for a template.
///
/// The template suffix is stripped from the file name. A template living in a
/// `templates` folder is generated into that folder's parent, anything else is
/// generated next to the template.
///
/// # Example
/// `lib/foo/templates/x.c.j2` resolves to `lib/foo/x.c`, and `lib/foo/x.c.j2`
/// resolves to `lib/foo/x.c`.
pub fn resolve_output_path<P: AsRef<Path>>(template: P) -> PathBuf {
    let template = template.as_ref();
    let template_dir = template.parent().unwrap_or_else(|| Path::new(""));

    let output_dir = if template_dir.file_name().is_some_and(|n| n == TEMPLATES_DIR) {
        template_dir.parent().unwrap_or_else(|| Path::new(""))
    } else {
        template_dir
    };

    let output_name = match template.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name).into(),
        None => template.file_stem().map(PathBuf::from).unwrap_or_default(),
    };

    output_dir.join(output_name)
}

/// Resolves every job's output path and checks that no two jobs share one.
///
/// # Errors
/// * `Error::OutputCollisionError` naming the first pair of colliding templates
pub fn plan(jobs: &[GenerationJob]) -> Result<Vec<PlannedFile>> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut planned = Vec::with_capacity(jobs.len());

    for job in jobs {
        let output = job.output_path();
        if let Some(first) = seen.get(&output) {
            return Err(Error::OutputCollisionError {
                output,
                first: first.to_path_buf(),
                second: job.template.clone(),
            });
        }
        debug!("Planned {} -> {}", job.template.display(), output.display());
        seen.insert(output.clone(), &job.template);
        planned.push(PlannedFile { template: job.template.clone(), output });
    }

    Ok(planned)
}

/// Renders planned files against the configuration and writes them out.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, context: &'a serde_json::Value) -> Self {
        Self { renderer, context }
    }

    /// Renders one file and writes it. Nothing is written if rendering fails.
    pub fn process(&self, file: &PlannedFile) -> Result<()> {
        let template_dir = match file.template.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let template_name = file
            .template
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::TemplateNameError { path: file.template.clone() })?;

        let content = self.renderer.render(template_dir, template_name, self.context)?;
        write_file(&file.output, &content)
    }

    /// Processes files in order, printing a line for each one generated.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Output paths written, in order
    ///
    /// # Errors
    /// Returns the first error; later files are not processed.
    pub fn run(&self, files: &[PlannedFile]) -> Result<Vec<PathBuf>> {
        let mut generated = Vec::with_capacity(files.len());
        for file in files {
            self.process(file)?;
            println!("Successfully generated {}", file.output.display());
            generated.push(file.output.clone());
        }
        Ok(generated)
    }
}

/// Runs the whole pipeline: load configuration, load jobs, plan, render and write.
///
/// The configuration is fully parsed and every output path resolved before
/// anything is rendered.
pub fn generate<P: AsRef<Path>>(
    config_path: P,
    source: &TemplateSource,
    renderer: &dyn TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    let context = load_config(config_path)?;
    let jobs = source.load()?;
    if jobs.is_empty() {
        log::info!("Found no {}", source);
    }
    let files = plan(&jobs)?;
    Processor::new(renderer, &context).run(&files)
}
