//! Template discovery for pingen.
//! Turns a template source (a directory tree or a single designated template)
//! into the list of generation jobs the processor runs.
use crate::constants::{FIXED_OUTPUT, FIXED_TEMPLATE_DIR, FIXED_TEMPLATE_NAME, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use crate::ignore::build_exclude_set;
use crate::processor::GenerationJob;
use globset::GlobSet;
use log::debug;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Where templates come from.
#[derive(Debug)]
pub enum TemplateSource {
    /// Every template file below a root directory, at any depth
    Tree { root: PathBuf, exclude: GlobSet },
    /// One template file, with an optional explicit output path
    File { template: PathBuf, output: Option<PathBuf> },
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Tree { root, .. } => {
                write!(f, "templates under '{}'", root.display())
            }
            TemplateSource::File { template, .. } => {
                write!(f, "template '{}'", template.display())
            }
        }
    }
}

impl TemplateSource {
    /// Recursive source rooted at `root`, skipping paths matching any of `exclude`.
    pub fn tree<P: Into<PathBuf>, S: AsRef<str>>(root: P, exclude: &[S]) -> Result<Self> {
        Ok(Self::Tree { root: root.into(), exclude: build_exclude_set(exclude)? })
    }

    /// The designated setup artifact generated in fixed mode.
    pub fn fixed() -> Self {
        Self::File {
            template: Path::new(FIXED_TEMPLATE_DIR).join(FIXED_TEMPLATE_NAME),
            output: Some(PathBuf::from(FIXED_OUTPUT)),
        }
    }

    /// Produces the generation jobs for this source.
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` if a single template file does not exist
    /// * `Error::DiscoveryError` if the tree cannot be walked
    pub fn load(&self) -> Result<Vec<GenerationJob>> {
        debug!("Loading {}", self);
        match self {
            TemplateSource::Tree { root, exclude } => Ok(discover_templates(root, exclude)?
                .into_iter()
                .map(GenerationJob::derived)
                .collect()),
            TemplateSource::File { template, output } => {
                if !template.is_file() {
                    return Err(Error::TemplateNotFoundError { path: template.clone() });
                }
                let job = match output {
                    Some(output) => GenerationJob::explicit(template, output),
                    None => GenerationJob::derived(template),
                };
                Ok(vec![job])
            }
        }
    }
}

/// Returns true when `filename` carries the template suffix and has a non-empty stem.
pub fn is_template_file(filename: &str) -> bool {
    filename.strip_suffix(TEMPLATE_SUFFIX).is_some_and(|stem| !stem.is_empty())
}

/// Finds every template file below `root`, in lexicographic path order.
///
/// A root without templates yields an empty list.
pub fn discover_templates<P: AsRef<Path>>(root: P, exclude: &GlobSet) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut templates = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::DiscoveryError { root: root.to_path_buf(), source: e })?;
        let path = entry.path();
        // symlinked files count, symlinked directories are not descended into
        if entry.file_type().is_dir() || !path.is_file() {
            continue;
        }

        if !path.file_name().and_then(|n| n.to_str()).is_some_and(is_template_file) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if exclude.is_match(relative) {
            debug!("Skipping excluded template {}", relative.display());
            continue;
        }

        debug!("Found template {}", path.display());
        templates.push(without_cur_dir(path));
    }

    Ok(templates)
}

/// Drops `.` components so `./lib/x.c.j2` becomes `lib/x.c.j2`.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
