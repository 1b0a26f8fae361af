//! Template rendering for pingen.
//! Builds a MiniJinja environment per template directory with the pin filters registered.
use crate::error::{Error, Result};
use log::debug;
use minijinja::{path_loader, AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use std::path::Path;

/// Returns the bank letter of a pin identifier, upper-cased (`"d0"` -> `"D"`).
///
/// An empty identifier yields an empty string.
pub fn pinbank(pin: &str) -> String {
    pin.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Returns the pin number of a pin identifier, everything after the bank letter
/// (`"D12"` -> `"12"`).
pub fn pinno(pin: &str) -> String {
    let mut chars = pin.chars();
    chars.next();
    chars.as_str().to_string()
}

/// Creates a fresh environment that loads templates from `template_dir`.
///
/// Each call returns an independent environment, so nothing registered while
/// rendering one template leaks into the next. Undefined values are strict: a
/// template that dereferences a missing configuration key fails to render.
/// Values are substituted verbatim whatever the output file type.
pub fn make_environment<P: AsRef<Path>>(template_dir: P) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir.as_ref().to_path_buf()));
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("pinbank", pinbank);
    env.add_filter("pinno", pinno);
    env
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template `template_name` found in `template_dir`.
    ///
    /// # Arguments
    /// * `template_dir` - Directory the template is loaded from
    /// * `template_name` - File name of the template inside `template_dir`
    /// * `context` - Configuration tree; its top-level keys become template variables
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(
        &self,
        template_dir: &Path,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
#[derive(Debug, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateNotFoundError` if the template file is missing
    /// * `Error::TemplateSyntaxError` if the template cannot be loaded or parsed
    /// * `Error::TemplateRenderError` if rendering fails, e.g. on a missing key
    ///   or a filter applied to a non-string
    fn render(
        &self,
        template_dir: &Path,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        let template_path = template_dir.join(template_name);
        debug!("Rendering template {}", template_path.display());

        let env = make_environment(template_dir);
        let tmpl = env.get_template(template_name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFoundError { path: template_path.clone() },
            _ => Error::TemplateSyntaxError { path: template_path.clone(), source: e },
        })?;

        tmpl.render(context)
            .map_err(|e| Error::TemplateRenderError { path: template_path, source: e })
    }
}
