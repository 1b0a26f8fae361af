//! pingen's main application entry point.

use pingen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::generate,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Loads the configuration, then renders and writes every selected template.
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let source = args.template_source()?;
    let generated = generate(&args.config, &source, &renderer)?;
    log::debug!("Generated {} file(s).", generated.len());
    Ok(())
}
