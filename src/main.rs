//! Promptforge's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration loading, and
//! drives the build across the configured targets.

use promptforge::{
    builder::Builder,
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    logger::init_logger,
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

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the build configuration
/// 2. Sets up the template renderer with the two-tier include search path
/// 3. Optionally cleans the output directory (or one target's subtree)
/// 4. Builds the selected target, or every target plus passthrough items
fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config)?;

    // Include priority: dedicated templates first, then base content
    let search_path = vec![config.templates_dir.clone(), config.base_dir.clone()];
    let renderer = MiniJinjaRenderer::new(search_path);

    let mut builder = Builder::new(&config, &renderer);

    match args.target {
        Some(target_name) => {
            if args.clean {
                builder.clean_target(&target_name)?;
            }
            builder.build_target(&target_name)?;
        }
        None => {
            if args.clean {
                builder.clean()?;
            }
            builder.build_all()?;
        }
    }

    Ok(())
}
