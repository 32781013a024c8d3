//! Logger initialization for the promptforge application.
//! Build progress goes to stdout directly; the logger carries the
//! diagnostics (template fallbacks, configuration tracing).

/// Initializes env_logger for a build run.
///
/// Warnings (degraded template rendering) are always visible; `verbose`
/// additionally surfaces debug-level tracing such as configuration loading.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
