use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log memory dataset ingestion information
pub fn log_dataset_loaded<P: AsRef<Path>>(path: P, rows: usize) {
    info!(
        "Loaded {rows} measurement row(s) from {}",
        path.as_ref().display()
    );
}

/// Log speed report ingestion information
pub fn log_report_loaded<P: AsRef<Path>>(path: P, scenarios: usize) {
    info!(
        "Loaded {scenarios} scenario(s) from {}",
        path.as_ref().display()
    );
}

/// Log a written chart file
pub fn log_chart_written<P: AsRef<Path>>(path: P) {
    info!("Wrote chart {}", path.as_ref().display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process, so guard with
        // panic::catch_unwind and accept either outcome.
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_initialization_conflicting() {
        // Quiet takes precedence over verbose
        std::panic::catch_unwind(|| init_logger(true, true)).ok();
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        log_dataset_loaded("figure-1-data.txt", 0);
        log_dataset_loaded("figure-2-data.txt", 100_000);
        log_report_loaded("speeds.json", 2);
        log_chart_written("InsertTest-speed.png");
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        log_error("Failed to read input", Some(&io_error));
        log_error("Something went wrong", None);
    }
}
