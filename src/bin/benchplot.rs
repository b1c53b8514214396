use clap::{CommandFactory, Parser};

use benchplot::config::Config;
use benchplot::core::error::Result;
use benchplot::ingest;
use benchplot::render;
use benchplot::reporting::{logging, summary};
use benchplot::stats;
use benchplot::ui::{Cli, Commands, print_completions, resolve_report_kind};

use std::fs;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completions first; they need no configuration or logging
    if let Commands::CompletionGenerate { shell } = &cli.command {
        let mut cmd = Cli::command();
        print_completions(*shell, &mut cmd);
        return;
    }

    let config = load_config(&cli);
    logging::init_logger(config.effective_verbose(cli.verbose), cli.quiet);

    if let Err(e) = run(&cli, &config) {
        logging::log_error("Run failed", Some(&e));
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration honoring the `--config` and `--no-config` flags.
///
/// An explicitly named config file that cannot be loaded is fatal; a missing
/// file in the standard location just means defaults.
fn load_config(cli: &Cli) -> Config {
    if cli.no_config {
        return Config::default();
    }

    match &cli.config {
        Some(path) => match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Config::load_from_standard_locations(),
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::MemoryReport {
            input,
            output,
            kind,
        } => run_memory_report(input, output, kind.as_deref(), config),
        Commands::SpeedReport { input, out_dir } => run_speed_report(input, out_dir, config),
        Commands::CompletionGenerate { .. } => Ok(()), // handled in main
    }
}

/// Load a memory table, render its chart, and print the size summary
fn run_memory_report(
    input: &Path,
    output: &Path,
    kind_flag: Option<&str>,
    config: &Config,
) -> Result<()> {
    let kind = resolve_report_kind(input, kind_flag)?;
    let dataset = ingest::load_tabular_file(input)?;
    logging::log_dataset_loaded(input, dataset.len());

    render::render_memory_chart(&dataset, kind, output, config.chart_dimensions())?;
    logging::log_chart_written(output);

    let comparison = stats::compare_open_closed(&dataset);
    for line in summary::summary_lines(&comparison) {
        println!("{line}");
    }

    Ok(())
}

/// Load a speed report and render one chart per scenario
fn run_speed_report(input: &Path, out_dir: &Path, config: &Config) -> Result<()> {
    let report = ingest::load_speed_file(input)?;
    logging::log_report_loaded(input, report.len());

    fs::create_dir_all(out_dir)?;
    for path in render::render_speed_charts(&report, out_dir, config.chart_dimensions())? {
        logging::log_chart_written(&path);
    }

    Ok(())
}
