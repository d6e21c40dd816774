//! altv-natives CLI
//!
//! Downloads the alt:V natives catalog (cached in `natives.json`) and writes
//! TypeScript declarations for it to `dist/index.d.ts`.

mod cli_types;
mod error;
mod logging;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use altv_natives_lib::{DiffReport, GenerationMode, HttpSource, generate, load_settings};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let root = std::env::current_dir()?;
    let settings = load_settings(&root)?;
    let mode = GenerationMode::from_legacy_flag(cli.legacy);
    let source = HttpSource::new();

    log::debug!("Generating {mode} declarations in {}", root.display());
    let summary = generate(&settings, mode, &root, &source)?;

    print_diff(&summary.diff);
    log::info!(
        "{} Wrote {} natives from {} namespaces to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.natives,
        summary.namespaces,
        summary
            .output
            .display()
            .if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

fn print_diff(report: &DiffReport) {
    log::info!("Total natives: {}", report.total);

    if !report.has_previous {
        log::debug!("No previous catalog found, every native counts as new");
    }
    if report.new_names.is_empty() {
        log::info!(
            "{}",
            "No new natives.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    log::info!(
        "{} ({}):",
        "New natives".if_supports_color(Stdout, |t| t.bold()),
        report.new_names.len(),
    );
    for name in &report.new_names {
        log::info!(
            "  {}",
            name.if_supports_color(Stdout, |t| t.cyan())
        );
    }
}
