use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mid_to_iso3166::config::Config;
use mid_to_iso3166::logging;
use mid_to_iso3166::{Emitter, Generator, OutputFormat, OutputTarget};

#[derive(Parser)]
#[command(name = "mid-to-iso3166")]
#[command(about = "Generate MMSI MID to ISO 3166 alpha-2 match arms")]
#[command(version)]
struct Cli {
    /// Write the generated code to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format (defaults to the config file value, then `entries`)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (defaults to ./mid-to-iso3166.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let format = cli.format.unwrap_or(config.output.format);
    let target = OutputTarget::from_option(cli.output);
    let writer = target.open().context("Failed to open output")?;

    let mut emitter = Emitter::new(writer, format).with_function_name(config.output.function_name);
    let report = Generator::embedded().run(&mut emitter, &mut io::stderr())?;

    info!(
        active = report.active,
        suppressed = report.suppressed,
        iso_issues = report.iso_issues.len(),
        "generation finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Keep the guard alive so file logs are flushed on exit
    let _guard = logging::init_logging(&config.logging);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
