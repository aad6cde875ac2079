//! Command-line front end for the `unwhite` knockout filter.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unwhite::{knock_out_file, ConfigIoError, KnockoutConfig, KnockoutError};

/// Make near-white image backgrounds transparent.
#[derive(Parser, Debug)]
#[command(name = "unwhite", version, about)]
struct Cli {
    /// Image to process (any format the image crate can decode)
    #[arg(default_value = "docs/public/logo.png", value_hint = clap::ValueHint::FilePath)]
    image: PathBuf,

    /// Output PNG path; omitted means the input file is overwritten
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Per-channel value (inclusive) at which a pixel counts as background
    #[arg(short, long, default_value_t = unwhite::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Run from a JSON config instead of flags
    #[arg(
        short = 'C',
        long,
        value_hint = clap::ValueHint::FilePath,
        conflicts_with_all = ["image", "output", "threshold", "report"]
    )]
    config: Option<PathBuf>,

    /// Write a JSON run report here
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigIoError),
    #[error(transparent)]
    Knockout(#[from] KnockoutError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = unwhite::init_from_verbosity(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let cfg = build_config(cli)?;
    let report = knock_out_file(&cfg)?;

    if let Some(path) = &cfg.report_path {
        report.write_json(path)?;
        log::info!("wrote report JSON to {}", path.display());
    }

    println!("wrote transparent PNG to {}", report.output_path.display());
    Ok(())
}

fn build_config(cli: &Cli) -> Result<KnockoutConfig, ConfigIoError> {
    if let Some(path) = &cli.config {
        return KnockoutConfig::load_json(path);
    }

    let mut cfg = KnockoutConfig::new(cli.image.clone());
    cfg.output_path = cli.output.clone();
    cfg.threshold = cli.threshold;
    cfg.report_path = cli.report.clone();
    Ok(cfg)
}
