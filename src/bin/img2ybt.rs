use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use img2ybt::{AnimParams, ConvertSettings, Converter};
use tracing_subscriber::EnvFilter;

/// Convert RGB images to yellow-blue-time animations.
///
/// Red and green are re-rendered as yellows and blues and alternated with the image's actual
/// yellows and blues. Each FILE.ext is written to FILE.mp4 (requires `ffmpeg` on PATH).
#[derive(Parser, Debug)]
#[command(
    name = "img2ybt",
    version,
    override_usage = "img2ybt T N file1.jpg file2.png ...",
    allow_negative_numbers = true
)]
struct Cli {
    /// Period, in seconds, of one full yellow-blue oscillation (> 0).
    #[arg(value_name = "T", value_parser = parse_period)]
    period: f64,

    /// Duration, as a number of periods (> 0).
    #[arg(value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    repeats: u32,

    /// Images to convert.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Keep existing output files; such inputs are reported as write errors.
    #[arg(long)]
    no_overwrite: bool,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_period(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|e| format!("'{s}' is not a number of seconds: {e}"))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(format!("period must be greater than 0 (got {s})"));
    }
    Ok(v)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(&e),
    };

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("warning: {e:#}");
    }

    let anim = match AnimParams::new(cli.period, cli.repeats) {
        Ok(anim) => anim,
        Err(e) => {
            print_usage();
            println!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let settings = ConvertSettings {
        overwrite: !cli.no_overwrite,
        ..ConvertSettings::new(anim)
    };
    let mut converter = Converter::new(settings);
    let summary = converter.run(
        &cli.files,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    tracing::debug!(
        converted = summary.converted.len(),
        failed = summary.failed.len(),
        "done"
    );
    ExitCode::SUCCESS
}

fn usage_error(e: &clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            print_usage();
            println!("{}", e.render());
            ExitCode::from(2)
        }
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_help());
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("img2ybt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("install tracing subscriber")
}
