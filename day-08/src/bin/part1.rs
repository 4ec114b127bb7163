use std::path::PathBuf;

use clap::Parser;
use day_08::part1::process;
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::{filter::Directive, fmt::format::FmtSpan, EnvFilter};

/// Counts the antinodes produced by pairs of same-frequency antennas.
///
/// Run with `RUST_LOG=day_08=debug` to print the map with its antinodes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Antenna map, one row per line
    #[arg(default_value = "input1.txt")]
    input: PathBuf,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init()?;

    let args = Args::parse();
    let file = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let result = process(&file).context("process part 1")?;
    println!("{}", result);
    Ok(())
}

fn init() -> miette::Result<()> {
    let directive = "day_08=info".parse::<Directive>().into_diagnostic()?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
