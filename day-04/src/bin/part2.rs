use std::path::PathBuf;

use clap::Parser;
use day_04::part2::{process, WORD};
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::{filter::Directive, fmt::format::FmtSpan, EnvFilter};

/// Counts the places where a word crosses itself on the diagonals.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Word search puzzle, one row of letters per line
    #[arg(default_value = "input2.txt")]
    input: PathBuf,

    /// Odd-length word that forms each cross
    #[arg(long, default_value = WORD)]
    word: String,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init()?;

    let args = Args::parse();
    let file = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let result = process(&file, &args.word).context("process part 2")?;
    println!("{}", result);
    Ok(())
}

fn init() -> miette::Result<()> {
    let directive = "day_04=info".parse::<Directive>().into_diagnostic()?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
