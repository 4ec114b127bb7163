use std::path::PathBuf;

use clap::Parser;
use day_14::{lobby::Lobby, part2::process};
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::{filter::Directive, fmt::format::FmtSpan, EnvFilter};

/// Finds the second at which the robots draw their picture.
///
/// Run with `RUST_LOG=day_14=debug` to print the formation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Robot list, one `p=X,Y v=DX,DY` per line
    #[arg(default_value = "input2.txt")]
    input: PathBuf,

    /// Lobby width in tiles
    #[arg(long, default_value_t = 101)]
    width: i32,

    /// Lobby height in tiles
    #[arg(long, default_value_t = 103)]
    height: i32,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init()?;

    let args = Args::parse();
    let lobby = Lobby::new(args.width, args.height)?;
    let file = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let result = process(&file, lobby).context("process part 2")?;
    println!("{}", result);
    Ok(())
}

fn init() -> miette::Result<()> {
    let directive = "day_14=info".parse::<Directive>().into_diagnostic()?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
