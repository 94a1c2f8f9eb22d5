use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use kaprekar::{DigitSequence, Params};
use kaprekar_explorer::{Trace, run};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kaprekar-explorer")]
#[command(about = "Explore the generalized Kaprekar routine over every N-digit number in a base")]
struct Cli {
    /// Number of digits per sequence
    #[arg(short = 'n', long, default_value_t = 4)]
    digits: usize,

    /// Numeral base, from 2 to 36
    #[arg(short, long, default_value_t = 10)]
    base: u32,

    /// Trace one starting sequence (e.g. 3214) instead of the whole space
    #[arg(short, long)]
    start: Option<String>,

    /// Spread the analysis across all cores
    #[arg(short, long)]
    parallel: bool,

    /// Print the outcome of every candidate
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(text) = cli.start {
        Params::new(text.chars().count(), cli.base).context("invalid parameters")?;
        let start = DigitSequence::parse(&text, cli.base)
            .with_context(|| format!("cannot read starting sequence '{}'", text))?;
        if !start.is_candidate() {
            warn!(%start, "starting sequence has a leading zero or a single repeated digit");
        }
        print!("{}", Trace { start: &start, base: cli.base });
        return Ok(());
    }

    let params = Params::new(cli.digits, cli.base).context("invalid parameters")?;
    let started = Instant::now();
    print!("{}", run(params, cli.parallel, cli.verbose));
    info!(
        digits = params.digits(),
        base = params.base(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analysis finished"
    );
    Ok(())
}
