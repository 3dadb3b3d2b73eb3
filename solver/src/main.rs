use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gallivant::PatrolGrid;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace a guard patrol and count the loop-causing obstruction placements.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Grid file, one row per line: `#` obstacle, `^` guard, `.` open.
    grid: PathBuf,

    /// Also print the traced patrol painted over the grid.
    #[arg(short, long)]
    verbose: bool,
}

// RUST_LOG controls diagnostics; unset means warn, output goes to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let input = fs::read_to_string(&args.grid)
        .with_context(|| format!("reading {}", args.grid.display()))?;
    let grid = PatrolGrid::from_rows(input.lines())
        .with_context(|| format!("loading grid from {}", args.grid.display()))?;

    let path = grid.trace_base_path()?;
    if args.verbose {
        print!("{}", grid.render_with_path(&path));
    }

    println!("visited positions: {}", path.len());
    println!("loop-causing obstructions: {}", grid.count_loop_causing_obstructions()?);

    Ok(())
}
