use anyhow::{Context, Result};
use clap::Parser;
use mot_plot::plot::available_keys;
use mot_plot::{plot_all, plot_key};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render MOT tracker dumps to PNG plots", long_about = None)]
struct Cli {
    /// Plot key, or `all` to render every preset with an input file
    key: Option<String>,

    /// Directory holding the CSV dumps; plots are written next to them
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    debug!(dir = %cli.dir.display(), key = ?cli.key, "starting");

    match cli.key.as_deref() {
        None => {
            println!("Usage: mot-plot [KEY|all] [--dir DIR]");
            println!("Available keys: {}", available_keys());
            println!();
            println!("Plotting all available CSVs...");
            run_all(&cli.dir);
        }
        Some("all") => run_all(&cli.dir),
        Some(key) => {
            let outcome =
                plot_key(key, &cli.dir).with_context(|| format!("failed to plot `{}`", key))?;
            println!("{}", outcome);
        }
    }

    Ok(())
}

fn run_all(dir: &Path) {
    for report in plot_all(dir) {
        match report.outcome {
            Ok(outcome) => println!("{}", outcome),
            Err(err) => eprintln!("{}: {}", report.key, err),
        }
    }
}
