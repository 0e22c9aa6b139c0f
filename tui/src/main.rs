use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use showcase::ShowcaseConfig;

mod app;
mod state;
mod ui;

/// Interactive terminal showcase of five machine learning algorithms.
#[derive(Parser)]
#[command(name = "ml-showcase-tui", version)]
struct Args {
    /// JSON config file, defaults to $SHOWCASE_CONFIG when set.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::run::init_logging()?;

    let config = ShowcaseConfig::resolve(args.config.as_deref())?;
    app::run::run(config)
}
