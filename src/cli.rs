use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use showcase::CONFIG_ENV;
use synthetic::Algorithm;

#[derive(Parser, Debug)]
#[command(
    name = "ml-showcase",
    version,
    about = "Simulated training runs of five machine learning algorithms"
)]
pub struct Options {
    /// JSON config with seed, presets and toggles.
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the algorithms and their identifiers.
    List,
    /// Show an algorithm's hyperparameters with their ranges and starting values.
    Params {
        /// xgboost, knn, linear, random_forest or svm.
        algorithm: Algorithm,
    },
    /// Simulate a training run and print its results.
    Run(RunOptions),
}

#[derive(Args, Debug)]
pub struct RunOptions {
    /// xgboost, knn, linear, random_forest or svm.
    pub algorithm: Algorithm,

    /// Override a hyperparameter, can be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,

    /// Seed for the chart noise.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plot the clean prediction with no noise on top.
    #[arg(long)]
    pub no_jitter: bool,

    /// Wait for the simulated training time before printing.
    #[arg(long)]
    pub wait: bool,

    /// Print the whole run as JSON.
    #[arg(long)]
    pub json: bool,
}
