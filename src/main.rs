use std::{
    io::{self, Write},
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use showcase::ShowcaseConfig;
use synthetic::{compute, training_delay, Jitter};

use crate::cli::{Command, Options, RunOptions};

mod cli;
mod report;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let options = Options::parse();
    let config = ShowcaseConfig::resolve(options.config.as_deref())?;
    let mut out = io::stdout().lock();

    match options.command {
        Command::List => report::algorithms(&mut out)?,
        Command::Params { algorithm } => {
            let params = config.params_for(algorithm)?;
            report::params(&mut out, &params)?;
        }
        Command::Run(run) => simulate(&config, run, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn simulate(config: &ShowcaseConfig, options: RunOptions, out: &mut impl Write) -> Result<()> {
    let mut params = config.params_for(options.algorithm)?;
    for assignment in &options.assignments {
        params
            .assign(assignment)
            .with_context(|| format!("invalid --set {assignment}"))?;
    }

    let mut jitter = if options.no_jitter || !config.jitter {
        Jitter::none()
    } else {
        Jitter::new(options.seed.or(config.seed))
    };

    if options.wait {
        let delay = training_delay(&params);
        log::info!("training {} for {delay:?}", params.algorithm());
        thread::sleep(delay);
    }

    let run = compute(&params, &mut jitter);

    if options.json {
        report::json(out, &params, &run)?;
    } else {
        report::run(out, &params, &run)?;
    }

    Ok(())
}
