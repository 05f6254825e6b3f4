use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use binbayes::tasks::{ReportFormat, TrainTestParams, TrainTestTask};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Train a binary Naive Bayes model on one table and evaluate it on another.
#[derive(Parser, Debug)]
#[command(name = "binbayes", version)]
struct Cli {
    /// Training table (header line, then rows of 0/1 values, label last)
    train: Option<PathBuf>,

    /// Test table, decoded with the training table's schema
    test: Option<PathBuf>,

    /// JSON file with `train_path`, `test_path`, `seed` and `format`
    #[arg(long, env = "BINBAYES_PARAMS")]
    params: Option<PathBuf>,

    /// Seed for the tie-break coin
    #[arg(long)]
    seed: Option<u64>,

    /// Report format
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

impl Cli {
    fn into_params(self) -> Result<TrainTestParams> {
        let base = match &self.params {
            Some(path) => Some(
                TrainTestParams::from_json_file(path)
                    .with_context(|| format!("reading parameters from {}", path.display()))?,
            ),
            None => None,
        };

        let mut params = match (base, self.train, self.test) {
            (Some(mut b), train, test) => {
                if let Some(train) = train {
                    b.train_path = train;
                }
                if let Some(test) = test {
                    b.test_path = test;
                }
                b
            }
            (None, Some(train), Some(test)) => TrainTestParams::new(train, test),
            (None, _, _) => bail!("pass TRAIN and TEST paths or --params FILE"),
        };

        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(format) = self.format {
            params.format = format;
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let params = cli.into_params()?;
    let format = params.format;
    let mut task = TrainTestTask::new(params).context("invalid run parameters")?;
    let report = task.run().context("train/test run failed")?;
    println!("{}", report.render(format)?);
    Ok(())
}
