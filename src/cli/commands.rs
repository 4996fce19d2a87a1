//! Command implementations for the topic-bayes CLI.

use anyhow::{Context, Result};
use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::pipeline::{Pipeline, PipelineConfig};

/// Execute a CLI command.
pub fn execute_command(args: TopicBayesArgs) -> Result<()> {
    let config = load_config(&args)?;
    let pipeline = Pipeline::new(config).context("invalid pipeline configuration")?;

    match &args.command {
        Command::Evaluate(eval_args) => evaluate(eval_args, &pipeline, &args),
    }
}

fn load_config(args: &TopicBayesArgs) -> Result<PipelineConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            PipelineConfig::from_json_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Train, predict both corpora and report accuracy.
fn evaluate(args: &EvaluateArgs, pipeline: &Pipeline, cli_args: &TopicBayesArgs) -> Result<()> {
    if let Some(output) = &args.output_path {
        debug!("Output designation {} is reserved; nothing is written", output.display());
    }

    let report = pipeline
        .run(&args.train_path, &args.test_path)
        .with_context(|| {
            format!(
                "evaluation of {} against {} failed",
                args.train_path.display(),
                args.test_path.display()
            )
        })?;

    output_report(&report, cli_args)?;
    Ok(())
}
