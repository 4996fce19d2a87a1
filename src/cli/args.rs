//! Command line argument parsing for the topic-bayes CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// topic-bayes - A multi-label Naive Bayes topic classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "topic-bayes")]
#[command(about = "Train a Naive Bayes topic classifier and report its accuracy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TopicBayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TopicBayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on one corpus, then report accuracy on it and on a held-out corpus
    Evaluate(EvaluateArgs),
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Training corpus
    #[arg(value_name = "TRAIN_FILE")]
    pub train_path: PathBuf,

    /// Held-out corpus
    #[arg(value_name = "TEST_FILE")]
    pub test_path: PathBuf,

    /// Output designation, reserved for future use (nothing is written)
    #[arg(value_name = "OUTPUT")]
    pub output_path: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_command() {
        let args =
            TopicBayesArgs::try_parse_from(["topic-bayes", "evaluate", "dev.txt", "test.txt"])
                .unwrap();

        if let Command::Evaluate(eval_args) = args.command {
            assert_eq!(eval_args.train_path, PathBuf::from("dev.txt"));
            assert_eq!(eval_args.test_path, PathBuf::from("test.txt"));
            assert_eq!(eval_args.output_path, None);
        } else {
            panic!("Expected Evaluate command");
        }
    }

    #[test]
    fn test_evaluate_with_output_designation() {
        let args = TopicBayesArgs::try_parse_from([
            "topic-bayes",
            "evaluate",
            "dev.txt",
            "test.txt",
            "out.txt",
        ])
        .unwrap();

        if let Command::Evaluate(eval_args) = args.command {
            assert_eq!(eval_args.output_path, Some(PathBuf::from("out.txt")));
        } else {
            panic!("Expected Evaluate command");
        }
    }

    #[test]
    fn test_evaluate_requires_both_corpora() {
        assert!(TopicBayesArgs::try_parse_from(["topic-bayes", "evaluate", "dev.txt"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TopicBayesArgs::try_parse_from(["topic-bayes", "evaluate", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            TopicBayesArgs::try_parse_from(["topic-bayes", "-vv", "evaluate", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            TopicBayesArgs::try_parse_from(["topic-bayes", "--quiet", "evaluate", "a", "b"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format_and_config() {
        let args = TopicBayesArgs::try_parse_from([
            "topic-bayes",
            "--format",
            "json",
            "--config",
            "pipeline.json",
            "evaluate",
            "a",
            "b",
        ])
        .unwrap();

        assert!(matches!(args.output_format, OutputFormat::Json));
        assert_eq!(args.config, Some(PathBuf::from("pipeline.json")));
    }
}
