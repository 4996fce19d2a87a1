//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, TopicBayesArgs};
use crate::error::Result;
use crate::pipeline::PipelineReport;

/// Output an evaluation report in the selected format.
pub fn output_report(report: &PipelineReport, args: &TopicBayesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("Topics: {}", report.topics);
                println!("Vocabulary: {}", report.vocabulary_size);
                println!(
                    "Train: {}/{} correct",
                    report.train.correct, report.train.total
                );
                println!("Test: {}/{} correct", report.test.correct, report.test.total);
                println!();
            }
            println!("Train Accuracy = {:?}", report.train.accuracy);
            println!("Test Accuracy = {:?}", report.test.accuracy);
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TopicBayesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
