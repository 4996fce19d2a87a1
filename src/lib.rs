//! # topic-bayes
//!
//! A multi-label Naive Bayes topic classifier for sentence corpora.
//!
//! ## Features
//!
//! - Loader for the tab/space separated header-body corpus format
//! - Prior and likelihood estimation with configurable additive smoothing
//! - Arg-max prediction with a deterministic, lexicographic tie-break
//! - Optional log-space scoring for long documents
//! - Truncated accuracy against multi-label ground truth
//!
//! ## Example
//!
//! ```no_run
//! use topic_bayes::pipeline::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
//! let report = pipeline.run("dev.txt", "test.txt").unwrap();
//!
//! println!("Train Accuracy = {:?}", report.train.accuracy);
//! println!("Test Accuracy = {:?}", report.test.accuracy);
//! ```

pub mod classifier;
pub mod cli;
pub mod document;
pub mod error;
pub mod evaluation;
pub mod pipeline;

pub mod prelude {
    pub use crate::classifier::{
        NaiveBayesModel, PredictorConfig, ProbabilityEstimator, ScoringStrategy, SmoothingConfig,
        TopicClassifier, TopicCounts,
    };
    pub use crate::document::document::Document;
    pub use crate::document::parser::{Corpus, CorpusLoader, HeaderOptions};
    pub use crate::error::{Result, TopicBayesError};
    pub use crate::evaluation::{Evaluation, accuracy, evaluate};
    pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineReport};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
