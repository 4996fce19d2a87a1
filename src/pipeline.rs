//! End-to-end training and evaluation.
//!
//! ```text
//! train file ─► CorpusLoader ─► (documents, topic counts) ─► ProbabilityEstimator
//!                                                                  │
//! test file ──► CorpusLoader ─► documents ──┐                      ▼
//!                                           └──────────────► NaiveBayesModel ─► evaluate
//! ```
//!
//! Only the training corpus contributes topic counts. A topic that appears
//! only in the held-out corpus can never be predicted.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::classifier::{PredictorConfig, ProbabilityEstimator, SmoothingConfig, TopicClassifier};
use crate::document::parser::{CorpusLoader, HeaderOptions};
use crate::error::{Result, TopicBayesError};
use crate::evaluation::{Evaluation, evaluate};

/// Configuration for a full pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Header parsing options for both corpora.
    pub header: HeaderOptions,
    /// Smoothing constants for estimation.
    pub smoothing: SmoothingConfig,
    /// Prediction settings.
    pub predictor: PredictorConfig,
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TopicBayesError::load(path, e))?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric setting.
    pub fn validate(&self) -> Result<()> {
        self.smoothing.validate()?;
        self.predictor.validate()
    }
}

/// Results of a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Accuracy on the training corpus.
    pub train: Evaluation,
    /// Accuracy on the held-out corpus.
    pub test: Evaluation,
    /// Distinct training topics.
    pub topics: usize,
    /// Distinct training tokens.
    pub vocabulary_size: usize,
    /// One prediction per training document.
    pub train_predictions: Vec<String>,
    /// One prediction per held-out document.
    pub test_predictions: Vec<String>,
}

/// Load, estimate, predict and evaluate.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline; the configuration is validated first.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Pipeline { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn loader(&self) -> CorpusLoader {
        CorpusLoader::with_options(self.config.header)
    }

    /// Run the whole pipeline on a training and a held-out corpus.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        train_path: P,
        test_path: Q,
    ) -> Result<PipelineReport> {
        let loader = self.loader();
        let train = loader.load(train_path)?;
        let test = loader.load(test_path)?;

        let unpredictable: Vec<&str> = test
            .topic_counts
            .topics()
            .filter(|topic| !train.topic_counts.contains(topic))
            .collect();
        if !unpredictable.is_empty() {
            warn!(
                "{} held-out topics never occur in training and cannot be predicted: {}",
                unpredictable.len(),
                unpredictable.join(", ")
            );
        }

        let model = ProbabilityEstimator::new(self.config.smoothing).fit(
            &train.documents,
            &train.topic_counts,
            self.config.predictor,
        )?;

        let train_predictions = model.predict_all(&train.documents)?;
        let test_predictions = model.predict_all(&test.documents)?;

        let train_eval = evaluate(&train_predictions, &train.documents)?;
        let test_eval = evaluate(&test_predictions, &test.documents)?;

        info!(
            "Train accuracy {} ({}/{}), test accuracy {} ({}/{})",
            train_eval.accuracy,
            train_eval.correct,
            train_eval.total,
            test_eval.accuracy,
            test_eval.correct,
            test_eval.total
        );

        Ok(PipelineReport {
            train: train_eval,
            test: test_eval,
            topics: model.priors().len(),
            vocabulary_size: model.vocabulary_size(),
            train_predictions,
            test_predictions,
        })
    }
}
