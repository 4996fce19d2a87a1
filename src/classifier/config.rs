//! Configuration for probability estimation and prediction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopicBayesError};

/// Count recorded the first time a token co-occurs with a topic.
pub const DEFAULT_INITIAL_COUNT: f64 = 1.0;

/// Constant added to every raw count before normalization.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Factor applied for each token never seen in training.
pub const DEFAULT_UNSEEN_TOKEN_PENALTY: f64 = 0.01;

/// Additive smoothing constants used by the estimator.
///
/// The defaults reproduce the reference numbers:
/// `likelihood = (occurrences + 1) / topic_count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Raw count stored on the first co-occurrence. Each later one adds 1.0.
    pub initial_count: f64,
    /// Constant added to the raw count at normalization time.
    pub smoothing: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_INITIAL_COUNT,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl SmoothingConfig {
    /// A variant whose first co-occurrence records 0, so the add-one at
    /// normalization is the only smoothing applied.
    pub fn single_add_one() -> Self {
        Self {
            initial_count: 0.0,
            smoothing: 1.0,
        }
    }

    /// Reject constants that would produce zero, negative or non-finite likelihoods.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_count.is_finite() || self.initial_count < 0.0 {
            return Err(TopicBayesError::invalid_argument(format!(
                "initial_count must be a finite non-negative number, got {}",
                self.initial_count
            )));
        }
        if !self.smoothing.is_finite() || self.smoothing < 0.0 {
            return Err(TopicBayesError::invalid_argument(format!(
                "smoothing must be a finite non-negative number, got {}",
                self.smoothing
            )));
        }
        if self.initial_count + self.smoothing <= 0.0 {
            return Err(TopicBayesError::invalid_argument(
                "initial_count + smoothing must be positive",
            ));
        }
        Ok(())
    }
}

/// How per-topic scores are accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Multiply raw probabilities. Long documents may underflow to 0.0,
    /// in which case the canonical topic order decides.
    #[default]
    Product,
    /// Sum natural logarithms of the same factors.
    LogSpace,
}

/// Predictor settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Factor applied for each token absent from the training vocabulary.
    pub unseen_token_penalty: f64,
    /// Score accumulation strategy.
    pub scoring: ScoringStrategy,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            unseen_token_penalty: DEFAULT_UNSEEN_TOKEN_PENALTY,
            scoring: ScoringStrategy::Product,
        }
    }
}

impl PredictorConfig {
    /// Reject a penalty outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        let p = self.unseen_token_penalty;
        if !(p > 0.0 && p <= 1.0) {
            return Err(TopicBayesError::invalid_argument(format!(
                "unseen_token_penalty must be in (0, 1], got {p}"
            )));
        }
        Ok(())
    }
}
