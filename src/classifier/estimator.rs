//! Frequency-based estimation of the prior and likelihood tables.

use std::collections::BTreeMap;

use ahash::AHashMap;
use log::debug;

use crate::classifier::config::{PredictorConfig, SmoothingConfig};
use crate::classifier::model::NaiveBayesModel;
use crate::classifier::types::{LikelihoodTable, PriorTable, TopicCounts};
use crate::document::document::Document;
use crate::error::{Result, TopicBayesError};

/// Builds [`PriorTable`] and [`LikelihoodTable`] from a training corpus.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityEstimator {
    config: SmoothingConfig,
}

impl ProbabilityEstimator {
    /// Create an estimator with the given smoothing constants.
    pub fn new(config: SmoothingConfig) -> Self {
        ProbabilityEstimator { config }
    }

    /// The smoothing constants in use.
    pub fn config(&self) -> SmoothingConfig {
        self.config
    }

    /// Estimate P(topic) and P(token | topic).
    ///
    /// `topic_counts` must be the counts of the same `documents`. A topic
    /// that appears in a document but has no positive count is reported as
    /// [`TopicBayesError::InvariantViolation`].
    pub fn estimate(
        &self,
        documents: &[Document],
        topic_counts: &TopicCounts,
    ) -> Result<(PriorTable, LikelihoodTable)> {
        let priors = Self::priors(topic_counts)?;

        let mut raw: AHashMap<String, AHashMap<String, f64>> = AHashMap::new();
        for document in documents {
            for token in document.tokens() {
                let per_topic = raw.entry(token.clone()).or_default();
                for topic in document.topics() {
                    per_topic
                        .entry(topic.clone())
                        .and_modify(|count| *count += 1.0)
                        .or_insert(self.config.initial_count);
                }
            }
        }

        for (token, per_topic) in raw.iter_mut() {
            for (topic, value) in per_topic.iter_mut() {
                let total = match topic_counts.get(topic) {
                    Some(count) if count > 0 => count as f64,
                    _ => {
                        return Err(TopicBayesError::invariant(format!(
                            "topic {topic:?} co-occurs with token {token:?} but has no occurrence count"
                        )));
                    }
                };
                *value = (*value + self.config.smoothing) / total;
            }
        }

        debug!(
            "Estimated {} priors and {} token likelihood rows from {} documents",
            priors.len(),
            raw.len(),
            documents.len()
        );

        Ok((priors, LikelihoodTable::from_map(raw)))
    }

    /// Estimate the tables and wrap them in a ready-to-use model.
    pub fn fit(
        &self,
        documents: &[Document],
        topic_counts: &TopicCounts,
        predictor: PredictorConfig,
    ) -> Result<NaiveBayesModel> {
        let (priors, likelihoods) = self.estimate(documents, topic_counts)?;
        Ok(NaiveBayesModel::new(
            priors,
            likelihoods,
            topic_counts.clone(),
            predictor,
        ))
    }

    fn priors(topic_counts: &TopicCounts) -> Result<PriorTable> {
        if topic_counts.is_empty() {
            return Err(TopicBayesError::invariant(
                "training corpus contains no topic labels",
            ));
        }

        let total = topic_counts.total() as f64;
        let mut priors = BTreeMap::new();
        for (topic, count) in topic_counts.iter() {
            if count == 0 {
                return Err(TopicBayesError::invariant(format!(
                    "topic {topic:?} has zero occurrences"
                )));
            }
            priors.insert(topic.to_string(), count as f64 / total);
        }

        Ok(PriorTable::from_map(priors))
    }
}
