//! Multi-label Naive Bayes topic classification.
//!
//! Training estimates two tables from a labeled corpus:
//!
//! - the prior P(topic), from topic label frequencies
//! - the likelihood P(token | topic), from token/topic co-occurrence counts
//!   with additive smoothing
//!
//! Prediction picks the topic maximizing the prior times the product of
//! per-token likelihoods.
//!
//! # Architecture
//!
//! - [`TopicClassifier`]: common prediction interface
//! - [`ProbabilityEstimator`]: builds the tables from documents and topic counts
//! - [`NaiveBayesModel`]: scores topics and returns the arg-max
//! - [`SmoothingConfig`] / [`PredictorConfig`]: the numeric constants
//!
//! # Example
//!
//! ```
//! use topic_bayes::classifier::{PredictorConfig, ProbabilityEstimator, TopicClassifier};
//! use topic_bayes::document::parser::CorpusLoader;
//!
//! let corpus = CorpusLoader::new()
//!     .parse_str("s\t1\tfinance.\nbuy stock\ns\t2\tgrocery.\nbuy milk\n")
//!     .unwrap();
//! let model = ProbabilityEstimator::default()
//!     .fit(&corpus.documents, &corpus.topic_counts, PredictorConfig::default())
//!     .unwrap();
//!
//! let predictions = model.predict_all(&corpus.documents).unwrap();
//! assert_eq!(predictions, vec!["finance", "grocery"]);
//! ```

#[allow(clippy::module_inception)]
mod classifier;
pub mod config;
mod estimator;
mod model;
pub mod types;

pub use classifier::TopicClassifier;
pub use config::{PredictorConfig, ScoringStrategy, SmoothingConfig};
pub use estimator::ProbabilityEstimator;
pub use model::NaiveBayesModel;
pub use types::{LikelihoodTable, PriorTable, TopicCounts, TopicScore};
