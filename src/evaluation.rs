//! Accuracy scoring against multi-label ground truth.
//!
//! A prediction is correct when it is one of the document's topics. The
//! accuracy is truncated (not rounded) to three decimal places, so a raw
//! ratio of 0.8336 is reported as 0.833.

use serde::{Deserialize, Serialize};

use crate::document::document::Document;
use crate::error::{Result, TopicBayesError};

/// Outcome of comparing predictions with ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Predictions found among their document's topics.
    pub correct: usize,
    /// Number of documents evaluated.
    pub total: usize,
    /// `correct / total`, truncated to three decimals. 0.0 when `total` is 0.
    pub accuracy: f64,
}

/// Compare `predictions` with `documents` index by index.
pub fn evaluate(predictions: &[String], documents: &[Document]) -> Result<Evaluation> {
    if predictions.len() != documents.len() {
        return Err(TopicBayesError::size_mismatch(
            predictions.len(),
            documents.len(),
        ));
    }

    let correct = predictions
        .iter()
        .zip(documents)
        .filter(|(prediction, document)| document.has_topic(prediction))
        .count();
    let total = documents.len();

    let accuracy = if total == 0 {
        0.0
    } else {
        truncate_to_millis(correct as f64 / total as f64)
    };

    Ok(Evaluation {
        correct,
        total,
        accuracy,
    })
}

/// Truncated accuracy of `predictions` against `documents`.
pub fn accuracy(predictions: &[String], documents: &[Document]) -> Result<f64> {
    Ok(evaluate(predictions, documents)?.accuracy)
}

/// Drop everything past the third decimal place.
pub fn truncate_to_millis(value: f64) -> f64 {
    (value * 1000.0).trunc() / 1000.0
}
