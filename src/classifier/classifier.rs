//! Topic classifier trait definition.

use crate::document::document::Document;
use crate::error::Result;

/// Topic classifier trait.
///
/// Implementations assign a single topic label to a document.
pub trait TopicClassifier: Send + Sync {
    /// Predict the most probable topic for `document`.
    fn predict(&self, document: &Document) -> Result<String>;

    /// Predict one topic per document, preserving input order.
    fn predict_all(&self, documents: &[Document]) -> Result<Vec<String>> {
        documents.iter().map(|document| self.predict(document)).collect()
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
