//! Document structure for labeled sentences.

/// A single labeled sentence.
///
/// Documents are built once by the corpus loader and are read-only
/// afterwards. Token order and duplicate tokens are significant: both the
/// estimator and the predictor walk the full token sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<String>,
    topics: Vec<String>,
    sentence_id: i64,
}

impl Document {
    /// Create a new document.
    pub fn new(tokens: Vec<String>, topics: Vec<String>, sentence_id: i64) -> Self {
        Document {
            tokens,
            topics,
            sentence_id,
        }
    }

    /// The body tokens, in sentence order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The ground-truth topic labels, in header order.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// The sentence id from the corpus header.
    pub fn sentence_id(&self) -> i64 {
        self.sentence_id
    }

    /// Check whether `topic` is one of this document's labels.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}
