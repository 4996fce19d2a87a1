//! Count and probability tables shared by the estimator and the predictor.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Topic label → number of label occurrences in a corpus.
///
/// Iteration is lexicographic by label. That order is the canonical topic
/// order used for scoring and tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicCounts {
    counts: BTreeMap<String, usize>,
}

impl TopicCounts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `topic`.
    pub fn increment(&mut self, topic: &str) {
        match self.counts.get_mut(topic) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(topic.to_string(), 1);
            }
        }
    }

    /// Occurrences of `topic`, or 0 when unknown.
    pub fn count(&self, topic: &str) -> usize {
        self.get(topic).unwrap_or(0)
    }

    /// Occurrences of `topic`, if it was ever seen.
    pub fn get(&self, topic: &str) -> Option<usize> {
        self.counts.get(topic).copied()
    }

    /// Check whether `topic` was seen.
    pub fn contains(&self, topic: &str) -> bool {
        self.counts.contains_key(topic)
    }

    /// Sum of all counts, i.e. the total number of label occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct topics.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no topic has been seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(topic, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(topic, count)| (topic.as_str(), *count))
    }

    /// Iterate topic labels in canonical order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for TopicCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        TopicCounts {
            counts: iter.into_iter().map(|(t, c)| (t.into(), c)).collect(),
        }
    }
}

/// P(topic) for every training topic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorTable {
    priors: BTreeMap<String, f64>,
}

impl PriorTable {
    pub(crate) fn from_map(priors: BTreeMap<String, f64>) -> Self {
        PriorTable { priors }
    }

    /// Prior probability of `topic`.
    pub fn get(&self, topic: &str) -> Option<f64> {
        self.priors.get(topic).copied()
    }

    /// Iterate `(topic, prior)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.priors.iter().map(|(topic, p)| (topic.as_str(), *p))
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.priors.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }
}

/// P(token | topic), keyed by token then topic.
///
/// A token that never co-occurred with a topic has no entry for that topic.
/// The absence is meaningful and is handled by the predictor.
#[derive(Debug, Clone, Default)]
pub struct LikelihoodTable {
    table: AHashMap<String, AHashMap<String, f64>>,
}

impl LikelihoodTable {
    pub(crate) fn from_map(table: AHashMap<String, AHashMap<String, f64>>) -> Self {
        LikelihoodTable { table }
    }

    /// The per-topic likelihoods of `token`, or `None` for an unseen token.
    pub fn topics_for(&self, token: &str) -> Option<&AHashMap<String, f64>> {
        self.table.get(token)
    }

    /// Likelihood of `token` given `topic`.
    pub fn get(&self, token: &str, topic: &str) -> Option<f64> {
        self.table.get(token)?.get(topic).copied()
    }

    /// Whether `token` appeared anywhere in training.
    pub fn contains_token(&self, token: &str) -> bool {
        self.table.contains_key(token)
    }

    /// Number of distinct training tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.table.len()
    }

    /// Iterate `(token, topic, likelihood)` triples in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.table.iter().flat_map(|(token, topics)| {
            topics
                .iter()
                .map(move |(topic, p)| (token.as_str(), topic.as_str(), *p))
        })
    }
}

/// A topic with its posterior score for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub topic: String,
    /// A probability product, or a log-probability sum, depending on the
    /// scoring strategy.
    pub score: f64,
}
