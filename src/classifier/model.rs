//! Maximum-a-posteriori topic prediction.

use crate::classifier::classifier::TopicClassifier;
use crate::classifier::config::{PredictorConfig, ScoringStrategy};
use crate::classifier::types::{LikelihoodTable, PriorTable, TopicCounts, TopicScore};
use crate::document::document::Document;
use crate::error::{Result, TopicBayesError};

/// A trained Naive Bayes model.
///
/// For every known topic `t` the score of a document is the prior of `t`
/// times one factor per token, repeated tokens included:
///
/// - `likelihood[token][t]` when the token co-occurred with `t`,
/// - `1 / count[t]` when the token is known but never co-occurred with `t`,
/// - the unseen-token penalty when the token was never seen in training.
///
/// The prediction is the topic with the strictly greatest score. Topics are
/// visited in lexicographic order, so ties go to the lexicographically
/// smallest label.
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    priors: PriorTable,
    likelihoods: LikelihoodTable,
    topic_counts: TopicCounts,
    config: PredictorConfig,
}

impl NaiveBayesModel {
    /// Assemble a model from estimated tables.
    pub fn new(
        priors: PriorTable,
        likelihoods: LikelihoodTable,
        topic_counts: TopicCounts,
        config: PredictorConfig,
    ) -> Self {
        NaiveBayesModel {
            priors,
            likelihoods,
            topic_counts,
            config,
        }
    }

    pub fn priors(&self) -> &PriorTable {
        &self.priors
    }

    pub fn likelihoods(&self) -> &LikelihoodTable {
        &self.likelihoods
    }

    pub fn topic_counts(&self) -> &TopicCounts {
        &self.topic_counts
    }

    pub fn config(&self) -> PredictorConfig {
        self.config
    }

    /// Number of distinct training tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.likelihoods.vocabulary_size()
    }

    /// Score every known topic for `document`, in canonical topic order.
    pub fn score_topics(&self, document: &Document) -> Vec<TopicScore> {
        self.priors
            .iter()
            .map(|(topic, prior)| TopicScore {
                topic: topic.to_string(),
                score: self.score_topic(document, topic, prior),
            })
            .collect()
    }

    fn score_topic(&self, document: &Document, topic: &str, prior: f64) -> f64 {
        let factors = document.tokens().iter().map(|token| self.factor(token, topic));

        match self.config.scoring {
            ScoringStrategy::Product => factors.fold(1.0, |score, f| score * f) * prior,
            ScoringStrategy::LogSpace => factors.map(f64::ln).sum::<f64>() + prior.ln(),
        }
    }

    fn factor(&self, token: &str, topic: &str) -> f64 {
        match self.likelihoods.topics_for(token) {
            Some(per_topic) => match per_topic.get(topic) {
                Some(&likelihood) => likelihood,
                // Known token, never seen with this topic.
                None => 1.0 / self.topic_counts.count(topic) as f64,
            },
            None => self.config.unseen_token_penalty,
        }
    }

    fn best_topic(scores: Vec<TopicScore>) -> Option<String> {
        let mut best: Option<TopicScore> = None;
        for candidate in scores {
            if best.as_ref().is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best.map(|b| b.topic)
    }
}

impl TopicClassifier for NaiveBayesModel {
    fn predict(&self, document: &Document) -> Result<String> {
        Self::best_topic(self.score_topics(document))
            .ok_or_else(|| TopicBayesError::invariant("model has no topics to predict"))
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::config::SmoothingConfig;
    use crate::classifier::estimator::ProbabilityEstimator;
    use crate::document::parser::CorpusLoader;

    const SHOP: &str = "s\t1\tfinance.\nbuy stock\ns\t2\tgrocery.\nbuy milk\n";

    fn train(text: &str, config: PredictorConfig) -> NaiveBayesModel {
        let corpus = CorpusLoader::new().parse_str(text).unwrap();
        ProbabilityEstimator::new(SmoothingConfig::default())
            .fit(&corpus.documents, &corpus.topic_counts, config)
            .unwrap()
    }

    fn doc(tokens: &[&str]) -> Document {
        Document::new(tokens.iter().map(|t| t.to_string()).collect(), vec![], 0)
    }

    #[test]
    fn test_shared_token_tie_goes_to_first_topic() {
        let model = train(SHOP, PredictorConfig::default());

        let scores = model.score_topics(&doc(&["buy"]));
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].score, scores[1].score);

        for _ in 0..5 {
            assert_eq!(model.predict(&doc(&["buy"])).unwrap(), "finance");
        }
    }

    #[test]
    fn test_distinctive_token_wins() {
        let model = train(SHOP, PredictorConfig::default());

        assert_eq!(model.predict(&doc(&["milk"])).unwrap(), "grocery");
        assert_eq!(model.predict(&doc(&["buy", "stock"])).unwrap(), "finance");
    }

    #[test]
    fn test_score_factors() {
        let model = train(SHOP, PredictorConfig::default());
        let scores = model.score_topics(&doc(&["milk", "unseen"]));

        // finance: milk known but not with finance → 1/1, unseen → 0.01, prior 0.5
        assert_eq!(scores[0].topic, "finance");
        assert!((scores[0].score - 1.0 * 0.01 * 0.5).abs() < 1e-12);
        // grocery: (1 + 1) / 1 = 2.0, unseen → 0.01, prior 0.5
        assert_eq!(scores[1].topic, "grocery");
        assert!((scores[1].score - 2.0 * 0.01 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_tokens_multiply_repeatedly() {
        let model = train(SHOP, PredictorConfig::default());
        let once = model.score_topics(&doc(&["milk"]));
        let twice = model.score_topics(&doc(&["milk", "milk"]));

        assert!((twice[1].score - once[1].score * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_unseen_tokens_follow_prior() {
        let text = "s\t1\tbeta.\na\ns\t2\tbeta.\nb\ns\t3\talpha.\nc\n";
        let model = train(text, PredictorConfig::default());
        let document = doc(&["x", "y", "z"]);

        for score in model.score_topics(&document) {
            let prior = model.priors().get(&score.topic).unwrap();
            let expected = 0.01f64.powi(3) * prior;
            assert!((score.score - expected).abs() < 1e-18);
        }
        assert_eq!(model.predict(&document).unwrap(), "beta");
    }

    #[test]
    fn test_all_unseen_tokens_equal_priors_break_lexicographically() {
        let text = "s\t1\tzeta.\na\ns\t2\talpha.\nb\n";
        let model = train(text, PredictorConfig::default());

        assert_eq!(model.predict(&doc(&["q"])).unwrap(), "alpha");
    }

    // Four documents per topic, "rare" only with zeta: factors 0.5 (zeta) and 0.25 (alpha).
    const SKEWED: &str = "\
s\t1\tzeta.\nrare\ns\t2\tzeta.\nz1\ns\t3\tzeta.\nz2\ns\t4\tzeta.\nz3\n\
s\t5\talpha.\na1\ns\t6\talpha.\na2\ns\t7\talpha.\na3\ns\t8\talpha.\na4\n";

    #[test]
    fn test_product_underflow_falls_back_to_tie_break() {
        let model = train(SKEWED, PredictorConfig::default());
        assert_eq!(model.predict(&doc(&["rare"])).unwrap(), "zeta");
        let long: Vec<&str> = std::iter::repeat_n("rare", 2000).collect();

        // zeta would win, but both products underflow to 0.0.
        assert_eq!(model.predict(&doc(&long)).unwrap(), "alpha");
    }

    #[test]
    fn test_log_space_survives_underflow() {
        let config = PredictorConfig {
            scoring: ScoringStrategy::LogSpace,
            ..PredictorConfig::default()
        };
        let model = train(SKEWED, config);
        let long: Vec<&str> = std::iter::repeat_n("rare", 2000).collect();

        assert_eq!(model.predict(&doc(&long)).unwrap(), "zeta");
    }

    #[test]
    fn test_log_space_agrees_with_product() {
        let product = train(SHOP, PredictorConfig::default());
        let log_space = train(
            SHOP,
            PredictorConfig {
                scoring: ScoringStrategy::LogSpace,
                ..PredictorConfig::default()
            },
        );

        for tokens in [&["milk"][..], &["stock", "buy"], &["buy"], &["nothing"]] {
            let document = doc(tokens);
            assert_eq!(
                product.predict(&document).unwrap(),
                log_space.predict(&document).unwrap()
            );
        }
    }

    #[test]
    fn test_predict_all_preserves_order() {
        let model = train(SHOP, PredictorConfig::default());
        let documents = vec![doc(&["milk"]), doc(&["stock"]), doc(&["milk", "milk"])];

        assert_eq!(
            model.predict_all(&documents).unwrap(),
            vec!["grocery", "finance", "grocery"]
        );
    }

    #[test]
    fn test_empty_model_is_an_error() {
        let model = NaiveBayesModel::new(
            PriorTable::default(),
            LikelihoodTable::default(),
            TopicCounts::new(),
            PredictorConfig::default(),
        );

        assert!(model.predict(&doc(&["buy"])).is_err());
        assert_eq!(model.name(), "naive_bayes");
    }
}
