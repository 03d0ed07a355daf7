//! Dual-strategy feature extraction.

use crate::analysis::normalizer::NormalizedInterests;
use crate::error::{CorsaError, FeatureExtractionError, Result, StrategyFailure};
use crate::features::vector::FeatureVector;
use crate::features::vectorizer::VectorizerModel;

/// One way of presenting normalized interests to a vectorizer.
pub trait ExtractionStrategy: Send + Sync {
    /// Attempt to produce a feature vector.
    fn extract(
        &self,
        model: &VectorizerModel,
        interests: &NormalizedInterests,
    ) -> Result<FeatureVector>;

    /// Strategy name used in failure reports.
    fn name(&self) -> &'static str;
}

/// Feeds the normalized text to the vectorizer as one document.
#[derive(Debug, Clone, Default)]
pub struct DocumentStrategy;

impl ExtractionStrategy for DocumentStrategy {
    fn extract(
        &self,
        model: &VectorizerModel,
        interests: &NormalizedInterests,
    ) -> Result<FeatureVector> {
        model.transform_document(&interests.text)
    }

    fn name(&self) -> &'static str {
        "document"
    }
}

/// Builds a word count record from the normalized text.
#[derive(Debug, Clone, Default)]
pub struct MappingStrategy;

impl ExtractionStrategy for MappingStrategy {
    fn extract(
        &self,
        model: &VectorizerModel,
        interests: &NormalizedInterests,
    ) -> Result<FeatureVector> {
        let record = interests.word_counts();
        model.transform_record(&record)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

/// Ordered-strategy feature extractor.
///
/// Strategies are tried in order on every call and the first success wins.
/// When all fail, the error aggregates every strategy's cause. Nothing is
/// cached between calls, so a reloaded bundle with a different vectorizer
/// kind is picked up immediately.
pub struct FeatureExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    /// Create an extractor with the standard order: document mode first,
    /// then the mapping fallback.
    pub fn new() -> Self {
        Self {
            strategies: vec![Box::new(DocumentStrategy), Box::new(MappingStrategy)],
        }
    }

    /// Create an extractor with a custom strategy list.
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the configured strategies in attempt order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the strategies in order against the given vectorizer.
    pub fn extract(
        &self,
        model: &VectorizerModel,
        interests: &NormalizedInterests,
    ) -> Result<FeatureVector> {
        let mut failures = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            match strategy.extract(model, interests) {
                Ok(features) => return Ok(features),
                Err(e) => {
                    let reason = match e {
                        CorsaError::Vectorizer(msg) => msg,
                        other => other.to_string(),
                    };
                    failures.push(StrategyFailure::new(strategy.name(), reason));
                }
            }
        }

        Err(CorsaError::from(FeatureExtractionError::new(failures)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::InterestNormalizer;
    use crate::features::count_vectorizer::CountVectorizer;
    use crate::features::dict_vectorizer::DictVectorizer;

    fn vocab(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn count_model(names: &[&str]) -> VectorizerModel {
        VectorizerModel::Count(CountVectorizer::new(vocab(names)).unwrap())
    }

    fn dict_model(names: &[&str]) -> VectorizerModel {
        VectorizerModel::Dict(DictVectorizer::new(vocab(names)).unwrap())
    }

    #[test]
    fn test_document_mode_handles_count_models() {
        let extractor = FeatureExtractor::new();
        let model = count_model(&["python", "ml", "nlp"]);
        let interests = InterestNormalizer::new().normalize("python, ml, python");

        let features = extractor.extract(&model, &interests).unwrap();
        assert_eq!(features.values, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mapping_fallback_handles_dict_models() {
        let extractor = FeatureExtractor::new();
        let model = dict_model(&["python", "ml"]);
        let interests = InterestNormalizer::new().normalize("python, ml");

        let features = extractor.extract(&model, &interests).unwrap();
        assert_eq!(features.values, vec![1.0, 1.0]);
    }

    #[test]
    fn test_fallback_splits_phrases_into_words() {
        let extractor = FeatureExtractor::new();
        let model = dict_model(&["deep", "learning"]);
        let interests = InterestNormalizer::new().normalize("deep learning");

        let features = extractor.extract(&model, &interests).unwrap();
        assert_eq!(features.values, vec![1.0, 1.0]);
    }

    #[test]
    fn test_total_failure_retains_every_cause() {
        let extractor = FeatureExtractor::new();
        // Empty vocabulary: document mode fails on the vocabulary, mapping
        // mode fails on the input convention.
        let model = count_model(&[]);
        let interests = InterestNormalizer::new().normalize("python");

        let error = extractor.extract(&model, &interests).unwrap_err();
        match error {
            CorsaError::FeatureExtraction(inner) => {
                assert_eq!(inner.failures.len(), 2);
                assert_eq!(inner.failures[0].strategy, "document");
                assert_eq!(inner.failures[1].strategy, "mapping");
            }
            other => panic!("Expected FeatureExtraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_strategy_state_leaks_between_calls() {
        let extractor = FeatureExtractor::new();
        let interests = InterestNormalizer::new().normalize("python");

        // Dict model uses the fallback...
        let features = extractor.extract(&dict_model(&["python"]), &interests).unwrap();
        assert_eq!(features.values, vec![1.0]);

        // ...and the next call with a count model goes back to document mode.
        let features = extractor
            .extract(&count_model(&["python"]), &interests)
            .unwrap();
        assert_eq!(features.values, vec![1.0]);
    }

    #[test]
    fn test_empty_input_yields_zero_vector() {
        let extractor = FeatureExtractor::new();
        let model = count_model(&["python"]);
        let interests = InterestNormalizer::new().normalize("");

        let features = extractor.extract(&model, &interests).unwrap();
        assert!(features.is_zero());
    }
}
