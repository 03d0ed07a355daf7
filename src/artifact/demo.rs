//! A small built-in bundle for demos and smoke tests.

use crate::classifier::{ClassifierModel, LogisticRegression};
use crate::error::Result;
use crate::features::{CountVectorizer, VectorizerModel};

use super::bundle::ArtifactBundle;
use super::metadata::ArtifactMetadata;

/// Build the bundled demo model.
///
/// A logistic regression over twelve course keywords distinguishing three
/// courses. The weights are hand-picked so that obvious interest phrases
/// land on the expected course, which makes the bundle useful for trying
/// the CLI and server without training anything.
pub fn demo_bundle() -> Result<ArtifactBundle> {
    let vocabulary = [
        "data",
        "deep",
        "learning",
        "ml",
        "nlp",
        "pipelines",
        "python",
        "pytorch",
        "spark",
        "sql",
        "statistics",
        "transformers",
    ];
    let vectorizer =
        CountVectorizer::new(vocabulary.iter().map(|name| name.to_string()).collect())?;

    // One coefficient row per course, in vocabulary order.
    let coefficients = vec![
        // data_engineering
        vec![
            1.6, -0.2, -0.1, -0.2, -0.3, 1.4, 0.2, -0.3, 1.3, 1.2, -0.1, -0.4,
        ],
        // intro_ml
        vec![
            0.1, -0.3, 1.1, 1.6, -0.2, -0.3, 0.6, -0.2, -0.4, -0.3, 1.2, -0.5,
        ],
        // nlp
        vec![
            -0.3, 0.8, 0.2, 0.1, 1.7, -0.4, 0.4, 0.9, -0.5, -0.6, -0.2, 1.5,
        ],
    ];
    let intercepts = vec![0.0, 0.0, 0.0];
    let classifier =
        ClassifierModel::LogisticRegression(LogisticRegression::new(coefficients, intercepts));

    let mut metadata = ArtifactMetadata::with_classes(["data_engineering", "intro_ml", "nlp"]);
    metadata.note = Some("bundled demo model with hand-picked keyword weights".to_string());

    ArtifactBundle::new(classifier, VectorizerModel::Count(vectorizer), metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::ExplainerKind;

    #[test]
    fn test_demo_bundle_is_valid() {
        let bundle = demo_bundle().unwrap();

        // Expected: three courses over twelve keyword features
        assert_eq!(bundle.n_classes(), 3);
        assert_eq!(bundle.vectorizer.n_features(), 12);
        assert_eq!(bundle.explainer(), ExplainerKind::CoefficientBased);
    }

    #[test]
    fn test_demo_bundle_separates_courses() {
        let bundle = demo_bundle().unwrap();

        for (document, expected) in [
            ("python ml statistics", "intro_ml"),
            ("nlp transformers pytorch", "nlp"),
            ("spark sql pipelines", "data_engineering"),
        ] {
            let features = bundle.vectorizer.transform_document(document).unwrap();
            let probabilities = bundle.classifier.predict_proba(&features).unwrap();
            let winner = probabilities.argmax().unwrap();

            // Expected: each keyword phrase maps onto its own course
            assert_eq!(bundle.class_label(winner), expected, "for {document:?}");
        }
    }
}
