//! Resolution and dispatch of explanation capabilities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classifier::ClassifierModel;
use crate::explain::explanation::{Explanation, ExplanationMethod, MAX_CONTRIBUTING_TOKENS};
use crate::features::FeatureVector;

/// Explanation capability of a loaded classifier.
///
/// Resolved once when a bundle is assembled, probing importances before
/// coefficients. Requests dispatch on the resolved tag; there is no
/// per-request capability probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplainerKind {
    /// The model carries global feature importances.
    ImportanceBased,
    /// The model carries per-class coefficients.
    CoefficientBased,
    /// The model supports no introspection.
    Unsupported,
}

impl ExplainerKind {
    /// Resolve the capability of a model.
    pub fn resolve(model: &ClassifierModel) -> Self {
        if model.feature_importances().is_some() {
            ExplainerKind::ImportanceBased
        } else if model.coefficients().is_some() {
            ExplainerKind::CoefficientBased
        } else {
            ExplainerKind::Unsupported
        }
    }

    /// The explanation method this capability reports on success.
    pub fn method(&self) -> ExplanationMethod {
        match self {
            ExplainerKind::ImportanceBased => ExplanationMethod::FeatureImportances,
            ExplainerKind::CoefficientBased => ExplanationMethod::CoefContributions,
            ExplainerKind::Unsupported => ExplanationMethod::None,
        }
    }

    /// Explain one prediction.
    ///
    /// Never fails: an internal inconsistency (importance or coefficient
    /// shapes disagreeing with the vocabulary, a missing class row)
    /// degrades the result to `method: "error"` with the reason logged.
    /// The prediction itself is unaffected.
    pub fn explain(
        &self,
        model: &ClassifierModel,
        feature_names: &[String],
        features: &FeatureVector,
        predicted_class: usize,
    ) -> Explanation {
        match self.try_explain(model, feature_names, features, predicted_class) {
            Ok(explanation) => explanation,
            Err(reason) => {
                warn!("explanation degraded: {reason}");
                Explanation::degraded()
            }
        }
    }

    fn try_explain(
        &self,
        model: &ClassifierModel,
        feature_names: &[String],
        features: &FeatureVector,
        predicted_class: usize,
    ) -> std::result::Result<Explanation, String> {
        if features.dimension() != feature_names.len() {
            return Err(format!(
                "feature vector has {} entries for {} names",
                features.dimension(),
                feature_names.len()
            ));
        }

        match self {
            ExplainerKind::ImportanceBased => {
                let importances = model
                    .feature_importances()
                    .ok_or("model carries no feature importances")?;
                if importances.len() != feature_names.len() {
                    return Err(format!(
                        "importance vector has {} entries for {} features",
                        importances.len(),
                        feature_names.len()
                    ));
                }

                // Rank present tokens by global importance.
                let top = top_tokens(features, |idx, _count| {
                    let weight = importances[idx];
                    (weight, weight)
                });
                Ok(Explanation::new(
                    ExplanationMethod::FeatureImportances,
                    collect_tokens(feature_names, top),
                ))
            }
            ExplainerKind::CoefficientBased => {
                let coefficients = model.coefficients().ok_or("model carries no coefficients")?;
                let row = coefficients
                    .get(predicted_class)
                    .ok_or_else(|| format!("no coefficient row for class {predicted_class}"))?;
                if row.len() != feature_names.len() {
                    return Err(format!(
                        "coefficient row has {} entries for {} features",
                        row.len(),
                        feature_names.len()
                    ));
                }

                // Rank present tokens by the magnitude of their contribution
                // to the predicted class; the reported weight keeps its sign.
                let top = top_tokens(features, |idx, count| {
                    let contribution = row[idx] * count;
                    (contribution, contribution.abs())
                });
                Ok(Explanation::new(
                    ExplanationMethod::CoefContributions,
                    collect_tokens(feature_names, top),
                ))
            }
            ExplainerKind::Unsupported => Ok(Explanation::none()),
        }
    }
}

/// Select the top tokens among the present features.
///
/// `score` maps `(vocabulary index, count)` to `(reported weight, rank)`.
/// Ties in rank resolve to the lower vocabulary index.
fn top_tokens(
    features: &FeatureVector,
    mut score: impl FnMut(usize, f64) -> (f64, f64),
) -> Vec<(usize, f64)> {
    let mut candidates: Vec<(usize, f64, f64)> = features
        .present()
        .map(|(idx, count)| {
            let (weight, rank) = score(idx, count);
            (idx, weight, rank)
        })
        .collect();

    candidates.sort_by(|a, b| b.2.total_cmp(&a.2).then(a.0.cmp(&b.0)));
    candidates.truncate(MAX_CONTRIBUTING_TOKENS);
    candidates
        .into_iter()
        .map(|(idx, weight, _)| (idx, weight))
        .collect()
}

fn collect_tokens(feature_names: &[String], entries: Vec<(usize, f64)>) -> BTreeMap<String, f64> {
    entries
        .into_iter()
        .map(|(idx, weight)| (feature_names[idx].clone(), weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{
        DecisionTree, LinearSvc, LogisticRegression, NearestCentroid, RandomForest,
    };

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    fn forest_model(importances: Vec<f64>) -> ClassifierModel {
        ClassifierModel::RandomForest(RandomForest::new(
            vec![DecisionTree::leaf(vec![0.5, 0.5])],
            importances,
            2,
        ))
    }

    #[test]
    fn test_resolve_per_architecture() {
        let forest = forest_model(vec![0.5, 0.5]);
        assert_eq!(ExplainerKind::resolve(&forest), ExplainerKind::ImportanceBased);

        let logistic = ClassifierModel::LogisticRegression(LogisticRegression::new(
            vec![vec![1.0]],
            vec![0.0],
        ));
        assert_eq!(
            ExplainerKind::resolve(&logistic),
            ExplainerKind::CoefficientBased
        );

        let svc = ClassifierModel::LinearSvc(LinearSvc::new(vec![vec![1.0]], vec![0.0]));
        assert_eq!(ExplainerKind::resolve(&svc), ExplainerKind::CoefficientBased);

        let centroid = ClassifierModel::NearestCentroid(NearestCentroid::new(vec![vec![1.0]]));
        assert_eq!(ExplainerKind::resolve(&centroid), ExplainerKind::Unsupported);
    }

    #[test]
    fn test_importance_ranking_and_cap() {
        let model = forest_model(vec![0.1, 0.9, 0.5, 0.5, 0.3, 0.2, 0.0]);
        let vocab = names(&["t0", "t1", "t2", "t3", "t4", "t5", "t6"]);
        let features = FeatureVector::new(vec![1.0; 7]);

        let explanation =
            ExplainerKind::ImportanceBased.explain(&model, &vocab, &features, 0);

        assert_eq!(explanation.method, ExplanationMethod::FeatureImportances);
        assert_eq!(explanation.top_contributing_tokens.len(), 5);
        // Top five by importance; t2 beats t3 on the vocabulary tie-break
        // but both make the cut, while t0 and t6 fall out.
        for token in ["t1", "t2", "t3", "t4", "t5"] {
            assert!(explanation.top_contributing_tokens.contains_key(token));
        }
        assert!(!explanation.top_contributing_tokens.contains_key("t0"));
        assert!(!explanation.top_contributing_tokens.contains_key("t6"));
    }

    #[test]
    fn test_absent_tokens_never_appear() {
        let model = forest_model(vec![0.9, 0.1]);
        let vocab = names(&["absent", "present"]);
        let features = FeatureVector::new(vec![0.0, 1.0]);

        let explanation =
            ExplainerKind::ImportanceBased.explain(&model, &vocab, &features, 0);

        assert_eq!(explanation.top_contributing_tokens.len(), 1);
        assert!(explanation.top_contributing_tokens.contains_key("present"));
    }

    #[test]
    fn test_coefficient_contributions_keep_sign() {
        let model = ClassifierModel::LogisticRegression(LogisticRegression::new(
            vec![vec![0.0, 0.0, 0.0], vec![2.0, -3.0, 0.5]],
            vec![0.0, 0.0],
        ));
        let vocab = names(&["a", "b", "c"]);
        let features = FeatureVector::new(vec![1.0, 2.0, 0.0]);

        let explanation = ExplainerKind::CoefficientBased.explain(&model, &vocab, &features, 1);

        assert_eq!(explanation.method, ExplanationMethod::CoefContributions);
        assert_eq!(explanation.top_contributing_tokens.get("a"), Some(&2.0));
        assert_eq!(explanation.top_contributing_tokens.get("b"), Some(&-6.0));
        // "c" is absent from the input.
        assert!(!explanation.top_contributing_tokens.contains_key("c"));
    }

    #[test]
    fn test_unsupported_reports_none() {
        let model = ClassifierModel::NearestCentroid(NearestCentroid::new(vec![vec![1.0]]));
        let vocab = names(&["python"]);
        let features = FeatureVector::new(vec![1.0]);

        let explanation = ExplainerKind::Unsupported.explain(&model, &vocab, &features, 0);

        assert_eq!(explanation.method, ExplanationMethod::None);
        assert!(explanation.top_contributing_tokens.is_empty());
    }

    #[test]
    fn test_shape_mismatch_degrades() {
        // Importance vector shorter than the vocabulary.
        let model = forest_model(vec![0.5]);
        let vocab = names(&["a", "b"]);
        let features = FeatureVector::new(vec![1.0, 1.0]);

        let explanation =
            ExplainerKind::ImportanceBased.explain(&model, &vocab, &features, 0);

        assert_eq!(explanation.method, ExplanationMethod::Error);
        assert!(explanation.top_contributing_tokens.is_empty());
    }

    #[test]
    fn test_missing_class_row_degrades() {
        let model = ClassifierModel::LogisticRegression(LogisticRegression::new(
            vec![vec![1.0]],
            vec![0.0],
        ));
        let vocab = names(&["a"]);
        let features = FeatureVector::new(vec![1.0]);

        let explanation = ExplainerKind::CoefficientBased.explain(&model, &vocab, &features, 7);

        assert_eq!(explanation.method, ExplanationMethod::Error);
    }
}
