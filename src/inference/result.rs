//! The outward-facing prediction result.

use serde::{Deserialize, Serialize, Serializer};

use crate::explain::Explanation;

/// Result of one recommendation request.
///
/// The probability is carried at full precision internally and rounded to
/// four decimal places at serialization time, so equal predictions always
/// serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Label of the recommended course.
    pub recommended_course: String,

    /// Probability of the recommended course.
    #[serde(serialize_with = "serialize_rounded")]
    pub probability: f64,

    /// How the recommendation came about.
    pub explanation: Explanation,
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10_000.0).round() / 10_000.0)
}
