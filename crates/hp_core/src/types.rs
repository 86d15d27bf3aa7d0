use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered numeric inputs for a single sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction(f64);

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_display() {
        assert_eq!(Prediction::new(250000.5).to_string(), "250000.5");
        assert_eq!(Prediction::new(-1.25).to_string(), "-1.25");
    }

    #[test]
    fn test_feature_vector() {
        let features = FeatureVector::from(vec![3.0, 1200.0, 10.0]);
        assert_eq!(features.len(), 3);
        assert!(!features.is_empty());
        assert_eq!(features.as_slice(), &[3.0, 1200.0, 10.0]);
        assert!(FeatureVector::default().is_empty());
    }
}
