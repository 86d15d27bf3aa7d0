use std::sync::Arc;
use serde::{Deserialize, Serialize};
use hp_core::{Error, FeatureVector, Predictor, Result};

pub mod constant;
pub mod linear;

pub use constant::ConstantModel;
pub use linear::LinearRegression;

/// On-disk form of a trained model, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression {
        coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_names: Option<Vec<String>>,
    },
    Constant {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        n_features: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_names: Option<Vec<String>>,
    },
}

pub fn create_model(artifact: ModelArtifact) -> Result<Arc<dyn Predictor>> {
    match artifact {
        ModelArtifact::LinearRegression { coefficients, intercept, feature_names } => {
            Ok(Arc::new(LinearRegression::new(coefficients, intercept, feature_names)?))
        }
        ModelArtifact::Constant { value, n_features, feature_names } => {
            Ok(Arc::new(ConstantModel::new(value, n_features, feature_names)?))
        }
    }
}

pub(crate) fn check_feature_names(names: &Option<Vec<String>>, arity: usize) -> Result<()> {
    match names {
        Some(names) if names.len() != arity => Err(Error::InvalidModel(format!(
            "{} feature names given for {} features",
            names.len(),
            arity
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn check_arity(expected: usize, features: &FeatureVector) -> Result<()> {
    if features.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: features.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_from_json() {
        let json = r#"{"kind": "linear_regression", "coefficients": [1.0, 2.0], "intercept": 0.5}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(
            artifact,
            ModelArtifact::LinearRegression {
                coefficients: vec![1.0, 2.0],
                intercept: 0.5,
                feature_names: None,
            }
        );

        let json = r#"{"kind": "constant", "value": 42.0}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(matches!(artifact, ModelArtifact::Constant { value, .. } if value == 42.0));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"kind": "random_forest", "trees": []}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }

    #[test]
    fn test_create_model_selects_kind() {
        let model = create_model(ModelArtifact::Constant {
            value: 1.0,
            n_features: Some(2),
            feature_names: None,
        })
        .unwrap();
        assert_eq!(model.name(), "constant");
        assert_eq!(model.input_arity(), Some(2));

        let model = create_model(ModelArtifact::LinearRegression {
            coefficients: vec![1.0, 1.0, 1.0],
            intercept: 0.0,
            feature_names: None,
        })
        .unwrap();
        assert_eq!(model.name(), "linear_regression");
        assert_eq!(model.input_arity(), Some(3));
    }
}
