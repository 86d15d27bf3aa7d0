use std::fmt;
use hp_core::{Error, FeatureVector, Predictor, Result};
use super::{check_arity, check_feature_names};

/// Predicts the same value for every sample, e.g. the training mean.
pub struct ConstantModel {
    value: f64,
    n_features: Option<usize>,
    feature_names: Option<Vec<String>>,
}

impl fmt::Debug for ConstantModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantModel")
            .field("value", &self.value)
            .field("n_features", &self.n_features)
            .finish()
    }
}

impl ConstantModel {
    pub fn new(value: f64, n_features: Option<usize>, feature_names: Option<Vec<String>>) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidModel("constant model value must be finite".to_string()));
        }
        // Names without an explicit count fix the arity
        let n_features = n_features.or_else(|| feature_names.as_ref().map(Vec::len));
        if let Some(n) = n_features {
            check_feature_names(&feature_names, n)?;
        }

        Ok(Self {
            value,
            n_features,
            feature_names,
        })
    }
}

impl Predictor for ConstantModel {
    fn name(&self) -> &str {
        "constant"
    }

    fn input_arity(&self) -> Option<usize> {
        self.n_features
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>> {
        batch
            .iter()
            .map(|features| {
                if let Some(n) = self.n_features {
                    check_arity(n, features)?;
                }
                Ok(self.value)
            })
            .collect()
    }
}
