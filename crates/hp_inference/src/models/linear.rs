use hp_core::{Error, FeatureVector, Predictor, Result};
use super::{check_arity, check_feature_names};

/// Ordinary least squares style model: `intercept + coefficients · x`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    feature_names: Option<Vec<String>>,
}

impl LinearRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64, feature_names: Option<Vec<String>>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::InvalidModel("linear regression has no coefficients".to_string()));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidModel("linear regression weights must be finite".to_string()));
        }
        check_feature_names(&feature_names, coefficients.len())?;

        Ok(Self {
            coefficients,
            intercept,
            feature_names,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Predictor for LinearRegression {
    fn name(&self) -> &str {
        "linear_regression"
    }

    fn input_arity(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>> {
        batch
            .iter()
            .map(|features| {
                check_arity(self.coefficients.len(), features)?;
                let dot: f64 = self
                    .coefficients
                    .iter()
                    .zip(features.as_slice())
                    .map(|(w, x)| w * x)
                    .sum();
                Ok(self.intercept + dot)
            })
            .collect()
    }
}
