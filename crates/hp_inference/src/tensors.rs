//! Regression weights stored as SafeTensors.
//!
//! Reads the layout aprender's `LinearRegression::save_safetensors` writes:
//! a `coefficients` tensor of shape `[n]` and an `intercept` tensor of shape
//! `[1]`, both little-endian floats. Any extra tensors (such as `alpha`) are
//! ignored. Feature names may be given as a JSON array under the
//! `feature_names` key of the `__metadata__` header.

use hp_core::{Error, Result};
use safetensors::{tensor::Metadata, Dtype, SafeTensors};
use crate::models::ModelArtifact;

pub const COEFFICIENTS: &str = "coefficients";
pub const INTERCEPT: &str = "intercept";
pub const FEATURE_NAMES_KEY: &str = "feature_names";

fn invalid(e: impl std::fmt::Display) -> Error {
    Error::InvalidModel(format!("Invalid safetensors file: {}", e))
}

fn read_values(tensors: &SafeTensors<'_>, name: &str) -> Result<Vec<f64>> {
    let view = tensors
        .tensor(name)
        .map_err(|e| Error::InvalidModel(format!("Missing '{}' tensor: {}", name, e)))?;
    let data = view.data();

    let values: Vec<f64> = match view.dtype() {
        Dtype::F32 => data
            .chunks_exact(4)
            .map(|b| {
                let mut buf = [0u8; 4];
                buf.copy_from_slice(b);
                f32::from_le_bytes(buf) as f64
            })
            .collect(),
        Dtype::F64 => data
            .chunks_exact(8)
            .map(|b| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(b);
                f64::from_le_bytes(buf)
            })
            .collect(),
        other => {
            return Err(Error::InvalidModel(format!(
                "Unsupported dtype {:?} for '{}' tensor",
                other, name
            )))
        }
    };
    Ok(values)
}

fn read_feature_names(metadata: &Metadata) -> Result<Option<Vec<String>>> {
    let Some(raw) = metadata.metadata().as_ref().and_then(|m| m.get(FEATURE_NAMES_KEY)) else {
        return Ok(None);
    };
    let names: Vec<String> = serde_json::from_str(raw)?;
    Ok(Some(names))
}

impl ModelArtifact {
    /// Decode a linear regression saved in SafeTensors form.
    pub fn from_safetensors(bytes: &[u8]) -> Result<Self> {
        let (_, metadata) = SafeTensors::read_metadata(bytes).map_err(invalid)?;
        let tensors = SafeTensors::deserialize(bytes).map_err(invalid)?;

        let coefficients = read_values(&tensors, COEFFICIENTS)?;
        let intercept = match read_values(&tensors, INTERCEPT)?.as_slice() {
            [value] => *value,
            other => {
                return Err(Error::InvalidModel(format!(
                    "Expected intercept tensor to have 1 element, got {}",
                    other.len()
                )))
            }
        };

        Ok(ModelArtifact::LinearRegression {
            coefficients,
            intercept,
            feature_names: read_feature_names(&metadata)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use safetensors::tensor::TensorView;
    use std::collections::HashMap;

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    /// Encode weights the way aprender saves a fitted regression.
    pub fn encode(coefficients: &[f32], intercept: &[f32], feature_names: Option<&[&str]>) -> Vec<u8> {
        let coef_bytes = f32_bytes(coefficients);
        let intercept_bytes = f32_bytes(intercept);
        let alpha_bytes = f32_bytes(&[0.0]);

        let tensors = vec![
            (
                COEFFICIENTS,
                TensorView::new(Dtype::F32, vec![coefficients.len()], &coef_bytes).unwrap(),
            ),
            (
                INTERCEPT,
                TensorView::new(Dtype::F32, vec![intercept.len()], &intercept_bytes).unwrap(),
            ),
            ("alpha", TensorView::new(Dtype::F32, vec![1], &alpha_bytes).unwrap()),
        ];
        let metadata = feature_names.map(|names| {
            HashMap::from([(FEATURE_NAMES_KEY.to_string(), serde_json::to_string(names).unwrap())])
        });
        safetensors::serialize(tensors, &metadata).unwrap()
    }
}
