use std::fmt;
use crate::types::{FeatureVector, Prediction};
use crate::{Error, Result};

pub trait Predictor: Send + Sync + fmt::Debug {
    /// Short name of the model kind, used in logs
    fn name(&self) -> &str;

    /// Number of features each sample must carry, if the model knows it
    fn input_arity(&self) -> Option<usize>;

    /// Names of the input features in vector order, if the artifact recorded them
    fn feature_names(&self) -> Option<&[String]>;

    /// Predict one value per sample in the batch
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>>;

    /// Predict a single sample by wrapping it as a batch of one
    fn predict_one(&self, features: &FeatureVector) -> Result<Prediction> {
        let batch = std::slice::from_ref(features);
        let values = self.predict(batch)?;
        values
            .first()
            .copied()
            .map(Prediction::new)
            .ok_or_else(|| Error::Inference(format!("{} returned an empty prediction batch", self.name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct SumModel;

    impl Predictor for SumModel {
        fn name(&self) -> &str {
            "sum"
        }

        fn input_arity(&self) -> Option<usize> {
            None
        }

        fn feature_names(&self) -> Option<&[String]> {
            None
        }

        fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>> {
            Ok(batch.iter().map(|f| f.as_slice().iter().sum()).collect())
        }
    }

    #[derive(Debug)]
    struct EmptyModel;

    impl Predictor for EmptyModel {
        fn name(&self) -> &str {
            "empty"
        }

        fn input_arity(&self) -> Option<usize> {
            None
        }

        fn feature_names(&self) -> Option<&[String]> {
            None
        }

        fn predict(&self, _batch: &[FeatureVector]) -> Result<Vec<f64>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_predict_one_takes_first_element() {
        let prediction = SumModel.predict_one(&vec![1.0, 2.0, 3.5].into()).unwrap();
        assert_eq!(prediction.value(), 6.5);
    }

    #[test]
    fn test_predict_one_empty_batch_is_error() {
        let result = EmptyModel.predict_one(&vec![1.0].into());
        assert!(matches!(result, Err(Error::Inference(_))));
    }
}
