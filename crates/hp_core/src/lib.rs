pub mod models;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use models::Predictor;
pub use types::{FeatureVector, Prediction};
