use std::fs;
use std::path::Path;
use std::sync::Arc;
use hp_core::{Predictor, Result};
use tracing::{debug, info};

pub mod models;
pub mod tensors;

pub use models::{create_model, ModelArtifact};

/// Location of the trained model artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model.json";

fn is_safetensors(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("safetensors"))
}

/// Read a model artifact from disk and build the predictor it describes.
///
/// `.safetensors` files are decoded as regression weights, anything else
/// as a JSON artifact. Intended to run once at startup; any error here
/// means the service cannot serve predictions and should not start.
pub fn load(path: impl AsRef<Path>) -> Result<Arc<dyn Predictor>> {
    let path = path.as_ref();
    debug!("Reading model artifact from {}", path.display());

    let artifact = if is_safetensors(path) {
        ModelArtifact::from_safetensors(&fs::read(path)?)?
    } else {
        serde_json::from_str(&fs::read_to_string(path)?)?
    };
    let model = create_model(artifact)?;

    info!(
        "🧠 Loaded {} model from {} (features: {})",
        model.name(),
        path.display(),
        model
            .input_arity()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "any".to_string())
    );
    Ok(model)
}

pub mod prelude {
    pub use super::{load, DEFAULT_MODEL_PATH};
    pub use super::models::{create_model, ModelArtifact};
    pub use hp_core::{Error, FeatureVector, Prediction, Predictor, Result};
}
