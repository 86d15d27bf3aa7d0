use std::str::FromStr;
use std::sync::Arc;
use hp_core::{Error, Predictor, Result};

/// How submitted form fields are arranged into a feature vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldOrder {
    /// Field names are ignored, values are taken in submission order.
    #[default]
    Submission,
    /// Each named field is placed at its position in the list.
    Named(Vec<String>),
}

/// What a failed prediction request looks like to the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// A bare 500 page with no detail.
    #[default]
    Generic,
    /// The form page again, with the cause shown above it.
    Page,
}

impl FromStr for ErrorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" => Ok(ErrorMode::Page),
            "generic" => Ok(ErrorMode::Generic),
            other => Err(format!("Unknown error mode: {}", other)),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub model: Arc<dyn Predictor>,
    pub field_order: FieldOrder,
    pub error_mode: ErrorMode,
}

impl AppState {
    pub fn new(model: Arc<dyn Predictor>) -> Self {
        Self {
            model,
            field_order: FieldOrder::default(),
            error_mode: ErrorMode::default(),
        }
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Map fields by the names the model artifact recorded.
    pub fn with_named_fields(mut self) -> Result<Self> {
        let names = self.model.feature_names().ok_or_else(|| {
            Error::Config(format!(
                "{} model has no feature names, cannot order fields by name",
                self.model.name()
            ))
        })?;
        self.field_order = FieldOrder::Named(names.to_vec());
        Ok(self)
    }

    /// Names for the input fields of the home page form.
    pub fn form_fields(&self) -> Vec<String> {
        if let Some(names) = self.model.feature_names() {
            return names.to_vec();
        }
        let count = self.model.input_arity().unwrap_or(1);
        (0..count).map(|i| format!("feature_{}", i)).collect()
    }
}
