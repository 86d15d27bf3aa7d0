use axum::{
    extract::{Form, State},
    response::Html,
};
use std::sync::Arc;
use tracing::{debug, warn};
use crate::error::AppError;
use crate::features;
use crate::views::{self, IndexPage};
use crate::{AppState, ErrorMode};

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    views::render_index(&IndexPage {
        fields: state.form_fields(),
        ..Default::default()
    })
    .map(Html)
    .map_err(|e| {
        warn!("⚠️ Failed to render home page: {}", e);
        AppError::new(e, ErrorMode::Generic, vec![])
    })
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let prediction = features::extract(&fields, &state.field_order)
        .and_then(|features| {
            debug!("Predicting for features {:?}", features.as_slice());
            state.model.predict_one(&features)
        })
        .map_err(|e| {
            warn!("⚠️ Prediction failed: {}", e);
            AppError::new(e, state.error_mode, state.form_fields())
        })?;

    views::render_index(&IndexPage {
        fields: state.form_fields(),
        prediction: Some(format!("House price is {}", prediction)),
        error: None,
    })
    .map(Html)
    .map_err(|e| {
        warn!("⚠️ Failed to render prediction: {}", e);
        AppError::new(e, ErrorMode::Generic, vec![])
    })
}
