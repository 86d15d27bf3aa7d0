use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod features;
pub mod handlers;
pub mod state;
pub mod views;

pub use error::AppError;
pub use state::{AppState, ErrorMode, FieldOrder};

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serve the app until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

pub mod prelude {
    pub use hp_core::{Error, Predictor, Result};
    pub use crate::{create_app, serve, AppState, ErrorMode, FieldOrder};
}
