use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;
use crate::state::ErrorMode;
use crate::views::{self, IndexPage};

/// A failed prediction request, carrying what is needed to render it.
#[derive(Debug)]
pub struct AppError {
    pub error: hp_core::Error,
    pub mode: ErrorMode,
    pub fields: Vec<String>,
}

impl AppError {
    pub fn new(error: hp_core::Error, mode: ErrorMode, fields: Vec<String>) -> Self {
        Self { error, mode, fields }
    }

    pub fn status(&self) -> StatusCode {
        match self.mode {
            ErrorMode::Generic => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorMode::Page if self.error.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorMode::Page => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.mode {
            ErrorMode::Generic => views::render_generic_error(),
            ErrorMode::Page => views::render_index(&IndexPage {
                fields: self.fields,
                prediction: None,
                error: Some(self.error.to_string()),
            }),
        };
        match body {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_core::Error;

    fn parse_error() -> Error {
        Error::Parse {
            field: "rooms".to_string(),
            value: "abc".to_string(),
        }
    }

    #[test]
    fn test_status_mapping() {
        let err = AppError::new(parse_error(), ErrorMode::Page, vec![]);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::new(Error::DimensionMismatch { expected: 3, found: 1 }, ErrorMode::Page, vec![]);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::new(parse_error(), ErrorMode::Generic, vec![]);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::new(parse_error(), ErrorMode::Page, vec!["rooms".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = AppError::new(parse_error(), ErrorMode::default(), vec![]).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_field_is_input_error() {
        let err = AppError::new(Error::MissingField("rooms".to_string()), ErrorMode::Page, vec![]);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
