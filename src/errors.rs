// src/errors.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Błędy zgłaszane przez handlery panelu administracyjnego.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Nie znaleziono zasobu: {0}")]
    NotFound(String),

    #[error("Niepoprawne żądanie: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// Błędy komunikacji z zewnętrznym backendem produktów.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Błąd HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend zwrócił status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Brak wymaganej zmiennej środowiskowej {0}")]
    Missing(&'static str),

    #[error("Nieprawidłowa wartość zmiennej {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("produkt".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("pole".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn status_error_message_includes_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("upstream down"));
    }
}
