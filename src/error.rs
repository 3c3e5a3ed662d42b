use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ral_palette::ConvertError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required query parameter: {0}")]
    MissingParam(&'static str),

    #[error("{0}")]
    Convert(#[from] ConvertError),
}

/// Errors raised while fetching or decoding reference data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Convert(ConvertError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Convert(ConvertError::InvalidFormat(_)) => StatusCode::BAD_REQUEST,
            // Table not loaded yet, or the source had no usable rows
            ApiError::Convert(ConvertError::NoEntries) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
