use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("genreId é obrigatório")]
    MissingGenre,

    /// Query string that could not be parsed (e.g. a repeated key)
    #[error("{0}")]
    InvalidQuery(String),

    /// Upstream returned a non-2xx status (`status` set) or could not be reached.
    #[error("{message}")]
    UpstreamUnavailable { status: Option<u16>, message: String },

    #[error("Nenhum filme encontrado")]
    NoResultsFound,

    #[error("API_TOKEN não configurado")]
    MissingCredential,

    #[error("Resposta inesperada da TMDB: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// Failure for an upstream response outside the 2xx range.
    pub fn upstream_status(status: u16) -> Self {
        AppError::UpstreamUnavailable {
            status: Some(status),
            message: format!("TMDB error {}", status),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingGenre | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UpstreamUnavailable { .. }
            | AppError::NoResultsFound
            | AppError::MissingCredential
            | AppError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller mistakes, as opposed to upstream or configuration failures.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Attaches the endpoint-level summary shown to clients on 500s.
    pub fn with_summary(self, summary: &'static str) -> ApiError {
        ApiError {
            summary,
            source: self,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable {
            status: err.status().map(|s| s.as_u16()),
            message: format!("TMDB request failed: {}", err),
        }
    }
}

/// An `AppError` as rendered by a specific endpoint.
#[derive(Debug)]
pub struct ApiError {
    pub summary: &'static str,
    pub source: AppError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.source.status_code();

        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.source, summary = self.summary, "Request failed");
            json!({
                "error": self.summary,
                "message": self.source.to_string(),
            })
        } else {
            json!({ "error": self.source.to_string() })
        };

        (status, Json(body)).into_response()
    }
}

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type ApiResult<T> = Result<T, ApiError>;
