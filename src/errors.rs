use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// Failures reported by the AI analysis client.
///
/// Transport-class errors cover the network and HTTP layers; payload-class
/// errors cover a completed HTTP exchange whose body is unusable. The client
/// always reports one of these to its caller — it never substitutes data.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("analysis service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The service answered 2xx but flagged the envelope `success: false`.
    #[error("analysis service reported failure")]
    Rejected,

    #[error("invalid analysis response: {0}")]
    InvalidResponse(String),
}

impl AnalysisError {
    /// Transport-class failures: unreachable service or a non-2xx status.
    #[allow(dead_code)]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AnalysisError::Timeout | AnalysisError::Network(_) | AnalysisError::Http { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Analysis(err) => (
                StatusCode::BAD_GATEWAY,
                format!(
                    "AI analysis failed: {}. Verify the analysis service is running and the API key is configured.",
                    err
                ),
            )
                .into_response(),
        }
    }
}
