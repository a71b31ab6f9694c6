use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request failed validation (bad hours, negative storage, missing fields)
    #[error("Validation error: {0}")]
    Validation(String),
    /// Provider outside {aws, gcp, azure}
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Billing catalog answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: StatusCode, message: String },
    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn unknown_provider(provider: &str) -> Self {
        Self::UnknownProvider(format!(
            "Provider must be 'aws', 'gcp', or 'azure' (got '{}')",
            provider
        ))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnknownProvider(_) => StatusCode::BAD_REQUEST,
            Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamError { status, .. } => *status,
            Self::HttpRequest(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            Self::Validation(msg)
            | Self::UnknownProvider(msg)
            | Self::ConfigError(msg)
            | Self::InternalError(msg) => msg.clone(),
            Self::UpstreamError { message, .. } => message.clone(),
            Self::HttpRequest(err) => err.to_string(),
        };

        crate::metrics::record_error(error_type_name(&self));
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

pub(crate) fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Validation(_) => "validation_error",
        AppError::UnknownProvider(_) => "unknown_provider",
        AppError::ConfigError(_) => "config_error",
        AppError::UpstreamError { .. } => "upstream_error",
        AppError::HttpRequest(_) => "http_request_error",
        AppError::InternalError(_) => "internal_error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::Validation("hours_running must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Validation error: hours_running must be greater than 0"
        );
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(error_type_name(&AppError::unknown_provider("ibm")), "unknown_provider");
        assert_eq!(
            error_type_name(&AppError::InternalError("boom".to_string())),
            "internal_error"
        );
    }

    #[tokio::test]
    async fn test_error_response_status() {
        let response = AppError::unknown_provider("oracle").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::InternalError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::UpstreamError {
            status: StatusCode::FORBIDDEN,
            message: "API key invalid".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
