use crate::assistant::AssistantError;
use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::plans::InvalidPlanType;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Plan(InvalidPlanType),
    Auth(AuthError),
    Assistant(AssistantError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Plan(_) => StatusCode::NOT_FOUND,
            AppError::Auth(err) => match err {
                AuthError::MissingFields | AuthError::UserExists => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials
                | AuthError::MissingToken
                | AuthError::MalformedToken
                | AuthError::TokenRevokedOrExpired => StatusCode::UNAUTHORIZED,
                AuthError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
                AuthError::ExpiryOutOfRange | AuthError::PasswordHash(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Assistant(err) => match err {
                AssistantError::MissingPrompt | AssistantError::MissingPlanFields => {
                    StatusCode::BAD_REQUEST
                }
                AssistantError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                AssistantError::Transport(source) if source.is_timeout() => {
                    StatusCode::GATEWAY_TIMEOUT
                }
                AssistantError::Upstream { .. }
                | AssistantError::Transport(_)
                | AssistantError::EmptyResponse => StatusCode::BAD_GATEWAY,
            },
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to HTTP clients; domain errors are reported without a prefix.
    fn client_message(&self) -> String {
        match self {
            AppError::Plan(err) => err.to_string(),
            AppError::Auth(err) => err.to_string(),
            AppError::Assistant(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Plan(err) => write!(f, "plan error: {}", err),
            AppError::Auth(err) => write!(f, "auth error: {}", err),
            AppError::Assistant(err) => write!(f, "assistant error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Plan(err) => Some(err),
            AppError::Auth(err) => Some(err),
            AppError::Assistant(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<InvalidPlanType> for AppError {
    fn from(value: InvalidPlanType) -> Self {
        Self::Plan(value)
    }
}

impl From<AuthError> for AppError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<AssistantError> for AppError {
    fn from(value: AssistantError) -> Self {
        Self::Assistant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StoreError;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let cases = [
            (
                AppError::from(InvalidPlanType {
                    value: "bunker".to_string(),
                }),
                StatusCode::NOT_FOUND,
            ),
            (AppError::from(AuthError::UserExists), StatusCode::BAD_REQUEST),
            (AppError::from(AuthError::MissingToken), StatusCode::UNAUTHORIZED),
            (
                AppError::from(AuthError::Store(StoreError::Unavailable("down".to_string()))),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::from(AuthError::ExpiryOutOfRange),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::from(AssistantError::MissingPrompt),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(AssistantError::NotConfigured),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::from(AssistantError::Upstream {
                    status: 429,
                    message: "quota".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error}");
        }
    }

    #[test]
    fn client_message_omits_category_prefix() {
        let error = AppError::from(InvalidPlanType {
            value: "bunker".to_string(),
        });

        assert_eq!(error.client_message(), "invalid plan type 'bunker'");
        assert_eq!(error.to_string(), "plan error: invalid plan type 'bunker'");
    }
}
