use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::service::{AuthError, AuthService};
use super::store::{TokenStore, UserStore};
use crate::error::AppError;

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedToken)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedToken)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer")
        || token.is_empty()
        || token.contains(char::is_whitespace)
    {
        return Err(AuthError::MalformedToken);
    }

    Ok(token)
}

/// Route layer that rejects unauthenticated requests and attaches the caller's `Identity`.
pub async fn require_token<U, T>(
    State(auth): State<Arc<AuthService<U, T>>>,
    mut request: Request,
    next: Next,
) -> Response
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_string(),
        Err(err) => return AppError::from(err).into_response(),
    };

    match auth.authenticate(&token).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => {
            warn!(path = %request.uri().path(), error = %err, "rejected request token");
            AppError::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(value).expect("valid header"),
        );
        headers
    }

    #[test]
    fn parses_bearer_scheme_case_insensitively() {
        assert_eq!(bearer_token(&headers("Bearer abc123")).ok(), Some("abc123"));
        assert_eq!(bearer_token(&headers("bearer abc123")).ok(), Some("abc123"));
    }

    #[test]
    fn distinguishes_missing_and_malformed_headers() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        ));
        for raw in ["Bearer", "Bearer ", "Basic abc123", "Bearer abc 123", "abc123"] {
            assert!(
                matches!(bearer_token(&headers(raw)), Err(AuthError::MalformedToken)),
                "{raw} should be malformed"
            );
        }
    }
}
