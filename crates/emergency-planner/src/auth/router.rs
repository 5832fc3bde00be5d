use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use super::domain::{Credentials, IssuedToken};
use super::middleware::bearer_token;
use super::service::AuthService;
use super::store::{TokenStore, UserStore};
use crate::error::AppError;

/// Router exposing registration, login, and logout.
pub fn auth_router<U, T>(auth: Arc<AuthService<U, T>>) -> Router
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    Router::new()
        .route("/auth/register", post(register_handler::<U, T>))
        .route("/auth/login", post(login_handler::<U, T>))
        .route("/auth/logout", post(logout_handler::<U, T>))
        .with_state(auth)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionResponse {
    pub(crate) message: &'static str,
    pub(crate) token: String,
    pub(crate) expires_at: DateTime<Utc>,
    pub(crate) user: UserView,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserView {
    pub(crate) id: String,
    pub(crate) email: String,
}

impl SessionResponse {
    fn new(message: &'static str, issued: IssuedToken) -> Self {
        Self {
            message,
            token: issued.token,
            expires_at: issued.expires_at,
            user: UserView {
                id: issued.identity.user_id,
                email: issued.identity.email,
            },
        }
    }
}

pub(crate) async fn register_handler<U, T>(
    State(auth): State<Arc<AuthService<U, T>>>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError>
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    let issued = auth.register(credentials).await?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new("User registered successfully", issued)),
    ))
}

pub(crate) async fn login_handler<U, T>(
    State(auth): State<Arc<AuthService<U, T>>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionResponse>, AppError>
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    let issued = auth.login(credentials).await?;
    Ok(Json(SessionResponse::new("Login successful", issued)))
}

pub(crate) async fn logout_handler<U, T>(
    State(auth): State<Arc<AuthService<U, T>>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError>
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    let token = bearer_token(&headers)?;
    auth.revoke(token).await?;
    Ok(Json(json!({ "message": "Logged out successfully" })))
}
