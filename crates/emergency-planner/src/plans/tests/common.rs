use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use serde_json::Value;

use crate::auth::{AuthService, Credentials, InMemoryTokenStore, InMemoryUserStore};
use crate::config::AuthConfig;
use crate::plans::{plan_router, PlanService, SurveyAnswers};

pub(super) type MemoryAuth = AuthService<InMemoryUserStore, InMemoryTokenStore>;

pub(super) fn auth_service() -> Arc<MemoryAuth> {
    Arc::new(AuthService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryTokenStore::new()),
        &AuthConfig::default(),
    ))
}

/// Router plus a token for a freshly registered user.
pub(super) async fn router_with_token() -> (axum::Router, String) {
    let auth = auth_service();
    let issued = auth
        .register(Credentials::new("planner@example.com", "hunter22"))
        .await
        .expect("registration succeeds");
    (plan_router(PlanService::default(), auth), issued.token)
}

pub(super) fn authorized_get(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request builds")
}

pub(super) fn authorized_post(uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) fn disaster_prone_homeowner() -> SurveyAnswers {
    [
        ("naturalDisasterRisk", "high"),
        ("economicStability", "stable"),
        ("livingSituation", "own-house"),
        ("storageSpace", "large"),
        ("incomeStability", "stable"),
        ("savingsLevel", "high"),
        ("primaryConcern", "natural-disasters"),
    ]
    .into_iter()
    .collect()
}

pub(super) fn financially_exposed_renter() -> SurveyAnswers {
    [
        ("naturalDisasterRisk", "low"),
        ("economicStability", "unstable"),
        ("livingSituation", "apartment"),
        ("storageSpace", "limited"),
        ("incomeStability", "unstable"),
        ("savingsLevel", "none"),
        ("primaryConcern", "economic-crisis"),
    ]
    .into_iter()
    .collect()
}
