use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use emergency_planner::assistant::{assistant_router, TextGenerator};
use emergency_planner::auth::{auth_router, AuthService, TokenStore, UserStore};
use emergency_planner::plans::{plan_router, PlanService, PlanType};
use serde_json::{json, Value};
use std::sync::Arc;

pub(crate) fn build_router<U, T>(
    plans: PlanService,
    auth: Arc<AuthService<U, T>>,
    generator: Arc<dyn TextGenerator>,
) -> Router
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    plan_router(plans, auth.clone())
        .merge(assistant_router(generator, auth.clone()))
        .merge(auth_router(auth))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api-docs/openapi.json", get(openapi_document))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn openapi_document() -> Json<Value> {
    Json(openapi_spec())
}

fn openapi_spec() -> Value {
    let plan_types: Vec<&str> = PlanType::ordered().iter().map(|plan| plan.as_str()).collect();
    let mut steps = operation("Questionnaire steps for a plan type", true, &[200, 401, 404]);
    steps["parameters"] = json!([{
        "name": "planType",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "enum": plan_types }
    }]);

    let mut paths = serde_json::Map::new();
    let mut add = |path: &str, method: &str, entry: Value| {
        paths.insert(path.to_string(), json!({ method: entry }));
    };
    add(
        "/auth/register",
        "post",
        operation("Register a user and issue a token", false, &[201, 400]),
    );
    add(
        "/auth/login",
        "post",
        operation("Log in and issue a token", false, &[200, 400, 401]),
    );
    add(
        "/auth/logout",
        "post",
        operation("Revoke the presented token", true, &[200, 401]),
    );
    add(
        "/api/plans/begin",
        "get",
        operation("Entry questionnaire steps", true, &[200, 401]),
    );
    add("/api/plans/{planType}/steps", "get", steps);
    add(
        "/api/plans/recommend",
        "post",
        operation("Recommend plans from survey answers", true, &[200, 401]),
    );
    add(
        "/api/plans/generate",
        "post",
        operation(
            "Draft an emergency plan with the text generator",
            true,
            &[200, 400, 401, 502, 503],
        ),
    );
    add(
        "/api/gemini/generate",
        "post",
        operation("Generate text from a prompt", true, &[200, 400, 401, 502, 503]),
    );

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Emergency Planner API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer" }
            }
        },
        "paths": paths,
    })
}

fn operation(summary: &str, secured: bool, statuses: &[u16]) -> Value {
    let responses: serde_json::Map<String, Value> = statuses
        .iter()
        .map(|status| (status.to_string(), json!({})))
        .collect();

    let mut entry = json!({ "summary": summary, "responses": responses });
    if secured {
        entry["security"] = json!([{ "bearerAuth": [] }]);
    }
    entry
}
