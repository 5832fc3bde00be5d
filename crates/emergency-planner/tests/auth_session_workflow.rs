//! Session lifecycle and the assistant routes that sit behind it.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use emergency_planner::assistant::{assistant_router, AssistantError, TextGenerator};
use emergency_planner::auth::{auth_router, AuthService, InMemoryTokenStore, InMemoryUserStore};
use emergency_planner::config::AuthConfig;

#[derive(Default)]
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        self.prompts
            .lock()
            .expect("prompt log lock")
            .push(prompt.to_string());
        Ok("1. Move to higher ground.".to_string())
    }
}

struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::NotConfigured)
    }
}

fn app(generator: Arc<dyn TextGenerator>) -> Router {
    let auth = Arc::new(AuthService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryTokenStore::new()),
        &AuthConfig::default(),
    ));
    auth_router(auth.clone()).merge(assistant_router(generator, auth))
}

fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn register(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(post(
            "/auth/register",
            None,
            json!({ "email": email, "password": "s3cret" }),
        ))
        .await
        .expect("register responds");
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["token"]
        .as_str()
        .expect("token issued")
        .to_string()
}

#[tokio::test]
async fn register_login_logout_lifecycle() {
    let app = app(Arc::new(RecordingGenerator::default()));
    register(&app, "ada@example.com").await;

    let duplicate = app
        .clone()
        .oneshot(post(
            "/auth/register",
            None,
            json!({ "email": "ada@example.com", "password": "other" }),
        ))
        .await
        .expect("register responds");
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(duplicate).await,
        json!({ "error": "User already exists" })
    );

    let login = app
        .clone()
        .oneshot(post(
            "/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "s3cret" }),
        ))
        .await
        .expect("login responds");
    assert_eq!(login.status(), StatusCode::OK);
    let session = json_body(login).await;
    assert_eq!(session["user"]["email"], "ada@example.com");
    let token = session["token"].as_str().expect("token").to_string();

    let logout = app
        .clone()
        .oneshot(post("/auth/logout", Some(&token), json!({})))
        .await
        .expect("logout responds");
    assert_eq!(logout.status(), StatusCode::OK);

    let after_logout = app
        .oneshot(post(
            "/api/gemini/generate",
            Some(&token),
            json!({ "prompt": "hello" }),
        ))
        .await
        .expect("generate responds");
    assert_eq!(after_logout.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(after_logout).await,
        json!({ "error": "Token has been revoked or expired" })
    );
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = app(Arc::new(RecordingGenerator::default()));
    register(&app, "grace@example.com").await;

    let response = app
        .oneshot(post(
            "/auth/login",
            None,
            json!({ "email": "grace@example.com", "password": "guess" }),
        ))
        .await
        .expect("login responds");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn generate_forwards_prompt_and_wraps_text() {
    let generator = Arc::new(RecordingGenerator::default());
    let app = app(generator.clone());
    let token = register(&app, "ops@example.com").await;

    let response = app
        .clone()
        .oneshot(post(
            "/api/gemini/generate",
            Some(&token),
            json!({ "prompt": "What goes in a go-bag?" }),
        ))
        .await
        .expect("generate responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "response": "1. Move to higher ground." })
    );

    let missing = app
        .oneshot(post("/api/gemini/generate", Some(&token), json!({})))
        .await
        .expect("generate responds");
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(missing).await,
        json!({ "error": "Prompt is required" })
    );

    let prompts = generator.prompts.lock().expect("prompt log lock");
    assert_eq!(prompts.as_slice(), ["What goes in a go-bag?".to_string()]);
}

#[tokio::test]
async fn plan_generation_builds_prompt_from_request_fields() {
    let generator = Arc::new(RecordingGenerator::default());
    let app = app(generator.clone());
    let token = register(&app, "coast@example.com").await;

    let response = app
        .clone()
        .oneshot(post(
            "/api/plans/generate",
            Some(&token),
            json!({ "location": "Gulf coast", "type": "hurricane", "size": "family of four" }),
        ))
        .await
        .expect("plan generation responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Emergency plan generated successfully");
    assert_eq!(body["plan"], "1. Move to higher ground.");

    let incomplete = app
        .oneshot(post(
            "/api/plans/generate",
            Some(&token),
            json!({ "location": "Gulf coast" }),
        ))
        .await
        .expect("plan generation responds");
    assert_eq!(incomplete.status(), StatusCode::BAD_REQUEST);

    let prompts = generator.prompts.lock().expect("prompt log lock");
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Location: Gulf coast"));
    assert!(prompts[0].contains("Type of Emergency: hurricane"));
}

#[tokio::test]
async fn unconfigured_generator_reports_service_unavailable() {
    let app = app(Arc::new(OfflineGenerator));
    let token = register(&app, "offline@example.com").await;

    let response = app
        .oneshot(post(
            "/api/gemini/generate",
            Some(&token),
            json!({ "prompt": "hello" }),
        ))
        .await
        .expect("generate responds");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
