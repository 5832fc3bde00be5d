use std::sync::Arc;

use axum::{extract::State, middleware, routing::post, Extension, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{AssistantError, EmergencyPlanRequest, TextGenerator};
use crate::auth::{require_token, AuthService, Identity, TokenStore, UserStore};
use crate::error::AppError;

/// Token-guarded routes that forward prompts to the text generator.
pub fn assistant_router<U, T>(
    generator: Arc<dyn TextGenerator>,
    auth: Arc<AuthService<U, T>>,
) -> Router
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    Router::new()
        .route("/api/gemini/generate", post(generate_handler))
        .route("/api/plans/generate", post(generate_plan_handler))
        .route_layer(middleware::from_fn_with_state(auth, require_token::<U, T>))
        .with_state(generator)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PromptRequest {
    #[serde(default)]
    prompt: Option<String>,
}

pub(crate) async fn generate_handler(
    State(generator): State<Arc<dyn TextGenerator>>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<Value>, AppError> {
    let prompt = request
        .prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .ok_or(AssistantError::MissingPrompt)?;

    let text = generator.generate(&prompt).await?;
    Ok(Json(json!({ "response": text })))
}

pub(crate) async fn generate_plan_handler(
    State(generator): State<Arc<dyn TextGenerator>>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<EmergencyPlanRequest>,
) -> Result<Json<Value>, AppError> {
    let prompt = request.prompt()?;

    info!(user_id = %identity.user_id, "generating emergency plan draft");
    let plan = generator.generate(&prompt).await?;

    Ok(Json(json!({
        "message": "Emergency plan generated successfully",
        "plan": plan,
    })))
}
