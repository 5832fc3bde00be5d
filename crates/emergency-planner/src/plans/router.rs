use std::sync::Arc;

use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use tracing::{debug, warn};

use super::domain::{PlanRecommendation, PlanStep, SurveyAnswers};
use super::service::PlanService;
use crate::auth::{require_token, AuthService, Identity, TokenStore, UserStore};
use crate::error::AppError;

/// Questionnaire and recommendation routes; every route requires a bearer token.
pub fn plan_router<U, T>(plans: PlanService, auth: Arc<AuthService<U, T>>) -> Router
where
    U: UserStore + 'static,
    T: TokenStore + 'static,
{
    Router::new()
        .route("/api/plans/begin", get(begin_handler))
        .route("/api/plans/:plan_type/steps", get(steps_handler))
        .route("/api/plans/recommend", post(recommend_handler))
        .route_layer(middleware::from_fn_with_state(auth, require_token::<U, T>))
        .with_state(plans)
}

pub(crate) async fn begin_handler(State(plans): State<PlanService>) -> Json<&'static [PlanStep]> {
    Json(plans.begin_steps())
}

pub(crate) async fn steps_handler(
    State(plans): State<PlanService>,
    Path(plan_type): Path<String>,
) -> Result<Json<&'static [PlanStep]>, AppError> {
    let steps = plans.plan_steps(&plan_type).map_err(|err| {
        warn!(%plan_type, "unknown plan type requested");
        err
    })?;
    Ok(Json(steps))
}

pub(crate) async fn recommend_handler(
    State(plans): State<PlanService>,
    Extension(identity): Extension<Identity>,
    Json(answers): Json<SurveyAnswers>,
) -> Json<PlanRecommendation> {
    let outcome = plans.evaluate(&answers);
    debug!(
        user_id = %identity.user_id,
        answers = answers.len(),
        rules_matched = outcome.matched_rules.len(),
        scores = ?outcome.scores,
        primary = %outcome.recommendation.primary_recommendation,
        "scored survey answers"
    );
    Json(outcome.recommendation)
}
