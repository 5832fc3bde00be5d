//! End-to-end questionnaire flow: sign in, score answers, then fetch the steps of the
//! recommended plan through the public router.

mod common {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, Response};
    use axum::Router;
    use serde_json::Value;

    use emergency_planner::auth::{
        auth_router, AuthService, InMemoryTokenStore, InMemoryUserStore,
    };
    use emergency_planner::config::AuthConfig;
    use emergency_planner::plans::{plan_router, PlanService};

    pub(super) fn app() -> Router {
        let auth = Arc::new(AuthService::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryTokenStore::new()),
            &AuthConfig::default(),
        ));
        plan_router(PlanService::default(), auth.clone()).merge(auth_router(auth))
    }

    pub(super) fn json_request(
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: &Value,
    ) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    pub(super) async fn json_body(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("json body")
    }
}

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{app, json_body, json_request};
use emergency_planner::plans::{PlanCatalog, PlanType};

#[tokio::test]
async fn recommended_plan_steps_can_be_fetched() {
    let app = app();

    let registered = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            &json!({ "email": "family@example.com", "password": "go-bag-ready" }),
        ))
        .await
        .expect("register responds");
    assert_eq!(registered.status(), StatusCode::CREATED);
    let token = json_body(registered).await["token"]
        .as_str()
        .expect("token issued")
        .to_string();

    let recommended = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/plans/recommend",
            Some(&token),
            &json!({
                "naturalDisasterRisk": "high",
                "economicStability": "stable",
                "livingSituation": "own-house",
                "storageSpace": "large",
                "incomeStability": "stable",
                "savingsLevel": "high",
                "primaryConcern": "natural-disasters",
            }),
        ))
        .await
        .expect("recommend responds");
    assert_eq!(recommended.status(), StatusCode::OK);
    let recommendation = json_body(recommended).await;
    assert_eq!(recommendation["primaryRecommendation"], "storage");
    assert_eq!(recommendation["secondaryRecommendation"], "emergency-bagpack");

    let primary = recommendation["primaryRecommendation"]
        .as_str()
        .expect("plan type string");
    let steps = app
        .oneshot(json_request(
            "GET",
            &format!("/api/plans/{primary}/steps"),
            Some(&token),
            &json!(null),
        ))
        .await
        .expect("steps respond");
    assert_eq!(steps.status(), StatusCode::OK);

    let expected = serde_json::to_value(PlanCatalog::standard().steps(PlanType::Storage))
        .expect("catalog serializes");
    assert_eq!(json_body(steps).await, expected);
}

#[tokio::test]
async fn every_recommendation_resolves_in_the_catalog() {
    let app = app();
    let registered = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            &json!({ "email": "renter@example.com", "password": "savings" }),
        ))
        .await
        .expect("register responds");
    let token = json_body(registered).await["token"]
        .as_str()
        .expect("token issued")
        .to_string();

    let surveys = [
        json!({}),
        json!({ "economicStability": "unstable", "savingsLevel": "none" }),
        json!({ "livingSituation": "own-house", "storageSpace": "large" }),
        json!({ "naturalDisasterRisk": "high", "livingSituation": "apartment" }),
    ];

    for survey in surveys {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/plans/recommend",
                Some(&token),
                &survey,
            ))
            .await
            .expect("recommend responds");
        let body = json_body(response).await;

        for key in ["primaryRecommendation", "secondaryRecommendation"] {
            let plan = body[key].as_str().expect("plan type string");
            assert!(
                PlanCatalog::standard().steps_for(plan).is_ok(),
                "{plan} missing from catalog"
            );
        }
        assert_ne!(body["primaryRecommendation"], body["secondaryRecommendation"]);
    }
}
