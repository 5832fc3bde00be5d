use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::build_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use emergency_planner::assistant::GeminiClient;
use emergency_planner::auth::{AuthService, InMemoryTokenStore, InMemoryUserStore};
use emergency_planner::config::AppConfig;
use emergency_planner::error::AppError;
use emergency_planner::plans::PlanService;
use emergency_planner::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let auth = Arc::new(AuthService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryTokenStore::new()),
        &config.auth,
    ));

    let sweeper = auth.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(err) = sweeper.purge_expired().await {
                warn!(error = %err, "session sweep failed");
            }
        }
    });

    let generator = GeminiClient::new(&config.assistant)?;
    if !generator.is_configured() {
        warn!("GEMINI_API_KEY is not set; text generation routes will answer 503");
    }

    let app = build_router(PlanService::default(), auth, Arc::new(generator))
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, model = %config.assistant.model, "emergency planner api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
