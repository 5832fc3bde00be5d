use emergency_planner::plans::PlanType;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_plan_type(raw: &str) -> Result<PlanType, String> {
    raw.trim().parse::<PlanType>().map_err(|err| {
        let known: Vec<&str> = PlanType::ordered().iter().map(|plan| plan.as_str()).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("answer key is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
