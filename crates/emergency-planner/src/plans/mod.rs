//! Preparedness plan questionnaires and the survey-driven recommendation engine.
//!
//! The catalog is static data served read-only; the engine is a pure function of the
//! survey answers. Both share the closed [`PlanType`] set, and nothing else.

pub mod catalog;
pub mod domain;
pub mod recommendation;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::PlanCatalog;
pub use domain::{
    FieldKind, InvalidPlanType, PlanField, PlanOption, PlanRecommendation, PlanStep, PlanType,
    SurveyAnswers,
};
pub use recommendation::{
    PlanPoints, RecommendationEngine, RecommendationOutcome, RuleMatch, ScoreTable, ScoringRule,
};
pub use router::plan_router;
pub use service::PlanService;
