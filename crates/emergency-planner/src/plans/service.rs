use super::catalog::PlanCatalog;
use super::domain::{InvalidPlanType, PlanRecommendation, PlanStep, PlanType, SurveyAnswers};
use super::recommendation::{RecommendationEngine, RecommendationOutcome};

/// Read-only facade over the catalog and the recommendation engine.
#[derive(Debug, Clone, Copy)]
pub struct PlanService {
    catalog: &'static PlanCatalog,
    engine: RecommendationEngine,
}

impl Default for PlanService {
    fn default() -> Self {
        Self::new(PlanCatalog::standard(), RecommendationEngine::new())
    }
}

impl PlanService {
    pub fn new(catalog: &'static PlanCatalog, engine: RecommendationEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &'static PlanCatalog {
        self.catalog
    }

    pub fn begin_steps(&self) -> &'static [PlanStep] {
        self.catalog.begin_steps()
    }

    pub fn steps(&self, plan: PlanType) -> &'static [PlanStep] {
        self.catalog.steps(plan)
    }

    pub fn plan_steps(&self, raw: &str) -> Result<&'static [PlanStep], InvalidPlanType> {
        self.catalog.steps_for(raw)
    }

    pub fn recommend(&self, answers: &SurveyAnswers) -> PlanRecommendation {
        self.engine.recommend(answers)
    }

    pub fn evaluate(&self, answers: &SurveyAnswers) -> RecommendationOutcome {
        self.engine.evaluate(answers)
    }
}
