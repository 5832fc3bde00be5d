mod ranking;
mod rules;

pub use rules::{PlanPoints, RuleMatch, ScoringRule};

use super::domain::{PlanRecommendation, PlanType, SurveyAnswers};
use serde::Serialize;

/// Per-plan point accumulator for a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTable {
    points: [u32; 3],
}

impl ScoreTable {
    pub fn get(&self, plan: PlanType) -> u32 {
        self.points[plan.index()]
    }

    pub(crate) fn add(&mut self, plan: PlanType, points: u32) {
        self.points[plan.index()] = self.points[plan.index()].saturating_add(points);
    }

    /// Scores in declaration order.
    pub fn entries(&self) -> [(PlanType, u32); 3] {
        PlanType::ordered().map(|plan| (plan, self.get(plan)))
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(3))?;
        for (plan, points) in self.entries() {
            map.serialize_entry(plan.as_str(), &points)?;
        }
        map.end()
    }
}

/// Stateless scorer mapping survey answers onto a ranked plan recommendation.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    rules: &'static [ScoringRule],
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            rules: rules::STANDARD_RULES,
        }
    }

    pub fn rules(&self) -> &'static [ScoringRule] {
        self.rules
    }

    pub fn recommend(&self, answers: &SurveyAnswers) -> PlanRecommendation {
        self.evaluate(answers).recommendation
    }

    /// Score, rank, and keep the audit trail of which rules fired.
    pub fn evaluate(&self, answers: &SurveyAnswers) -> RecommendationOutcome {
        let (scores, matched_rules) = rules::score_answers(answers, self.rules);
        let [primary, secondary, _] = ranking::rank(&scores);

        RecommendationOutcome {
            recommendation: PlanRecommendation {
                primary_recommendation: primary,
                secondary_recommendation: secondary,
                reasoning: ranking::reasoning_for(primary).to_string(),
            },
            scores,
            matched_rules,
        }
    }
}

/// Recommendation plus the scores and rule matches that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationOutcome {
    pub recommendation: PlanRecommendation,
    pub scores: ScoreTable,
    pub matched_rules: Vec<RuleMatch>,
}

impl RecommendationOutcome {
    /// Every plan with its score, best first.
    pub fn ranking(&self) -> [(PlanType, u32); 3] {
        ranking::rank(&self.scores).map(|plan| (plan, self.scores.get(plan)))
    }
}
