use serde::Serialize;

use super::super::domain::{PlanType, SurveyAnswers};
use super::ScoreTable;

/// Points a single rule awards to each plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanPoints {
    pub emergency_bagpack: u32,
    pub storage: u32,
    pub emergency_fund: u32,
}

impl PlanPoints {
    const fn new(emergency_bagpack: u32, storage: u32, emergency_fund: u32) -> Self {
        Self {
            emergency_bagpack,
            storage,
            emergency_fund,
        }
    }

    pub fn for_plan(&self, plan: PlanType) -> u32 {
        match plan {
            PlanType::EmergencyBagpack => self.emergency_bagpack,
            PlanType::Storage => self.storage,
            PlanType::EmergencyFund => self.emergency_fund,
        }
    }
}

/// Fires when `answers[key]` equals one of `values`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub key: &'static str,
    pub values: &'static [&'static str],
    pub points: PlanPoints,
    pub note: &'static str,
}

impl ScoringRule {
    fn matches<'a>(&self, answers: &'a SurveyAnswers) -> Option<&'a str> {
        answers
            .get(self.key)
            .filter(|answer| self.values.contains(answer))
    }
}

pub(crate) static STANDARD_RULES: &[ScoringRule] = &[
    ScoringRule {
        key: "naturalDisasterRisk",
        values: &["high"],
        points: PlanPoints::new(3, 2, 0),
        note: "high natural disaster risk",
    },
    ScoringRule {
        key: "economicStability",
        values: &["unstable"],
        points: PlanPoints::new(0, 0, 3),
        note: "unstable local economy",
    },
    ScoringRule {
        key: "livingSituation",
        values: &["apartment"],
        points: PlanPoints::new(1, 0, 1),
        note: "apartment living",
    },
    ScoringRule {
        key: "livingSituation",
        values: &["own-house"],
        points: PlanPoints::new(0, 2, 0),
        note: "owns a house",
    },
    ScoringRule {
        key: "storageSpace",
        values: &["large"],
        points: PlanPoints::new(0, 2, 0),
        note: "large storage space",
    },
    ScoringRule {
        key: "storageSpace",
        values: &["limited", "none"],
        points: PlanPoints::new(1, 0, 1),
        note: "little or no storage space",
    },
    ScoringRule {
        key: "incomeStability",
        values: &["unstable", "variable"],
        points: PlanPoints::new(0, 0, 3),
        note: "unstable or variable income",
    },
    ScoringRule {
        key: "savingsLevel",
        values: &["none", "low"],
        points: PlanPoints::new(0, 0, 2),
        note: "low savings",
    },
    ScoringRule {
        key: "primaryConcern",
        values: &["natural-disasters"],
        points: PlanPoints::new(2, 1, 0),
        note: "primary concern is natural disasters",
    },
    ScoringRule {
        key: "primaryConcern",
        values: &["economic-crisis", "job-loss"],
        points: PlanPoints::new(0, 0, 2),
        note: "primary concern is economic hardship",
    },
];

/// A rule that fired, kept so callers can explain a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub key: &'static str,
    pub answer: String,
    pub points: PlanPoints,
    pub note: &'static str,
}

/// Evaluate every rule against the answers; rules never short-circuit each other.
pub(crate) fn score_answers(
    answers: &SurveyAnswers,
    rules: &[ScoringRule],
) -> (ScoreTable, Vec<RuleMatch>) {
    let mut scores = ScoreTable::default();
    let mut matched = Vec::new();

    for rule in rules {
        let Some(answer) = rule.matches(answers) else {
            continue;
        };

        for plan in PlanType::ordered() {
            scores.add(plan, rule.points.for_plan(plan));
        }
        matched.push(RuleMatch {
            key: rule.key,
            answer: answer.to_string(),
            points: rule.points,
            note: rule.note,
        });
    }

    (scores, matched)
}
