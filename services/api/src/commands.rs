use crate::infra::{parse_answer, parse_plan_type};
use clap::Args;
use emergency_planner::error::AppError;
use emergency_planner::plans::{
    FieldKind, PlanService, PlanStep, PlanType, RecommendationOutcome, SurveyAnswers,
};
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct StepsArgs {
    /// Plan type to describe; prints the entry questionnaire when omitted
    #[arg(long, value_parser = parse_plan_type)]
    pub(crate) plan_type: Option<PlanType>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Survey answer as key=value (repeatable), e.g. --answer storageSpace=large
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
}

pub(crate) fn run_steps(args: StepsArgs) -> Result<(), AppError> {
    let plans = PlanService::default();
    let (heading, steps) = match args.plan_type {
        Some(plan) => (plan.label(), plans.steps(plan)),
        None => ("Getting Started", plans.begin_steps()),
    };

    render_steps(&mut io::stdout().lock(), heading, steps)?;
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let answers: SurveyAnswers = args.answers.into_iter().collect();
    let outcome = PlanService::default().evaluate(&answers);

    render_outcome(&mut io::stdout().lock(), &outcome)?;
    Ok(())
}

fn render_steps(out: &mut impl Write, heading: &str, steps: &[PlanStep]) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "=".repeat(heading.len()))?;

    for step in steps {
        writeln!(out, "\nStep {}: {}", step.id, step.title)?;
        for field in &step.fields {
            let required = if field.required { "" } else { " (optional)" };
            match &field.kind {
                FieldKind::Select { options } => {
                    let values: Vec<&str> = options.iter().map(|option| option.value).collect();
                    writeln!(
                        out,
                        "  - {} [{}]{}: {}",
                        field.label,
                        field.key,
                        required,
                        values.join(" | ")
                    )?;
                }
                FieldKind::Input { min, max, .. } => {
                    let range = match (min, max) {
                        (Some(min), Some(max)) => format!(" ({min}-{max})"),
                        _ => String::new(),
                    };
                    writeln!(
                        out,
                        "  - {} [{}]{}: free input{}",
                        field.label, field.key, required, range
                    )?;
                }
            }
        }
    }

    Ok(())
}

fn render_outcome(out: &mut impl Write, outcome: &RecommendationOutcome) -> io::Result<()> {
    let recommendation = &outcome.recommendation;

    writeln!(
        out,
        "Primary recommendation:   {}",
        recommendation.primary_recommendation.label()
    )?;
    writeln!(
        out,
        "Secondary recommendation: {}",
        recommendation.secondary_recommendation.label()
    )?;
    writeln!(out, "\n{}", recommendation.reasoning)?;

    writeln!(out, "\nScores:")?;
    for (plan, points) in outcome.ranking() {
        writeln!(out, "  {:<18} {points}", plan.as_str())?;
    }

    if outcome.matched_rules.is_empty() {
        writeln!(out, "\nNo scoring rules matched the supplied answers.")?;
    } else {
        writeln!(out, "\nMatched rules:")?;
        for rule in &outcome.matched_rules {
            writeln!(
                out,
                "  {}={} ({}): bagpack +{}, storage +{}, fund +{}",
                rule.key,
                rule.answer,
                rule.note,
                rule.points.emergency_bagpack,
                rule.points.storage,
                rule.points.emergency_fund
            )?;
        }
    }

    Ok(())
}
