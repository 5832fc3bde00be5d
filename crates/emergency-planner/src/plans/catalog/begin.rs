use crate::plans::domain::{PlanField, PlanStep};

pub(super) fn begin_steps() -> Vec<PlanStep> {
    vec![PlanStep {
        id: 1,
        title: "Personal Information",
        fields: vec![
            PlanField::select(
                "Age Range",
                "ageRange",
                &[
                    ("18-25", "18-25 years"),
                    ("26-35", "26-35 years"),
                    ("36-50", "36-50 years"),
                    ("51-65", "51-65 years"),
                    ("65+", "Over 65 years"),
                ],
            ),
            PlanField::input("Number of Dependents", "dependentsCount")
                .numeric(0, 15)
                .placeholder("e.g., 2"),
            PlanField::select(
                "Living Situation",
                "livingSituation",
                &[
                    ("own-house", "Own House"),
                    ("rent-house", "Rented House"),
                    ("apartment", "Apartment"),
                    ("shared", "Shared Housing"),
                    ("other", "Other"),
                ],
            ),
        ],
    }]
}
