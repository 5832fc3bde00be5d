use crate::plans::domain::{PlanField, PlanStep};

const MONTHLY_AMOUNT: &str = "Monthly amount in $";

pub(super) fn emergency_fund_steps() -> Vec<PlanStep> {
    vec![
        PlanStep {
            id: 1,
            title: "Basic Financial Information",
            fields: vec![
                PlanField::select(
                    "Employment Status",
                    "employmentStatus",
                    &[
                        ("full-time", "Full-time employed"),
                        ("part-time", "Part-time employed"),
                        ("self-employed", "Self-employed"),
                        ("unemployed", "Currently unemployed"),
                        ("retired", "Retired"),
                    ],
                ),
                PlanField::select(
                    "Income Stability",
                    "incomeStability",
                    &[
                        ("very-stable", "Very stable"),
                        ("stable", "Stable"),
                        ("variable", "Variable"),
                        ("unstable", "Unstable"),
                    ],
                ),
                PlanField::input("Number of Dependents", "dependentsCount").placeholder("e.g., 2"),
            ],
        },
        PlanStep {
            id: 2,
            title: "Monthly Expenses (in $)",
            fields: vec![
                PlanField::input("Housing (Rent/Mortgage)", "housingExpense")
                    .placeholder(MONTHLY_AMOUNT),
                PlanField::input("Utilities (Electric, Water, Gas)", "utilitiesExpense")
                    .placeholder(MONTHLY_AMOUNT),
                PlanField::input("Food and Groceries", "foodExpense").placeholder(MONTHLY_AMOUNT),
                PlanField::input("Transportation", "transportationExpense")
                    .placeholder(MONTHLY_AMOUNT),
            ],
        },
        PlanStep {
            id: 3,
            title: "Fund Goals and Timeline",
            fields: vec![
                PlanField::select(
                    "Target Fund Size",
                    "targetFundSize",
                    &[
                        ("3-months", "3 months of expenses"),
                        ("6-months", "6 months of expenses"),
                        ("9-months", "9 months of expenses"),
                        ("12-months", "12 months of expenses"),
                    ],
                ),
                PlanField::select(
                    "Saving Timeline",
                    "savingTimeline",
                    &[
                        ("6-months", "6 months"),
                        ("1-year", "1 year"),
                        ("2-years", "2 years"),
                        ("flexible", "Flexible timeline"),
                    ],
                ),
                PlanField::input("Monthly Saving Capacity", "monthlySaving")
                    .placeholder("Amount you can save monthly in $"),
            ],
        },
        PlanStep {
            id: 4,
            title: "Fund Storage and Access",
            fields: vec![
                PlanField::select(
                    "Primary Storage Method",
                    "storageMethod",
                    &[
                        ("savings", "Savings Account"),
                        ("money-market", "Money Market Account"),
                        ("high-yield", "High-yield Savings Account"),
                        ("mixed", "Mixed Accounts"),
                    ],
                ),
                PlanField::select(
                    "Access Requirements",
                    "accessRequirements",
                    &[
                        ("immediate", "Immediate access needed"),
                        ("1-3-days", "1-3 days acceptable"),
                        ("mixed", "Mixed access times"),
                    ],
                ),
                PlanField::select(
                    "Risk Tolerance",
                    "riskTolerance",
                    &[
                        ("very-low", "Very low (Savings only)"),
                        ("low", "Low (Mostly savings)"),
                        ("moderate", "Moderate (Some investments)"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 5,
            title: "Additional Considerations",
            fields: vec![
                PlanField::select(
                    "Insurance Coverage",
                    "insuranceCoverage",
                    &[
                        ("comprehensive", "Comprehensive coverage"),
                        ("basic", "Basic coverage"),
                        ("minimal", "Minimal coverage"),
                        ("none", "No insurance"),
                    ],
                ),
                PlanField::select(
                    "Debt Obligations",
                    "debtObligations",
                    &[
                        ("none", "No debt"),
                        ("low", "Low debt"),
                        ("moderate", "Moderate debt"),
                        ("high", "High debt"),
                    ],
                ),
                PlanField::select(
                    "Additional Income Sources",
                    "additionalIncome",
                    &[
                        ("none", "No additional income"),
                        ("part-time", "Part-time work available"),
                        ("investments", "Investment income"),
                        ("multiple", "Multiple sources"),
                    ],
                ),
            ],
        },
    ]
}
