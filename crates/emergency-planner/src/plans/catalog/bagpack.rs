use crate::plans::domain::{PlanField, PlanStep};

pub(super) fn emergency_bagpack_steps() -> Vec<PlanStep> {
    vec![
        PlanStep {
            id: 1,
            title: "Basic Bagpack Information",
            fields: vec![
                PlanField::input("Number of People", "peopleCount")
                    .numeric(1, 10)
                    .placeholder("e.g., 2"),
                PlanField::select(
                    "Mobility Requirements",
                    "mobilityNeeds",
                    &[
                        ("high", "High mobility (Need to move quickly)"),
                        ("medium", "Medium mobility (Can carry moderate weight)"),
                        ("low", "Low mobility (Limited carrying capacity)"),
                    ],
                ),
                PlanField::select(
                    "Duration Plan",
                    "duration",
                    &[
                        ("24h", "24 hours"),
                        ("48h", "48 hours"),
                        ("72h", "72 hours (Recommended)"),
                        ("96h", "96 hours"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 2,
            title: "Essential Documents",
            fields: vec![
                PlanField::select(
                    "Document Storage Method",
                    "documentStorage",
                    &[
                        ("physical", "Physical copies only"),
                        ("digital", "Digital copies only"),
                        ("both", "Both physical and digital"),
                    ],
                ),
                PlanField::select(
                    "Identity Documents",
                    "identityDocs",
                    &[
                        ("basic", "Basic (ID, passport)"),
                        ("extended", "Extended (+ birth certificates, SSN)"),
                        ("comprehensive", "Comprehensive (+ property documents)"),
                    ],
                ),
                PlanField::select(
                    "Financial Documents",
                    "financialDocs",
                    &[
                        ("minimal", "Minimal (Cash, main credit card)"),
                        ("essential", "Essential (+ insurance info)"),
                        ("complete", "Complete (+ account details, contracts)"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 3,
            title: "Medical and First Aid",
            fields: vec![
                PlanField::select(
                    "Medical Conditions",
                    "medicalConditions",
                    &[
                        ("none", "No specific conditions"),
                        ("basic", "Basic medical needs"),
                        ("chronic", "Chronic conditions"),
                        ("multiple", "Multiple conditions"),
                    ],
                ),
                PlanField::select(
                    "First Aid Kit Level",
                    "firstAidLevel",
                    &[
                        ("basic", "Basic kit"),
                        ("intermediate", "Intermediate kit"),
                        ("advanced", "Advanced kit"),
                    ],
                ),
                PlanField::select(
                    "Prescription Medications",
                    "medications",
                    &[
                        ("none", "No medications needed"),
                        ("basic", "1-2 medications"),
                        ("multiple", "Multiple medications"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 4,
            title: "Survival Essentials",
            fields: vec![
                PlanField::select(
                    "Water Storage",
                    "waterStorage",
                    &[
                        ("bottles", "Water bottles"),
                        ("containers", "Water containers"),
                        ("both", "Both + filtration system"),
                    ],
                ),
                PlanField::select(
                    "Food Type",
                    "foodType",
                    &[
                        ("ready-to-eat", "Ready-to-eat meals"),
                        ("dehydrated", "Dehydrated food"),
                        ("mixed", "Mixed types"),
                    ],
                ),
                PlanField::select(
                    "Emergency Tools",
                    "tools",
                    &[
                        ("basic", "Basic (flashlight, multi-tool)"),
                        ("intermediate", "+ Radio, batteries"),
                        ("advanced", "+ Navigation, advanced tools"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 5,
            title: "Additional Considerations",
            fields: vec![
                PlanField::select(
                    "Climate Preparation",
                    "climate",
                    &[
                        ("warm", "Warm climate gear"),
                        ("cold", "Cold climate gear"),
                        ("variable", "Variable weather gear"),
                    ],
                ),
                PlanField::select(
                    "Communication Devices",
                    "communication",
                    &[
                        ("basic", "Basic (Phone + charger)"),
                        ("intermediate", "+ Backup battery"),
                        ("advanced", "+ Emergency radio, satellite device"),
                    ],
                ),
                PlanField::select(
                    "Special Items",
                    "specialItems",
                    &[
                        ("none", "No special items"),
                        ("children", "Children supplies"),
                        ("pets", "Pet supplies"),
                        ("both", "Both children and pet supplies"),
                    ],
                ),
            ],
        },
    ]
}
