use crate::plans::domain::{PlanField, PlanStep};

pub(super) fn storage_steps() -> Vec<PlanStep> {
    vec![
        PlanStep {
            id: 1,
            title: "Basic Storage Information",
            fields: vec![
                PlanField::input("Number of people to prepare for", "peopleCount")
                    .placeholder("e.g., 4"),
                PlanField::select(
                    "Storage Duration",
                    "duration",
                    &[
                        ("3months", "3 months"),
                        ("6months", "6 months"),
                        ("1year", "1 year"),
                    ],
                ),
                PlanField::select(
                    "Storage Space Type",
                    "spaceType",
                    &[
                        ("apartment", "Apartment"),
                        ("house", "House"),
                        ("basement", "Basement"),
                        ("garage", "Garage"),
                        ("external", "External Storage Unit"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 2,
            title: "Food Storage Requirements",
            fields: vec![
                PlanField::select(
                    "Dietary Restrictions",
                    "dietaryRestrictions",
                    &[
                        ("none", "No restrictions"),
                        ("vegetarian", "Vegetarian"),
                        ("vegan", "Vegan"),
                        ("gluten-free", "Gluten-free"),
                        ("dairy-free", "Dairy-free"),
                    ],
                ),
                PlanField::select(
                    "Food Storage Method",
                    "storageMethod",
                    &[
                        ("canned", "Canned Foods"),
                        ("dried", "Dried Foods"),
                        ("frozen", "Frozen Foods"),
                        ("mixed", "Mixed Methods"),
                    ],
                ),
                PlanField::select(
                    "Storage Temperature Control",
                    "temperatureControl",
                    &[
                        ("room-temp", "Room Temperature"),
                        ("cool", "Cool Storage"),
                        ("refrigerated", "Refrigerated"),
                        ("mixed", "Mixed Storage Conditions"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 3,
            title: "Water Storage",
            fields: vec![
                PlanField::select(
                    "Water Storage Container Type",
                    "waterContainerType",
                    &[
                        ("plastic-containers", "Plastic Containers"),
                        ("water-barrels", "Water Barrels"),
                        ("water-bottles", "Water Bottles"),
                        ("mixed", "Mixed Containers"),
                    ],
                ),
                PlanField::select(
                    "Water Treatment Method",
                    "waterTreatment",
                    &[
                        ("none", "No Treatment (Sealed Containers)"),
                        ("filters", "Water Filters"),
                        ("chemical", "Chemical Treatment"),
                        ("mixed", "Mixed Methods"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 4,
            title: "Additional Supplies",
            fields: vec![
                PlanField::select(
                    "Medical Supplies Level",
                    "medicalSupplies",
                    &[
                        ("basic", "Basic First Aid"),
                        ("intermediate", "Intermediate Medical Supplies"),
                        ("advanced", "Advanced Medical Kit"),
                    ],
                ),
                PlanField::select(
                    "Power Backup",
                    "powerBackup",
                    &[
                        ("none", "No Power Backup"),
                        ("batteries", "Batteries Only"),
                        ("generator", "Generator"),
                        ("solar", "Solar Power"),
                    ],
                ),
                PlanField::select(
                    "Hygiene Supplies",
                    "hygieneSupplies",
                    &[
                        ("basic", "Basic Supplies"),
                        ("intermediate", "Intermediate Supplies"),
                        ("advanced", "Advanced Supplies"),
                    ],
                ),
            ],
        },
        PlanStep {
            id: 5,
            title: "Storage Organization",
            fields: vec![
                PlanField::select(
                    "Storage Organization System",
                    "organizationSystem",
                    &[
                        ("shelves", "Shelving Units"),
                        ("containers", "Storage Containers"),
                        ("cabinets", "Storage Cabinets"),
                        ("mixed", "Mixed Storage Solutions"),
                    ],
                ),
                PlanField::select(
                    "Inventory Management",
                    "inventoryManagement",
                    &[
                        ("simple-list", "Simple List"),
                        ("spreadsheet", "Spreadsheet"),
                        ("app", "Mobile App"),
                        ("none", "No System"),
                    ],
                ),
                PlanField::select(
                    "Rotation Schedule",
                    "rotationSchedule",
                    &[
                        ("monthly", "Monthly"),
                        ("quarterly", "Quarterly"),
                        ("biannual", "Bi-annual"),
                        ("annual", "Annual"),
                    ],
                ),
            ],
        },
    ]
}
