use super::super::domain::PlanType;
use super::ScoreTable;

/// Plans ordered by score, highest first. Equal scores keep declaration order.
pub(crate) fn rank(scores: &ScoreTable) -> [PlanType; 3] {
    let mut ranked = PlanType::ordered();
    // `sort_by` is stable, so ties stay in declaration order.
    ranked.sort_by(|a, b| scores.get(*b).cmp(&scores.get(*a)));
    ranked
}

pub(crate) const fn reasoning_for(primary: PlanType) -> &'static str {
    match primary {
        PlanType::EmergencyBagpack => {
            "Based on your location's natural disaster risk and living situation, an Emergency Bagpack would be most beneficial for immediate evacuation needs."
        }
        PlanType::Storage => {
            "Given your available space and stable living situation, a comprehensive Storage plan would provide the best long-term security."
        }
        PlanType::EmergencyFund => {
            "Considering the economic factors and your financial situation, building an Emergency Fund should be your top priority."
        }
    }
}
