mod bagpack;
mod begin;
mod fund;
mod storage;

use std::sync::OnceLock;

use super::domain::{InvalidPlanType, PlanStep, PlanType};

/// Immutable questionnaire definitions for the entry flow and every plan type.
#[derive(Debug)]
pub struct PlanCatalog {
    begin: Vec<PlanStep>,
    emergency_bagpack: Vec<PlanStep>,
    storage: Vec<PlanStep>,
    emergency_fund: Vec<PlanStep>,
}

impl PlanCatalog {
    /// Process-wide catalog, built on first access and never mutated afterwards.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<PlanCatalog> = OnceLock::new();
        STANDARD.get_or_init(Self::build)
    }

    fn build() -> Self {
        Self {
            begin: begin::begin_steps(),
            emergency_bagpack: bagpack::emergency_bagpack_steps(),
            storage: storage::storage_steps(),
            emergency_fund: fund::emergency_fund_steps(),
        }
    }

    /// The "Personal Information" step shown before any plan is chosen.
    pub fn begin_steps(&self) -> &[PlanStep] {
        &self.begin
    }

    pub fn steps(&self, plan: PlanType) -> &[PlanStep] {
        match plan {
            PlanType::EmergencyBagpack => &self.emergency_bagpack,
            PlanType::Storage => &self.storage,
            PlanType::EmergencyFund => &self.emergency_fund,
        }
    }

    /// Validate a raw identifier (e.g. a path segment) before looking it up.
    pub fn steps_for(&self, raw: &str) -> Result<&[PlanStep], InvalidPlanType> {
        let plan = raw.parse::<PlanType>()?;
        Ok(self.steps(plan))
    }
}
