use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The preparedness plans the service can recommend and describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanType {
    EmergencyBagpack,
    Storage,
    EmergencyFund,
}

impl PlanType {
    /// Declaration order. Ranking ties resolve in this order.
    pub const fn ordered() -> [Self; 3] {
        [Self::EmergencyBagpack, Self::Storage, Self::EmergencyFund]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmergencyBagpack => "emergency-bagpack",
            Self::Storage => "storage",
            Self::EmergencyFund => "emergency-fund",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EmergencyBagpack => "Emergency Bagpack",
            Self::Storage => "Storage",
            Self::EmergencyFund => "Emergency Fund",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::EmergencyBagpack => 0,
            Self::Storage => 1,
            Self::EmergencyFund => 2,
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = InvalidPlanType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|plan| plan.as_str() == value)
            .ok_or_else(|| InvalidPlanType {
                value: value.to_string(),
            })
    }
}

/// Raised when a caller names a plan outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid plan type '{value}'")]
pub struct InvalidPlanType {
    pub value: String,
}

/// One selectable answer of a `select` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Type-specific attributes of a questionnaire field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Select {
        options: Vec<PlanOption>,
    },
    Input {
        #[serde(rename = "inputType", skip_serializing_if = "Option::is_none")]
        input_type: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
}

/// A single question within a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanField {
    pub label: &'static str,
    pub key: &'static str,
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl PlanField {
    pub fn select(
        label: &'static str,
        key: &'static str,
        options: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            label,
            key,
            required: true,
            kind: FieldKind::Select {
                options: options
                    .iter()
                    .map(|&(value, label)| PlanOption { value, label })
                    .collect(),
            },
        }
    }

    pub fn input(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            required: true,
            kind: FieldKind::Input {
                input_type: None,
                min: None,
                max: None,
                placeholder: None,
            },
        }
    }

    /// Numeric input bounded to `min..=max`. No effect on `select` fields.
    pub fn numeric(mut self, min: u32, max: u32) -> Self {
        if let FieldKind::Input {
            input_type,
            min: lower,
            max: upper,
            ..
        } = &mut self.kind
        {
            *input_type = Some("number");
            *lower = Some(min);
            *upper = Some(max);
        }
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        if let FieldKind::Input { placeholder, .. } = &mut self.kind {
            *placeholder = Some(text);
        }
        self
    }

    pub fn options(&self) -> &[PlanOption] {
        match &self.kind {
            FieldKind::Select { options } => options,
            FieldKind::Input { .. } => &[],
        }
    }
}

/// One screen of related questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStep {
    pub id: u32,
    pub title: &'static str,
    pub fields: Vec<PlanField>,
}

/// Survey answers keyed by field key.
///
/// Non-string JSON values carry no signal and are dropped on ingest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, serde_json::Value>")]
pub struct SurveyAnswers(BTreeMap<String, String>);

impl SurveyAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for SurveyAnswers {
    fn from(raw: BTreeMap<String, serde_json::Value>) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(key, value)| match value {
                    serde_json::Value::String(text) => Some((key, text)),
                    _ => None,
                })
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for SurveyAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Ranked plan suggestion returned to questionnaire clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecommendation {
    pub primary_recommendation: PlanType,
    pub secondary_recommendation: PlanType,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_type_round_trips_wire_names() {
        for plan in PlanType::ordered() {
            assert_eq!(plan.as_str().parse::<PlanType>(), Ok(plan));
            assert_eq!(
                serde_json::to_value(plan).expect("serializes"),
                json!(plan.as_str())
            );
        }
    }

    #[test]
    fn plan_type_rejects_near_misses() {
        for raw in ["", "Storage", "emergency_fund", "emergency-backpack", "fund"] {
            let err = raw.parse::<PlanType>().expect_err("rejected");
            assert_eq!(err.value, raw);
        }
    }

    #[test]
    fn survey_answers_drop_non_string_values() {
        let answers: SurveyAnswers = serde_json::from_value(json!({
            "livingSituation": "apartment",
            "dependentsCount": 2,
            "naturalDisasterRisk": null,
            "storageSpace": true,
        }))
        .expect("object deserializes");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("livingSituation"), Some("apartment"));
        assert_eq!(answers.get("dependentsCount"), None);
    }

    #[test]
    fn fields_serialize_with_type_tag_and_camel_case_attributes() {
        let field = PlanField::input("Number of People", "peopleCount")
            .numeric(1, 10)
            .placeholder("e.g., 2");

        assert_eq!(
            serde_json::to_value(&field).expect("serializes"),
            json!({
                "type": "input",
                "label": "Number of People",
                "key": "peopleCount",
                "required": true,
                "inputType": "number",
                "min": 1,
                "max": 10,
                "placeholder": "e.g., 2",
            })
        );

        let select = PlanField::select("Duration Plan", "duration", &[("24h", "24 hours")]);
        let value = serde_json::to_value(&select).expect("serializes");
        assert_eq!(value["type"], "select");
        assert_eq!(value["options"][0], json!({ "value": "24h", "label": "24 hours" }));
        assert!(value.get("inputType").is_none());
    }
}
