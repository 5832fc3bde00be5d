use serde::Deserialize;
use serde_json::Value;

use super::AssistantError;

/// Request for an AI-drafted emergency plan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyPlanRequest {
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default, rename = "type")]
    pub emergency_type: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub specific_needs: Option<Value>,
}

const PLAN_SECTIONS: [&str; 7] = [
    "Immediate actions to take",
    "Evacuation procedures",
    "Communication plan",
    "Emergency contacts",
    "Resource requirements",
    "Safety measures",
    "Recovery steps",
];

impl EmergencyPlanRequest {
    /// Render the generation prompt; location, type, and size are required.
    pub fn prompt(&self) -> Result<String, AssistantError> {
        let (Some(location), Some(emergency_type), Some(size)) = (
            scalar_text(&self.location),
            scalar_text(&self.emergency_type),
            scalar_text(&self.size),
        ) else {
            return Err(AssistantError::MissingPlanFields);
        };

        let mut prompt = format!(
            "Create a detailed emergency plan for:\nLocation: {location}\nType of Emergency: {emergency_type}\nSize/Scale: {size}\n"
        );
        if let Some(needs) = scalar_text(&self.specific_needs) {
            prompt.push_str(&format!("Specific Needs: {needs}\n"));
        }

        prompt.push_str("\nPlease provide:\n");
        for (index, section) in PLAN_SECTIONS.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", index + 1, section));
        }

        Ok(prompt)
    }
}

fn scalar_text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
