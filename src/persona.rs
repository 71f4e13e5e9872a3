//! Call-center persona and system prompt assembly

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::data::RailwayData;

/// The voice of the call center: who answers, and with what words
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Agent name, e.g. "Raj"
    pub name: String,
    /// Operator name, e.g. "Indian Railways"
    pub operator: String,
    /// Spoken/displayed when a call starts
    pub welcome: String,
    /// Spoken/displayed when a call ends
    pub farewell: String,
    /// Emergency helpline shown in the static footer
    pub emergency_contact: String,
    /// Customer care number shown in the static footer
    pub customer_care: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Raj".to_string(),
            operator: "Indian Railways".to_string(),
            welcome: "Hello, this is Raj from Indian Railways. How may I assist you today?"
                .to_string(),
            farewell: "Thank you for calling Indian Railways. Have a great day!".to_string(),
            emergency_contact: "139".to_string(),
            customer_care: "1800-111-139".to_string(),
        }
    }
}

impl Persona {
    /// The static emergency/contact footer line
    #[must_use]
    pub fn footer(&self) -> String {
        format!(
            "Emergency Contact: {} | Customer Care: {}",
            self.emergency_contact, self.customer_care
        )
    }
}

/// Build the system prompt that initializes the conversation session
///
/// Embeds a JSON snapshot of the structured data so the model can answer
/// schedule and FAQ questions even when a query matches nothing in the
/// enrichment step.
#[must_use]
pub fn build_system_prompt(persona: &Persona, data: &RailwayData) -> String {
    let schedules = serde_json::to_string_pretty(&data.train_schedules).unwrap_or_default();
    let faqs = serde_json::to_string_pretty(&data.faqs).unwrap_or_default();

    let mut prompt = format!(
        "You are {}, a professional call center employee at {}.\n\
         Use the following railway information to assist customers:\n\n",
        persona.name, persona.operator
    );

    let _ = write!(prompt, "Train Schedules:\n{schedules}\n\nFAQs:\n{faqs}\n\n");

    let _ = write!(
        prompt,
        "When answering:\n\
         1. If asked about train schedules, look up the train number in the database\n\
         2. For general questions, check the FAQs first\n\
         3. Always maintain a professional tone\n\
         4. Start with: \"Hello, this is {} from {}.\"\n\
         5. End with: \"Is there anything else I can help you with?\"",
        persona.name, persona.operator
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_persona_matches_operator_branding() {
        let persona = Persona::default();
        assert_eq!(persona.name, "Raj");
        assert!(persona.welcome.contains("Indian Railways"));
        assert_eq!(persona.footer(), "Emergency Contact: 139 | Customer Care: 1800-111-139");
    }

    #[test]
    fn system_prompt_embeds_data_snapshot() {
        let prompt = build_system_prompt(&Persona::default(), &RailwayData::builtin());

        assert!(prompt.contains("You are Raj, a professional call center employee"));
        assert!(prompt.contains("Rajdhani Express"));
        assert!(prompt.contains("Shatabdi Express"));
        assert!(prompt.contains("luggage_allowance"));
        assert!(prompt.contains("Is there anything else I can help you with?"));
    }

    #[test]
    fn system_prompt_uses_configured_names() {
        let persona = Persona {
            name: "Asha".to_string(),
            operator: "Konkan Railway".to_string(),
            ..Persona::default()
        };
        let prompt = build_system_prompt(&persona, &RailwayData::builtin());
        assert!(prompt.contains("Hello, this is Asha from Konkan Railway."));
    }
}
