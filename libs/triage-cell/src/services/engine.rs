use tracing::debug;

use crate::models::{Guidance, Severity};

/// A symptom category: the keyword that selects it and the guidance it
/// yields. Declaration order across the rule list is the tie-break: the
/// earliest matching category wins.
struct SymptomRule {
    keyword: &'static str,
    guidance: Guidance,
}

/// Ordered keyword triage. Emergency keywords are an absolute override and
/// are always tested before any category; the fallback always matches and
/// is always last. The engine holds no state across evaluations.
pub struct TriageRuleEngine {
    emergency_keywords: Vec<&'static str>,
    emergency: Guidance,
    rules: Vec<SymptomRule>,
    fallback: Guidance,
}

impl TriageRuleEngine {
    /// The standing rule table. `hotline` is the emergency number quoted in
    /// the override payload.
    pub fn with_default_rules(hotline: &str) -> Self {
        let emergency = Guidance {
            severity: Severity::Emergency,
            summary: format!(
                "This sounds like a medical emergency. Please call emergency \
                 services ({hotline}) immediately or go to the nearest \
                 emergency room. Do not wait for an online response."
            ),
            questions: vec![],
            recommendations: vec![],
            urgent_signs: vec![],
        };

        let rules = vec![
            SymptomRule {
                keyword: "headache",
                guidance: Guidance {
                    severity: Severity::Moderate,
                    summary: "I understand you're experiencing a headache.".to_string(),
                    questions: vec![
                        "How long have you had this headache?".to_string(),
                        "Is it constant or intermittent?".to_string(),
                        "Have you taken any medication?".to_string(),
                    ],
                    recommendations: vec![
                        "Rest in a quiet, dark room".to_string(),
                        "Stay hydrated".to_string(),
                        "Try over-the-counter pain relievers".to_string(),
                        "Apply a cold or warm compress".to_string(),
                    ],
                    urgent_signs: vec![
                        "Sudden, severe headache".to_string(),
                        "Headache with fever and stiff neck".to_string(),
                        "Headache after head injury".to_string(),
                    ],
                },
            },
            SymptomRule {
                keyword: "fever",
                guidance: Guidance {
                    severity: Severity::Moderate,
                    summary: "I see you have a fever.".to_string(),
                    questions: vec![
                        "What's your temperature?".to_string(),
                        "Any other symptoms?".to_string(),
                        "How long has it persisted?".to_string(),
                    ],
                    recommendations: vec![
                        "Rest and stay hydrated".to_string(),
                        "Take acetaminophen or ibuprofen".to_string(),
                        "Use light clothing and blankets".to_string(),
                        "Monitor temperature".to_string(),
                    ],
                    urgent_signs: vec![
                        "Temperature exceeds 103°F (39.4°C)".to_string(),
                        "Fever lasts more than 3 days".to_string(),
                        "Severe headache or rash develops".to_string(),
                    ],
                },
            },
            SymptomRule {
                keyword: "cough",
                guidance: Guidance {
                    severity: Severity::Mild,
                    summary: "Let's look at your cough.".to_string(),
                    questions: vec![
                        "Is it dry or productive?".to_string(),
                        "How long have you had it?".to_string(),
                        "Any other symptoms?".to_string(),
                    ],
                    recommendations: vec![
                        "Stay hydrated".to_string(),
                        "Use honey for soothing (if above 1 year old)".to_string(),
                        "Try over-the-counter cough medicine".to_string(),
                        "Use a humidifier".to_string(),
                    ],
                    urgent_signs: vec![
                        "Cough lasts more than 3 weeks".to_string(),
                        "You're coughing up blood".to_string(),
                        "Having difficulty breathing".to_string(),
                    ],
                },
            },
        ];

        let fallback = Guidance {
            severity: Severity::Unknown,
            summary: "I understand you're not feeling well. To better assist \
                      you, please provide more details. Remember, this is not \
                      a replacement for professional medical care; if your \
                      symptoms are severe or you're unsure, please consult a \
                      healthcare provider in person."
                .to_string(),
            questions: vec![
                "What are your main symptoms?".to_string(),
                "How long have you had them?".to_string(),
                "Do you have any other medical conditions?".to_string(),
                "Are you taking any medications?".to_string(),
            ],
            recommendations: vec![],
            urgent_signs: vec![],
        };

        Self {
            emergency_keywords: vec![
                "chest pain",
                "difficulty breathing",
                "unconscious",
                "severe bleeding",
            ],
            emergency,
            rules,
            fallback,
        }
    }

    /// Classify free-text input. Empty or unrecognized text resolves to the
    /// fallback guidance; this function never fails.
    pub fn evaluate(&self, input: &str) -> Guidance {
        let normalized = input.to_lowercase();

        for keyword in &self.emergency_keywords {
            if normalized.contains(keyword) {
                debug!("triage matched emergency keyword '{}'", keyword);
                return self.emergency.clone();
            }
        }

        for rule in &self.rules {
            if normalized.contains(rule.keyword) {
                debug!("triage matched category '{}'", rule.keyword);
                return rule.guidance.clone();
            }
        }

        debug!("triage input matched no category, returning fallback");
        self.fallback.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TriageRuleEngine {
        TriageRuleEngine::with_default_rules("108")
    }

    #[test]
    fn emergency_keywords_override_everything() {
        let guidance = engine().evaluate("severe chest pain and headache");
        assert_eq!(guidance.severity, Severity::Emergency);
        assert!(guidance.summary.contains("108"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let guidance = engine().evaluate("Difficulty Breathing since morning");
        assert_eq!(guidance.severity, Severity::Emergency);
    }

    #[test]
    fn first_declared_category_wins() {
        // Cough is mentioned first in the text, headache first in the table.
        let guidance = engine().evaluate("bad cough and headache");
        assert_eq!(guidance.severity, Severity::Moderate);
        assert!(guidance.summary.contains("headache"));
    }

    #[test]
    fn single_category_matches() {
        let guidance = engine().evaluate("I have had a dry cough for two days");
        assert_eq!(guidance.severity, Severity::Mild);
        assert_eq!(guidance.questions.len(), 3);
        assert!(!guidance.urgent_signs.is_empty());
    }

    #[test]
    fn empty_input_resolves_to_fallback() {
        let guidance = engine().evaluate("");
        assert_eq!(guidance.severity, Severity::Unknown);
        assert!(guidance.summary.contains("not a replacement"));
    }

    #[test]
    fn whitespace_input_resolves_to_fallback() {
        let guidance = engine().evaluate("   \n\t ");
        assert_eq!(guidance.severity, Severity::Unknown);
        assert_eq!(guidance.questions.len(), 4);
    }

    #[test]
    fn unrecognized_symptoms_resolve_to_fallback() {
        let guidance = engine().evaluate("my elbow itches");
        assert_eq!(guidance.severity, Severity::Unknown);
    }

    #[test]
    fn rendered_fallback_prompts_for_structured_detail() {
        let text = engine().evaluate("").to_message_text();
        assert!(text.contains("A few questions:"));
        assert!(text.contains("1. What are your main symptoms?"));
    }
}
