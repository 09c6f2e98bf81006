use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Emergency,
    Moderate,
    Mild,
    Unknown,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Emergency => write!(f, "emergency"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Mild => write!(f, "mild"),
            Severity::Unknown => write!(f, "unknown"),
        }
    }
}

/// Structured guidance returned by a triage evaluation. Constructing this is
/// the evaluation's only effect; appending it to a transcript is the
/// caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guidance {
    pub severity: Severity,
    pub summary: String,
    /// Immediate questions to put back to the requester.
    pub questions: Vec<String>,
    pub recommendations: Vec<String>,
    /// Red flags that warrant in-person care instead of this channel.
    pub urgent_signs: Vec<String>,
}

impl Guidance {
    /// Render the guidance as chat-ready text, matching the section layout
    /// the advisor uses in the transcript.
    pub fn to_message_text(&self) -> String {
        let mut text = self.summary.clone();

        if !self.questions.is_empty() {
            text.push_str("\n\nA few questions:");
            for (index, question) in self.questions.iter().enumerate() {
                text.push_str(&format!("\n{}. {}", index + 1, question));
            }
        }

        if !self.recommendations.is_empty() {
            text.push_str("\n\nGeneral recommendations:");
            for recommendation in &self.recommendations {
                text.push_str(&format!("\n- {}", recommendation));
            }
        }

        if !self.urgent_signs.is_empty() {
            text.push_str("\n\nSeek immediate medical attention if:");
            for sign in &self.urgent_signs {
                text.push_str(&format!("\n- {}", sign));
            }
        }

        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderRole {
    Requester,
    Advisor,
}

/// One entry in the append-only consultation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: SenderRole,
    pub timestamp: DateTime<Utc>,
}
