use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One ranked label from a remote image classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }
}

#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("classifier rejected the image: {0}")]
    Rejected(String),

    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
