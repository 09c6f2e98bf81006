use async_trait::async_trait;

use crate::models::{Classification, ScreeningError};

/// A hosted inference endpoint. Implementations own transport, credentials,
/// and retries; callers only see the ranked labels.
#[async_trait]
pub trait RemoteClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<Vec<Classification>, ScreeningError>;
}

/// The label a result screen shows: highest confidence wins, and a tie goes
/// to whichever label the classifier ranked first.
pub fn top_label(ranked: &[Classification]) -> Option<&Classification> {
    ranked.iter().reduce(|best, candidate| {
        if candidate.confidence > best.confidence {
            candidate
        } else {
            best
        }
    })
}
