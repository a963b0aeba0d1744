use super::{Content, Strategy};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of poster variants per campaign
pub const MAX_POSTERS: usize = 2;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Frozen snapshot of one completed generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: String,
    /// Creation instant in epoch milliseconds
    pub timestamp: u64,
    pub strategy: Strategy,
    pub result: Content,
    pub posters: Vec<String>,
}

impl CampaignRecord {
    /// Build a record stamped at `timestamp`. The product photo is redacted
    /// and the poster list is capped at [`MAX_POSTERS`].
    pub fn new(timestamp: u64, strategy: &Strategy, result: &Content, posters: &[String]) -> Self {
        Self {
            id: timestamp.to_string(),
            timestamp,
            strategy: strategy.redacted(),
            result: result.clone(),
            posters: posters.iter().take(MAX_POSTERS).cloned().collect(),
        }
    }
}
