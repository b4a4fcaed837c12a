use super::{ResponseQuality, ReviewOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One learner response and what the scheduler made of it. Never edited after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub card_id: Uuid,
    pub quality: ResponseQuality,
    pub reviewed_at: DateTime<Utc>,
    pub ease_factor: f64,
    pub interval: u32,
    pub repetition_number: u32,
    pub next_review: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(
        card_id: Uuid,
        quality: ResponseQuality,
        reviewed_at: DateTime<Utc>,
        outcome: &ReviewOutcome,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            quality,
            reviewed_at,
            ease_factor: outcome.ease_factor,
            interval: outcome.interval,
            repetition_number: outcome.repetition_number,
            next_review: outcome.next_review,
        }
    }
}
