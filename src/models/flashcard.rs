//! Flashcard is a pair <term, definition> plus the scheduling state the learner has built up on it.
use super::selection::CardSchedulingView;
use super::{CardState, ResponseQuality, ReviewOutcome, SchedulingState, classifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub term: String,
    pub definition: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub scheduling: SchedulingState,
    /// Cached classification of `scheduling`; see [`classifier::reconcile`].
    #[serde(default)]
    pub state: CardState,
    #[serde(default)]
    pub total_reviews: u32,
    /// Share of reviews answered good or perfect.
    #[serde(default)]
    pub success_rate: f64,
}

impl Flashcard {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            term: term.into(),
            definition: definition.into(),
            created_at,
            scheduling: SchedulingState::default(),
            state: CardState::New,
            total_reviews: 0,
            success_rate: 0.0,
        }
    }

    pub fn view(&self) -> CardSchedulingView {
        CardSchedulingView {
            id: self.id,
            state: self.state,
            next_review: self.scheduling.next_review,
            created_at: self.created_at,
        }
    }

    /// State derived from the scheduling fields, ignoring the cache.
    pub fn derived_state(&self) -> CardState {
        classifier::classify(self.scheduling.next_review, Some(self.scheduling.interval))
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        classifier::is_due(self.scheduling.next_review, now)
    }

    /// Writes a scheduler outcome back onto the card and refreshes the cached state.
    pub fn record(&mut self, quality: ResponseQuality, outcome: &ReviewOutcome) {
        self.scheduling.apply(outcome);
        self.state = self.derived_state();

        self.total_reviews = self.total_reviews.saturating_add(1);
        let hit = if quality.is_successful() { 1.0 } else { 0.0 };
        let n = f64::from(self.total_reviews);
        self.success_rate = (self.success_rate * (n - 1.0) + hit) / n;
    }
}
