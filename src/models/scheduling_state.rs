use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduling fields persisted on a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchedulingState {
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// Days until the next review outside of relearning.
    #[serde(default)]
    pub interval: u32,
    /// Consecutive successful reviews since the last lapse.
    #[serde(default)]
    pub repetition_number: u32,
    /// Absent until the card is first reviewed.
    #[serde(default)]
    pub next_review: Option<DateTime<Utc>>,
}

fn default_ease_factor() -> f64 {
    2.5
}

impl Default for SchedulingState {
    fn default() -> Self {
        Self {
            ease_factor: default_ease_factor(),
            interval: 0,
            repetition_number: 0,
            next_review: None,
        }
    }
}

impl SchedulingState {
    pub fn apply(&mut self, outcome: &ReviewOutcome) {
        self.ease_factor = outcome.ease_factor;
        self.interval = outcome.interval;
        self.repetition_number = outcome.repetition_number;
        self.next_review = Some(outcome.next_review);
    }
}

/// Last-known scheduling values as the caller holds them.
///
/// Every field may be missing (first review) and is range-checked by the
/// scheduler before use, so raw signed values are accepted here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriorReview {
    pub ease_factor: Option<f64>,
    pub interval: Option<i64>,
    pub repetition_number: Option<i64>,
}

impl From<&SchedulingState> for PriorReview {
    fn from(state: &SchedulingState) -> Self {
        if state.next_review.is_none() {
            // never reviewed, nothing to carry over
            return Self {
                ease_factor: Some(state.ease_factor),
                ..Self::default()
            };
        }
        Self {
            ease_factor: Some(state.ease_factor),
            interval: Some(i64::from(state.interval)),
            repetition_number: Some(i64::from(state.repetition_number)),
        }
    }
}

/// What the scheduler decided for one response.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub next_review: DateTime<Utc>,
    pub ease_factor: f64,
    pub interval: u32,
    pub repetition_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_state() {
        let state = SchedulingState::default();
        assert_eq!(state.ease_factor, 2.5);
        assert_eq!(state.interval, 0);
        assert_eq!(state.repetition_number, 0);
        assert!(state.next_review.is_none());
    }

    #[test]
    fn test_prior_from_new_state_has_no_counters() {
        let state = SchedulingState {
            interval: 3,
            ..SchedulingState::default()
        };
        let prior = PriorReview::from(&state);
        assert_eq!(prior.ease_factor, Some(2.5));
        assert_eq!(prior.interval, None);
        assert_eq!(prior.repetition_number, None);
    }

    #[test]
    fn test_apply_outcome() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut state = SchedulingState::default();
        state.apply(&ReviewOutcome {
            next_review: at,
            ease_factor: 2.35,
            interval: 7,
            repetition_number: 3,
        });

        assert_eq!(state.next_review, Some(at));
        assert_eq!(state.interval, 7);
        assert_eq!(state.repetition_number, 3);
        assert_eq!(PriorReview::from(&state).interval, Some(7));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let state: SchedulingState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, SchedulingState::default());
    }

    #[test]
    fn test_naive_timestamp_rejected() {
        let json = r#"{"next_review": "2024-05-01T08:00:00"}"#;
        assert!(serde_json::from_str::<SchedulingState>(json).is_err());

        let json = r#"{"next_review": "2024-05-01T08:00:00Z"}"#;
        assert!(serde_json::from_str::<SchedulingState>(json).is_ok());
    }
}
