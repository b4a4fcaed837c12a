//! Choosing the next card to study.
//!
//! Cards mid-learning interrupt review, and both come before new material:
//! 1. learning cards that are due, earliest due first
//! 2. review cards that are due, earliest due first
//! 3. new cards, oldest first
//!
//! Equal timestamps fall back to the card id so the order is reproducible.

use super::CardState;
use crate::error::NoCardAvailable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The scheduling fields selection needs from a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSchedulingView {
    pub id: Uuid,
    pub state: CardState,
    pub next_review: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl CardSchedulingView {
    fn due_in(&self, state: CardState, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.next_review.filter(|at| self.state == state && *at <= now)
    }
}

pub fn select_next(
    cards: &[CardSchedulingView],
    now: DateTime<Utc>,
) -> Result<Uuid, NoCardAvailable> {
    let earliest_due = |state: CardState| {
        cards
            .iter()
            .filter_map(|card| card.due_in(state, now).map(|at| (at, card.id)))
            .min()
    };

    let oldest_new = || {
        cards
            .iter()
            .filter(|card| card.state == CardState::New)
            .map(|card| (card.created_at, card.id))
            .min()
    };

    earliest_due(CardState::Learning)
        .or_else(|| earliest_due(CardState::Review))
        .or_else(oldest_new)
        .map(|(_, id)| id)
        .ok_or(NoCardAvailable)
}

/// Cards available right now, bucketed by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueCounts {
    pub new: usize,
    pub learning: usize,
    pub review: usize,
}

impl DueCounts {
    pub fn total(&self) -> usize {
        self.new + self.learning + self.review
    }
}

pub fn due_counts(cards: &[CardSchedulingView], now: DateTime<Utc>) -> DueCounts {
    let mut counts = DueCounts::default();
    for card in cards {
        match card.state {
            CardState::New => counts.new += 1,
            CardState::Learning if card.due_in(CardState::Learning, now).is_some() => {
                counts.learning += 1
            }
            CardState::Review if card.due_in(CardState::Review, now).is_some() => {
                counts.review += 1
            }
            _ => {}
        }
    }
    counts
}
