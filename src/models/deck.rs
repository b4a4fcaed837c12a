//! Deck is a set of flashcards together with their review history
use super::selection::{self, CardSchedulingView, DueCounts};
use super::{Flashcard, ReviewRecord};
use crate::error::NoCardAvailable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub history: Vec<ReviewRecord>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new("My Deck")
    }
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flashcards: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Adds a new card, returning its id.
    pub fn add(&mut self, term: &str, definition: &str, created_at: DateTime<Utc>) -> Uuid {
        let card = Flashcard::new(term, definition, created_at);
        let id = card.id;
        self.flashcards.push(card);
        id
    }

    pub fn card(&self, id: Uuid) -> Option<&Flashcard> {
        self.flashcards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: Uuid) -> Option<&mut Flashcard> {
        self.flashcards.iter_mut().find(|card| card.id == id)
    }

    pub fn views(&self) -> Vec<CardSchedulingView> {
        self.flashcards.iter().map(Flashcard::view).collect()
    }

    pub fn select_next(&self, now: DateTime<Utc>) -> Result<Uuid, NoCardAvailable> {
        selection::select_next(&self.views(), now)
    }

    pub fn due_counts(&self, now: DateTime<Utc>) -> DueCounts {
        selection::due_counts(&self.views(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardState;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_add_and_lookup() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
        let mut deck = Deck::new("Polish Vocabulary");
        let first = deck.add("cześć", "hello", now - Duration::days(1));
        let second = deck.add("proszę", "please", now);

        assert_eq!(deck.flashcards.len(), 2);
        assert_eq!(deck.card(second).map(|c| c.term.as_str()), Some("proszę"));
        assert!(deck.card(Uuid::nil()).is_none());

        assert_eq!(deck.select_next(now), Ok(first));
        assert_eq!(deck.due_counts(now).new, 2);

        if let Some(card) = deck.card_mut(first) {
            card.scheduling.next_review = Some(now + Duration::days(1));
            card.scheduling.interval = 1;
            card.state = CardState::Learning;
        }
        assert_eq!(deck.select_next(now), Ok(second));
    }

    #[test]
    fn test_empty_deck_has_nothing_to_study() {
        let deck = Deck::default();
        assert_eq!(deck.name, "My Deck");
        assert_eq!(deck.select_next(Utc::now()), Err(NoCardAvailable));
    }
}
