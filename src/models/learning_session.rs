//! Learning session management for spaced repetition practice.
//! Picks cards with the selection policy, grades them with the scheduler and keeps
//! the deck, its review history and the session statistics in step.

use super::sm2::Scheduler;
use super::{Deck, ResponseQuality, ReviewOutcome, ReviewRecord};
use crate::clock::Clock;
use crate::error::{Error, Result};
use uuid::Uuid;

/// A study session over one deck. The caller decides when to persist `deck`.
pub struct LearningSession<C: Clock> {
    pub deck: Deck,
    scheduler: Scheduler<C>,
    cards_studied: usize,
    successful: usize,
}

impl<C: Clock> LearningSession<C> {
    pub fn new(deck: Deck, scheduler: Scheduler<C>) -> Self {
        Self {
            deck,
            scheduler,
            cards_studied: 0,
            successful: 0,
        }
    }

    pub fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    /// The card to show now, or `Error::NoCardAvailable` when the learner is done.
    pub fn next_card(&self) -> Result<Uuid> {
        Ok(self.deck.select_next(self.scheduler.now())?)
    }

    /// Grades a card and updates its scheduling data using the SM-2 scheduler.
    pub fn grade(&mut self, card_id: Uuid, quality: ResponseQuality) -> Result<ReviewOutcome> {
        let reviewed_at = self.scheduler.now();
        let card = self
            .deck
            .card_mut(card_id)
            .ok_or(Error::CardNotFound(card_id))?;

        let outcome = self.scheduler.review(&card.scheduling, quality)?;
        card.record(quality, &outcome);
        log::debug!("Card '{}' graded {}, now {}", card.term, quality, card.state);

        self.deck
            .history
            .push(ReviewRecord::new(card_id, quality, reviewed_at, &outcome));

        self.cards_studied += 1;
        if quality.is_successful() {
            self.successful += 1;
        }
        Ok(outcome)
    }

    pub fn cards_studied(&self) -> usize {
        self.cards_studied
    }

    /// Share of responses graded good or perfect, `None` before the first one.
    pub fn accuracy(&self) -> Option<f64> {
        (self.cards_studied > 0).then(|| self.successful as f64 / self.cards_studied as f64)
    }

    pub fn is_completed(&self) -> bool {
        self.next_card().is_err()
    }

    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
