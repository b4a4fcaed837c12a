//! Command handlers for the flashcards binary.
//! Each command loads the deck file, works on it in memory and saves it back.

use anyhow::Context;
use chrono::{DateTime, Utc};
use flashcards_srs::export::json::{export_json_to_path, import_json, read_json};
use flashcards_srs::models::sm2::format_interval;
use flashcards_srs::{
    Deck, DueCounts, Error, FixedClock, LearningSession, ResponseQuality, ReviewOutcome,
    Scheduler, SchedulerConfig, reconcile,
};
use std::path::Path;
use uuid::Uuid;

pub struct App {
    config: SchedulerConfig,
    now: DateTime<Utc>,
}

impl App {
    pub fn new(config: SchedulerConfig, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }

    fn session(&self, path: &Path) -> anyhow::Result<LearningSession<FixedClock>> {
        let deck = import_json(path).with_context(|| format!("loading {}", path.display()))?;
        let scheduler = Scheduler::new(self.config.clone(), FixedClock(self.now));
        Ok(LearningSession::new(deck, scheduler))
    }

    fn save(&self, deck: &Deck, path: &Path) -> anyhow::Result<()> {
        export_json_to_path(deck, path).with_context(|| format!("saving {}", path.display()))
    }

    pub fn init(&self, path: &Path, name: &str) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }
        self.save(&Deck::new(name), path)?;
        println!("Deck '{}' created at {}", name, path.display());
        Ok(())
    }

    pub fn add(&self, path: &Path, term: &str, definition: &str) -> anyhow::Result<Uuid> {
        let mut deck = import_json(path)?;
        let id = deck.add(term, definition, self.now);
        self.save(&deck, path)?;
        println!("Added '{}' ({})", term, id);
        Ok(id)
    }

    /// `None` when nothing is due and no new cards are left.
    pub fn next(&self, path: &Path) -> anyhow::Result<Option<Uuid>> {
        let session = self.session(path)?;
        match session.next_card() {
            Ok(id) => {
                if let Some(card) = session.deck.card(id) {
                    println!("{}  [{}]", card.term, card.state);
                    println!("  id: {}", card.id);
                }
                Ok(Some(id))
            }
            Err(Error::NoCardAvailable(_)) => {
                println!("All caught up, nothing to study right now.");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn grade(
        &self,
        path: &Path,
        card: Uuid,
        quality: ResponseQuality,
    ) -> anyhow::Result<ReviewOutcome> {
        let mut session = self.session(path)?;
        let outcome = session.grade(card, quality)?;
        let state = session.deck.card(card).map(|c| c.state);
        self.save(&session.into_deck(), path)?;

        println!(
            "{}: next review in {} (interval {}d, ease {:.2}, repetition {})",
            quality,
            format_interval(outcome.next_review - self.now),
            outcome.interval,
            outcome.ease_factor,
            outcome.repetition_number
        );
        if let Some(state) = state {
            println!("Card is now {}", state);
        }
        Ok(outcome)
    }

    pub fn preview(&self, path: &Path, card: Uuid) -> anyhow::Result<[ReviewOutcome; 4]> {
        let session = self.session(path)?;
        let flashcard = session.deck.card(card).ok_or(Error::CardNotFound(card))?;
        let outcomes = session.scheduler().preview(&flashcard.scheduling)?;

        println!("{}", flashcard.term);
        for (quality, outcome) in ResponseQuality::ALL.iter().zip(outcomes.iter()) {
            println!(
                "  {:<8} {}",
                quality.as_str(),
                format_interval(outcome.next_review - self.now)
            );
        }
        Ok(outcomes)
    }

    pub fn stats(&self, path: &Path) -> anyhow::Result<DueCounts> {
        let deck = import_json(path)?;
        let counts = deck.due_counts(self.now);
        println!("{} ({} cards)", deck.name, deck.flashcards.len());
        println!("  new:      {}", counts.new);
        println!("  learning: {}", counts.learning);
        println!("  review:   {}", counts.review);
        Ok(counts)
    }

    /// Reads the file without the import-time fix-up so stale states are counted.
    pub fn reconcile(&self, path: &Path) -> anyhow::Result<usize> {
        let mut deck = read_json(path)?;
        let changed = reconcile(&mut deck.flashcards);
        self.save(&deck, path)?;
        println!("{} card states updated", changed);
        Ok(changed)
    }
}
