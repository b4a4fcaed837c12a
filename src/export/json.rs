//! JSON import/export module for flashcard decks.
//! Provides functionality to save and load Deck structures, scheduling state and
//! review history included, to/from JSON files.

use crate::error::Result;
use crate::models::{Deck, classifier};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a deck to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
    let json_string = serde_json::to_string_pretty(deck)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    log::info!(
        "Deck '{}' ({} cards) exported to '{}'",
        deck.name,
        deck.flashcards.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Imports a deck from a JSON file.
/// Cached card states are recomputed from the scheduling fields, since the file may
/// have been edited by hand. Returns an error if the file doesn't exist or contains
/// invalid JSON (including timestamps without a UTC offset).
pub fn import_json(path: impl AsRef<Path>) -> Result<Deck> {
    let mut deck = read_json(path.as_ref())?;

    let drifted = classifier::reconcile(&mut deck.flashcards);
    if drifted > 0 {
        log::warn!(
            "Deck '{}' had {} stale card states, corrected on import",
            deck.name,
            drifted
        );
    }

    log::info!("Deck '{}' imported from '{}'", deck.name, path.as_ref().display());
    Ok(deck)
}

/// Reads a deck file as stored, without touching cached card states.
pub fn read_json(path: impl AsRef<Path>) -> Result<Deck> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(serde_json::from_str(&contents)?)
}
