//! Card lifecycle classification.
//!
//! State (new, learning, review) and due-ness are separate questions: a review card
//! that is not yet due is still a review card.

use super::{CardState, Flashcard};
use chrono::{DateTime, Utc};

/// Derives the lifecycle state from the scheduling fields.
///
/// Never reviewed is `New` whatever the interval; otherwise an interval of at most
/// one day (or none recorded) is `Learning` and anything longer is `Review`.
///
/// There is no `now` parameter: the state never depends on the current time.
/// Ask [`is_due`] for that.
pub fn classify(next_review: Option<DateTime<Utc>>, interval: Option<u32>) -> CardState {
    match (next_review, interval) {
        (None, _) => CardState::New,
        (Some(_), None) => CardState::Learning,
        (Some(_), Some(days)) if days <= 1 => CardState::Learning,
        (Some(_), Some(_)) => CardState::Review,
    }
}

/// True when the card has been scheduled and that time has arrived.
pub fn is_due(next_review: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    next_review.is_some_and(|at| at <= now)
}

/// Counts cards whose cached state no longer matches their scheduling fields.
pub fn count_drift(cards: &[Flashcard]) -> usize {
    cards
        .iter()
        .filter(|card| card.state != card.derived_state())
        .count()
}

/// Recomputes every cached state and returns how many changed.
pub fn reconcile(cards: &mut [Flashcard]) -> usize {
    let mut changed = 0;
    for card in cards.iter_mut() {
        let derived = card.derived_state();
        if card.state != derived {
            log::debug!("Card {} drifted from {} to {}", card.id, card.state, derived);
            card.state = derived;
            changed += 1;
        }
    }
    if changed > 0 {
        log::info!("Reconciled {} of {} card states", changed, cards.len());
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_unreviewed_is_new_regardless_of_interval() {
        for interval in [None, Some(0), Some(1), Some(2), Some(36_500)] {
            assert_eq!(classify(None, interval), CardState::New);
        }
    }

    #[test]
    fn test_learning_and_review_boundary() {
        let at = Some(now());
        assert_eq!(classify(at, None), CardState::Learning);
        assert_eq!(classify(at, Some(0)), CardState::Learning);
        assert_eq!(classify(at, Some(1)), CardState::Learning);
        assert_eq!(classify(at, Some(2)), CardState::Review);
        assert_eq!(classify(at, Some(400)), CardState::Review);
    }

    #[test]
    fn test_state_ignores_due_time() {
        let past = Some(now() - Duration::days(30));
        let future = Some(now() + Duration::days(30));
        assert_eq!(classify(past, Some(5)), classify(future, Some(5)));
    }

    #[test]
    fn test_is_due() {
        assert!(!is_due(None, now()));
        assert!(is_due(Some(now()), now()));
        assert!(is_due(Some(now() - Duration::seconds(1)), now()));
        assert!(!is_due(Some(now() + Duration::seconds(1)), now()));
    }

    #[test]
    fn test_reconcile_counts_changes() {
        let mut fresh = Flashcard::new("a", "b", now());
        fresh.state = CardState::Review;

        let mut graduated = Flashcard::new("c", "d", now());
        graduated.scheduling.next_review = Some(now() + Duration::days(6));
        graduated.scheduling.interval = 6;
        graduated.state = CardState::Learning;

        let untouched = Flashcard::new("e", "f", now());

        let mut cards = vec![fresh, graduated, untouched];
        assert_eq!(count_drift(&cards), 2);
        assert_eq!(reconcile(&mut cards), 2);

        assert_eq!(cards[0].state, CardState::New);
        assert_eq!(cards[1].state, CardState::Review);
        assert_eq!(cards[2].state, CardState::New);

        assert_eq!(count_drift(&cards), 0);
        assert_eq!(reconcile(&mut cards), 0);
    }

    #[test]
    fn test_reconcile_empty() {
        assert_eq!(reconcile(&mut []), 0);
    }
}
