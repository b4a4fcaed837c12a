//! Error types shared by the scheduler, the selection policy and the deck files.

use thiserror::Error;
use uuid::Uuid;

/// Rejected scheduler input. Always a caller bug, never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("unrecognized response quality: {0:?} (expected again, hard, good or perfect)")]
    InvalidQuality(String),

    #[error("interval must be non-negative, got {0}")]
    NegativeInterval(i64),

    #[error("repetition number must be non-negative, got {0}")]
    NegativeRepetition(i64),

    #[error("repetition number {0} is out of range")]
    RepetitionOutOfRange(i64),

    #[error("ease factor must be finite, got {0}")]
    NonFiniteEase(f64),

    #[error("ease factor {ease} is below the minimum of {minimum}")]
    EaseBelowMinimum { ease: f64, minimum: f64 },

    #[error("next review falls outside the representable date range")]
    ReviewOutOfRange,
}

/// Nothing is due and no new cards are left. A normal outcome, not a fault.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no cards due for review or new cards available")]
pub struct NoCardAvailable;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    NoCardAvailable(#[from] NoCardAvailable),

    #[error("Card not found: {0}")]
    CardNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, Error>;
