pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;

pub use clock::{Clock, FixedClock, SimulatedClock, SystemClock};
pub use config::SchedulerConfig;
pub use error::{Error, NoCardAvailable, Result, SchedulerError};
pub use models::classifier::{classify, is_due, reconcile};
pub use models::selection::{due_counts, select_next};
pub use models::sm2::compute_next_review;
pub use models::{
    CardSchedulingView, CardState, Deck, DueCounts, Flashcard, LearningSession, PriorReview,
    ResponseQuality, ReviewOutcome, ReviewRecord, Scheduler, SchedulingState,
};
