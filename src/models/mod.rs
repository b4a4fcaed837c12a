pub mod card_state;
pub mod classifier;
pub mod deck;
pub mod flashcard;
pub mod learning_session;
pub mod response_quality;
pub mod review_record;
pub mod scheduling_state;
pub mod selection;
pub mod sm2;

pub use card_state::CardState;
pub use deck::Deck;
pub use flashcard::Flashcard;
pub use learning_session::LearningSession;
pub use response_quality::ResponseQuality;
pub use review_record::ReviewRecord;
pub use scheduling_state::{PriorReview, ReviewOutcome, SchedulingState};
pub use selection::{CardSchedulingView, DueCounts};
pub use sm2::Scheduler;
