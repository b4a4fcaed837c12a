//! Lifecycle phase of a card, derived from its scheduling fields.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    /// Never reviewed
    #[default]
    New,
    /// Reviewed, interval of at most one day
    Learning,
    /// Multi-day spaced review
    Review,
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardState::New => "new",
            CardState::Learning => "learning",
            CardState::Review => "review",
        };
        f.write_str(name)
    }
}
