//! The learner's self-assessment of how well they recalled a card.
use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Four ordered tiers, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseQuality {
    /// Failed recall (a lapse).
    Again,
    Hard,
    Good,
    /// Effortless recall, informally "easy".
    #[serde(alias = "easy")]
    Perfect,
}

impl ResponseQuality {
    pub const ALL: [ResponseQuality; 4] = [
        ResponseQuality::Again,
        ResponseQuality::Hard,
        ResponseQuality::Good,
        ResponseQuality::Perfect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseQuality::Again => "again",
            ResponseQuality::Hard => "hard",
            ResponseQuality::Good => "good",
            ResponseQuality::Perfect => "perfect",
        }
    }

    /// Good and perfect count as successful recall in session statistics.
    pub fn is_successful(&self) -> bool {
        matches!(self, ResponseQuality::Good | ResponseQuality::Perfect)
    }
}

impl FromStr for ResponseQuality {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(ResponseQuality::Again),
            "hard" => Ok(ResponseQuality::Hard),
            "good" => Ok(ResponseQuality::Good),
            "perfect" | "easy" => Ok(ResponseQuality::Perfect),
            _ => Err(SchedulerError::InvalidQuality(s.to_string())),
        }
    }
}

impl fmt::Display for ResponseQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tiers() {
        assert_eq!("again".parse::<ResponseQuality>(), Ok(ResponseQuality::Again));
        assert_eq!("hard".parse::<ResponseQuality>(), Ok(ResponseQuality::Hard));
        assert_eq!("good".parse::<ResponseQuality>(), Ok(ResponseQuality::Good));
        assert_eq!("perfect".parse::<ResponseQuality>(), Ok(ResponseQuality::Perfect));
        assert_eq!("easy".parse::<ResponseQuality>(), Ok(ResponseQuality::Perfect));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "medium".parse::<ResponseQuality>(),
            Err(SchedulerError::InvalidQuality("medium".to_string()))
        );
        assert!("".parse::<ResponseQuality>().is_err());
        assert!("4".parse::<ResponseQuality>().is_err());
    }

    #[test]
    fn test_parse_matches_serde_exactly() {
        for input in ["Hard", " good ", "GOOD", "Easy", "perfect\n"] {
            assert_eq!(
                input.parse::<ResponseQuality>(),
                Err(SchedulerError::InvalidQuality(input.to_string()))
            );
            let quoted = serde_json::to_string(input).unwrap();
            assert!(serde_json::from_str::<ResponseQuality>(&quoted).is_err());
        }
    }

    #[test]
    fn test_ordering_worst_to_best() {
        assert!(ResponseQuality::Again < ResponseQuality::Hard);
        assert!(ResponseQuality::Hard < ResponseQuality::Good);
        assert!(ResponseQuality::Good < ResponseQuality::Perfect);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ResponseQuality::Perfect).unwrap();
        assert_eq!(json, "\"perfect\"");

        let parsed: ResponseQuality = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, ResponseQuality::Perfect);

        assert!(serde_json::from_str::<ResponseQuality>("\"meh\"").is_err());
    }
}
