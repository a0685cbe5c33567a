pub mod climber;
pub mod report;
pub mod restarts;

use serde::{Deserialize, Serialize};

use crate::boggle::finder::FoundWords;
use crate::errors::BoggleError;

pub use self::climber::{hill_climb, ClimbOutcome, ClimbSettings, HillClimber, Mutation};
pub use self::report::ClimbReport;
pub use self::restarts::{climb_restarts, RestartOutcome};

/// What the optimizer maximizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Total points of the words found
    #[default]
    Score,
    /// Number of distinct words found
    Words,
}

impl Objective {
    pub fn evaluate(&self, found: &FoundWords) -> usize {
        match self {
            Self::Score => found.score(),
            Self::Words => found.len(),
        }
    }
}

impl std::str::FromStr for Objective {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "words" => Ok(Self::Words),
            other => Err(BoggleError::Config(format!(
                "unknown objective {:?}, expected score or words",
                other
            ))),
        }
    }
}
