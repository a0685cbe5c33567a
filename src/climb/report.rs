use serde::{Deserialize, Serialize};

use super::restarts::RestartOutcome;
use super::Objective;
use crate::boggle::finder::FoundWords;

/// Summary of an optimizer run, written out with `--report`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbReport {
    pub board: String,
    pub rendered: String,
    pub objective: Objective,
    pub score: usize,
    pub word_count: usize,
    pub words: Vec<String>,
    pub iterations: usize,
    pub accepted: usize,
    pub restarts: usize,
    pub best_restart: usize,
    pub seed: u64,
}

impl ClimbReport {
    pub fn new(
        outcome: &RestartOutcome,
        found: &FoundWords,
        objective: Objective,
        iterations: usize,
        seed: u64,
    ) -> Self {
        Self {
            board: outcome.best.grid.letters(),
            rendered: outcome.best.grid.to_string(),
            objective,
            score: outcome.best.score,
            word_count: found.len(),
            words: found.sorted().into_iter().map(String::from).collect(),
            iterations,
            accepted: outcome.best.accepted,
            restarts: outcome.scores.len(),
            best_restart: outcome.restart,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClimbReport;
    use crate::boggle::board::Grid;
    use crate::boggle::finder::FoundWords;
    use crate::climb::{ClimbOutcome, Objective, RestartOutcome};

    #[test]
    fn test_report_fields() {
        let grid: Grid = "QATS".parse().unwrap();
        let outcome = RestartOutcome {
            restart: 1,
            best: ClimbOutcome {
                grid,
                score: 1,
                accepted: 2,
                history: vec![0, 1, 1],
            },
            scores: vec![0, 1],
        };
        let found = ["SAT", "QUAT"].into_iter().collect::<FoundWords>();
        let report = ClimbReport::new(&outcome, &found, Objective::Score, 2, 9);

        assert_eq!(report.board, "QATS");
        assert_eq!(report.rendered, "Qu A\nT  S\n");
        assert_eq!(report.words, ["SAT", "QUAT"]);
        assert_eq!(report.word_count, 2);
        assert_eq!(report.restarts, 2);
        assert_eq!(report.best_restart, 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["objective"], "score");
        assert_eq!(json["score"], 1);
    }
}
