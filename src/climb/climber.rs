use rand::Rng;
use tracing::{debug, info};

use super::Objective;
use crate::boggle::adjacency::Adjacency;
use crate::boggle::board::Grid;
use crate::boggle::dice::Dice;
use crate::boggle::dictionary::Dictionary;
use crate::boggle::finder::BoggleFinder;
use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimbSettings {
    /// Number of mutations to try
    pub iterations: usize,
    pub objective: Objective,
    /// Report each improvement at info level instead of debug
    pub verbose: bool,
}

impl Default for ClimbSettings {
    fn default() -> Self {
        Self {
            iterations: 100,
            objective: Objective::Score,
            verbose: true,
        }
    }
}

/// A single-cell change that can be undone exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub cell: usize,
    pub old: char,
    pub new: char,
}

impl Mutation {
    /// Replaces a uniformly chosen cell with a letter drawn from the dice
    pub fn propose<R: Rng + ?Sized>(grid: &mut Grid, dice: &Dice, rng: &mut R) -> Self {
        let cell = rng.gen_range(0..grid.len());
        let new = dice.draw_letter(rng);
        let old = grid.replace(cell, new);
        Self { cell, old, new }
    }

    pub fn revert(self, grid: &mut Grid) {
        grid.replace(self.cell, self.old);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbOutcome {
    pub grid: Grid,
    pub score: usize,
    /// Number of mutations kept
    pub accepted: usize,
    /// Best score before the first iteration and after each one
    pub history: Vec<usize>,
}

/// Greedy single-cell hill climbing over grids of one size
#[derive(Debug, Clone)]
pub struct HillClimber<'a> {
    finder: BoggleFinder<'a>,
    dice: Dice,
    settings: ClimbSettings,
}

impl<'a> HillClimber<'a> {
    pub fn new(finder: BoggleFinder<'a>, settings: ClimbSettings) -> Self {
        Self {
            finder,
            dice: Dice::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &ClimbSettings {
        &self.settings
    }

    /// Rolls a grid matching the size of the finder's adjacency table
    pub fn random_grid<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid> {
        Grid::random(self.finder.adjacency().side(), &self.dice, rng)
    }

    pub fn evaluate(&self, grid: &Grid) -> Result<usize> {
        let found = self.finder.find_words(grid)?;
        Ok(self.settings.objective.evaluate(&found))
    }

    /// Mutates one cell per iteration and keeps the change only if it strictly improves the
    /// objective. Rejected changes are rolled back, so the returned grid always scores `score`.
    pub fn climb<R: Rng + ?Sized>(&self, mut grid: Grid, rng: &mut R) -> Result<ClimbOutcome> {
        let mut best = self.evaluate(&grid)?;
        let mut accepted = 0;
        let mut history = Vec::with_capacity(self.settings.iterations + 1);
        history.push(best);

        for i in 0..self.settings.iterations {
            let mutation = Mutation::propose(&mut grid, &self.dice, rng);
            let score = self.evaluate(&grid)?;
            if score > best {
                best = score;
                accepted += 1;
                if self.settings.verbose {
                    info!("{} {} {}", best, i, grid.letters());
                } else {
                    debug!("{} {} {}", best, i, grid.letters());
                }
            } else {
                mutation.revert(&mut grid);
            }
            history.push(best);
        }

        if self.settings.verbose {
            info!("Best board ({}):\n{}", best, grid);
        }
        debug!(
            "Climb finished: {} of {} mutations kept",
            accepted, self.settings.iterations
        );

        Ok(ClimbOutcome {
            grid,
            score: best,
            accepted,
            history,
        })
    }
}

/// Runs a single climb from `board`, or from a freshly rolled grid sized to `adjacency`
/// when no board is given. Returns the final grid and its score.
pub fn hill_climb<R: Rng + ?Sized>(
    board: Option<Grid>,
    dictionary: &Dictionary,
    adjacency: &Adjacency,
    iterations: usize,
    verbose: bool,
    rng: &mut R,
) -> Result<(Grid, usize)> {
    let settings = ClimbSettings {
        iterations,
        verbose,
        ..ClimbSettings::default()
    };
    let climber = HillClimber::new(BoggleFinder::new(dictionary, adjacency), settings);
    let board = match board {
        Some(board) => board,
        None => climber.random_grid(rng)?,
    };
    let outcome = climber.climb(board, rng)?;
    Ok((outcome.grid, outcome.score))
}
