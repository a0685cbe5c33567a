use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use super::adjacency::Adjacency;
use super::board::Grid;
use super::dictionary::Dictionary;
use crate::errors::{BoggleError, Result};

/// Points per word length; anything of eight letters or more scores 11
const SCORES: [usize; 8] = [0, 0, 0, 0, 1, 2, 3, 5];
const LONG_WORD_SCORE: usize = 11;

pub fn word_score(word: &str) -> usize {
    SCORES
        .get(word.chars().count())
        .copied()
        .unwrap_or(LONG_WORD_SCORE)
}

/// Distinct words found on one grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: HashSet<String>,
}

impl FoundWords {
    pub fn insert(&mut self, word: &str) {
        if !self.words.contains(word) {
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// Words ordered by length, then alphabetically
    pub fn sorted(&self) -> Vec<&str> {
        let mut words = self.iter().collect::<Vec<_>>();
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        words
    }

    pub fn score(&self) -> usize {
        self.iter().map(word_score).sum()
    }
}

impl<'a> FromIterator<&'a str> for FoundWords {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut found = Self::default();
        iter.into_iter().for_each(|w| found.insert(w));
        found
    }
}

/// Cells on the path being explored together with the letters they spell
#[derive(Debug)]
struct VisitPath {
    cells: Vec<usize>,
    on_path: Vec<bool>,
    prefix: String,
}

impl VisitPath {
    fn new(n2: usize) -> Self {
        Self {
            cells: Vec::with_capacity(n2),
            on_path: vec![false; n2],
            prefix: String::with_capacity(2 * n2),
        }
    }

    /// Puts `cell` on the path and appends its letter (`Q` spells `QU`).
    /// Returns `None` if the cell is already on the path. The returned step
    /// takes the cell and its letters back off when dropped.
    fn enter(&mut self, cell: usize, letter: char) -> Option<Step<'_>> {
        if self.on_path[cell] {
            return None;
        }
        let prefix_len = self.prefix.len();
        self.on_path[cell] = true;
        self.cells.push(cell);
        self.prefix.push(letter);
        if letter == 'Q' {
            self.prefix.push('U');
        }
        Some(Step {
            path: self,
            prefix_len,
        })
    }
}

struct Step<'a> {
    path: &'a mut VisitPath,
    prefix_len: usize,
}

impl Deref for Step<'_> {
    type Target = VisitPath;

    fn deref(&self) -> &Self::Target {
        self.path
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.path
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        if let Some(cell) = self.path.cells.pop() {
            self.path.on_path[cell] = false;
        }
        self.path.prefix.truncate(self.prefix_len);
    }
}

/// Finds every dictionary word traceable on a grid.
/// The dictionary and adjacency table are borrowed read-only, so one finder
/// (or many, across threads) can serve any number of grids of the table's size.
#[derive(Debug, Clone, Copy)]
pub struct BoggleFinder<'a> {
    dictionary: &'a Dictionary,
    adjacency: &'a Adjacency,
}

impl<'a> BoggleFinder<'a> {
    pub fn new(dictionary: &'a Dictionary, adjacency: &'a Adjacency) -> Self {
        Self {
            dictionary,
            adjacency,
        }
    }

    pub fn adjacency(&self) -> &'a Adjacency {
        self.adjacency
    }

    pub fn find_words(&self, grid: &Grid) -> Result<FoundWords> {
        if grid.len() != self.adjacency.len() {
            return Err(BoggleError::AdjacencyMismatch {
                grid: grid.len(),
                table: self.adjacency.len(),
            });
        }

        let mut found = FoundWords::default();
        let mut path = VisitPath::new(grid.len());
        for i in 0..grid.len() {
            let (lo, hi) = self.dictionary.bounds(grid[i]);
            self.search(grid, lo, hi, i, &mut path, &mut found);
        }
        trace!("Found {} words on {}", found.len(), grid.letters());
        Ok(found)
    }

    /// Extends the current path into cell `i`, looking only at `words[lo..hi]`
    fn search(
        &self,
        grid: &Grid,
        lo: usize,
        hi: usize,
        i: usize,
        path: &mut VisitPath,
        found: &mut FoundWords,
    ) {
        let mut step = match path.enter(i, grid[i]) {
            Some(step) => step,
            None => return,
        };

        let (pos, is_word) = self.dictionary.lookup(&step.prefix, lo, hi);
        let pos = match pos {
            Some(pos) => pos,
            None => return,
        };

        if is_word && step.prefix.chars().count() >= self.dictionary.min_length() {
            found.insert(&step.prefix);
        }

        for &j in self.adjacency.neighbors(i) {
            self.search(grid, pos, hi, j, &mut step, found);
        }
    }
}

/// One-shot convenience over [`BoggleFinder::find_words`]
pub fn enumerate_words(
    grid: &Grid,
    dictionary: &Dictionary,
    adjacency: &Adjacency,
) -> Result<FoundWords> {
    BoggleFinder::new(dictionary, adjacency).find_words(grid)
}
