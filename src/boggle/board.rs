use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::dice::Dice;
use super::exact_sqrt;
use crate::errors::{BoggleError, Result};

/// Best 5x5 board reported by Boyan; a useful starting point for the optimizer
pub const REFERENCE_5X5: &str = "RSTCSDEIAEGNLRPEATESMSSID";

/// Square letter grid stored row by row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<char>,
    n: usize,
}

impl Grid {
    /// Builds a grid from `n * n` letters. Lowercase letters are accepted and upper-cased.
    pub fn new(letters: Vec<char>) -> Result<Self> {
        let n = match exact_sqrt(letters.len()) {
            Some(n) if n > 0 => n,
            _ => return Err(BoggleError::InvalidGridSize(letters.len())),
        };
        let cells = letters
            .into_iter()
            .enumerate()
            .map(|(index, letter)| {
                let upper = letter.to_ascii_uppercase();
                if upper.is_ascii_uppercase() {
                    Ok(upper)
                } else {
                    Err(BoggleError::InvalidLetter { index, letter })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells, n })
    }

    /// Rolls a fresh `n x n` grid from the dice
    pub fn random<R: Rng + ?Sized>(n: usize, dice: &Dice, rng: &mut R) -> Result<Self> {
        Self::new(dice.roll(n, rng))
    }

    pub fn reference_5x5() -> Self {
        Self {
            cells: REFERENCE_5X5.chars().collect(),
            n: 5,
        }
    }

    /// Side length
    pub fn side(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Overwrites one cell and returns the letter it held
    pub fn replace(&mut self, cell: usize, letter: char) -> char {
        std::mem::replace(&mut self.cells[cell], letter)
    }

    /// Letters as a single string, `Q` kept as one character
    pub fn letters(&self) -> String {
        self.cells.iter().collect()
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl FromStr for Grid {
    type Err = BoggleError;

    /// Whitespace is ignored and the rendered `Qu` (exactly that casing) is folded into one `Q`
    /// cell, so rendered boards parse back to the same grid. Any other `qu`, `QU` or `qU` is two
    /// cells.
    fn from_str(s: &str) -> Result<Self> {
        let mut letters = Vec::with_capacity(s.len());
        let mut chars = s.chars().filter(|c| !c.is_whitespace()).peekable();
        while let Some(c) = chars.next() {
            if c == 'Q' && chars.peek() == Some(&'u') {
                chars.next();
            }
            letters.push(c);
        }
        Self::new(letters)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.n) {
            let line = row
                .iter()
                .map(|&c| if c == 'Q' { "Qu".to_string() } else { format!("{} ", c) })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Grid, REFERENCE_5X5};
    use crate::boggle::dice::Dice;
    use crate::errors::BoggleError;

    #[test]
    fn test_new_validates_size() {
        assert!(Grid::new("ATCS".chars().collect()).is_ok());
        assert!(matches!(
            Grid::new("ATC".chars().collect()),
            Err(BoggleError::InvalidGridSize(3))
        ));
        assert!(matches!(
            Grid::new(vec![]),
            Err(BoggleError::InvalidGridSize(0))
        ));
    }

    #[test]
    fn test_new_validates_letters() {
        let grid = Grid::new("atcs".chars().collect()).unwrap();
        assert_eq!(grid.letters(), "ATCS");
        assert!(matches!(
            Grid::new("AT1S".chars().collect()),
            Err(BoggleError::InvalidLetter {
                index: 2,
                letter: '1'
            })
        ));
    }

    #[test]
    fn test_render() {
        let grid: Grid = "QATS".parse().unwrap();
        assert_eq!(grid.to_string(), "Qu A\nT  S\n");
    }

    #[test]
    fn test_render_parses_back() {
        let grid: Grid = "ABCQ EFGH IJKL MNOP".parse().unwrap();
        assert_eq!(grid.len(), 16);
        assert_eq!(grid[3], 'Q');
        let again: Grid = grid.to_string().parse().unwrap();
        assert_eq!(again, grid);
    }

    #[test]
    fn test_uppercase_qu_is_two_cells() {
        let grid: Grid = "QUAT".parse().unwrap();
        assert_eq!(grid.cells(), ['Q', 'U', 'A', 'T']);
    }

    #[test]
    fn test_lowercase_qu_is_two_cells() {
        let grid: Grid = "quat".parse().unwrap();
        assert_eq!(grid.cells(), ['Q', 'U', 'A', 'T']);
        let grid: Grid = "qUAT".parse().unwrap();
        assert_eq!(grid.letters(), "QUAT");
        // Only the rendered casing folds
        assert!(matches!(
            "Quat".parse::<Grid>(),
            Err(BoggleError::InvalidGridSize(3))
        ));
    }

    #[test]
    fn test_replace() {
        let mut grid: Grid = "ATCS".parse().unwrap();
        let old = grid.replace(1, 'E');
        assert_eq!(old, 'T');
        assert_eq!(grid.letters(), "AECS");
    }

    #[test]
    fn test_random_and_reference() {
        let dice = Dice::default();
        let grid = Grid::random(5, &dice, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(grid.side(), 5);
        assert!(Grid::random(0, &dice, &mut StdRng::seed_from_u64(1)).is_err());

        let best = Grid::reference_5x5();
        assert_eq!(best.side(), 5);
        assert_eq!(best.letters(), REFERENCE_5X5);
    }
}
