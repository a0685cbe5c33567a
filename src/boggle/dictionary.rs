use std::io::Read;

use tracing::info;

use super::ALPHABET;
use crate::errors::Result;

/// Sorted word list answering prefix queries by binary search.
///
/// Every lookup takes a `[lo, hi)` window into the sorted words so a caller walking
/// a prefix one letter at a time can keep narrowing the window instead of searching
/// the whole list again.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Upper-cased words in lexicographic order
    words: Vec<String>,
    /// `[lo, hi)` band of words starting with each letter of the alphabet
    bounds: [(usize, usize); 26],
    min_length: usize,
}

impl Dictionary {
    /// Builds the dictionary from raw tokens. Tokens shorter than `min_length` are dropped,
    /// everything else is upper-cased as is.
    pub fn build<I, S>(words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .filter(|w| w.as_ref().chars().count() >= min_length)
            .map(|w| w.as_ref().to_uppercase())
            .collect::<Vec<_>>();
        words.sort_unstable();

        let mut bounds = [(0, 0); 26];
        for (i, c) in ALPHABET.chars().enumerate() {
            let band = c.to_string();
            let next = (((c as u8) + 1) as char).to_string();
            // A lone letter sorts before every longer word starting with it, so it opens its band
            let lo = words.partition_point(|w| *w < band);
            let hi = words.partition_point(|w| *w < next);
            bounds[i] = (lo, hi);
        }

        Self {
            words,
            bounds,
            min_length,
        }
    }

    /// Reads a whitespace separated word list to the end and builds the dictionary from it
    pub fn from_reader<R: Read>(mut reader: R, min_length: usize) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        let dict = Self::build(data.split_whitespace(), min_length);
        info!(
            "Loaded {} words (min length {})",
            dict.len(),
            dict.min_length
        );
        Ok(dict)
    }

    /// The `[lo, hi)` window of words whose first letter is `letter`.
    /// Letters outside `A..=Z` get an empty window.
    pub fn bounds(&self, letter: char) -> (usize, usize) {
        if letter.is_ascii_uppercase() {
            self.bounds[letter as usize - 'A' as usize]
        } else {
            (0, 0)
        }
    }

    /// Finds the leftmost word in `words[lo..hi]` starting with `prefix`.
    /// Returns that position (or `None` when nothing in the window starts with the prefix)
    /// and whether the word there is exactly `prefix`.
    pub fn lookup(&self, prefix: &str, lo: usize, hi: usize) -> (Option<usize>, bool) {
        let hi = hi.min(self.words.len());
        let lo = lo.min(hi);
        let i = lo + self.words[lo..hi].partition_point(|w| w.as_str() < prefix);
        match self.words.get(i) {
            Some(word) if i < hi && word.starts_with(prefix) => (Some(i), word == prefix),
            _ => (None, false),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word, 0, self.words.len()).1
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
