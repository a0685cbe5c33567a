pub mod adjacency;
pub mod board;
pub mod dice;
pub mod dictionary;
pub mod finder;

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Integer square root of `n2`, or `None` when `n2` is not a perfect square
pub fn exact_sqrt(n2: usize) -> Option<usize> {
    let square = |n: usize| n.checked_mul(n);
    let mut n = (n2 as f64).sqrt() as usize;
    // Float rounding can land one off either side for large inputs
    while square(n).map_or(true, |sq| sq > n2) {
        n -= 1;
    }
    while square(n + 1).map_or(false, |sq| sq <= n2) {
        n += 1;
    }
    (square(n) == Some(n2)).then(|| n)
}
