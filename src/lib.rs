//! Boggle word finding and high-scoring board search.
//!
//! A [`Dictionary`](boggle::dictionary::Dictionary) and an
//! [`Adjacency`](boggle::adjacency::Adjacency) table are built once and shared read-only;
//! [`BoggleFinder`](boggle::finder::BoggleFinder) lists the words on a grid and
//! [`HillClimber`](climb::HillClimber) mutates grids looking for better scores.

pub mod boggle;
pub mod climb;
pub mod config;
pub mod errors;
pub mod utils;
