use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::boggle::{DEFAULT_MIN_LENGTH, DEFAULT_SIZE};
use crate::climb::{ClimbSettings, Objective};
use crate::errors::{BoggleError, Result};
use crate::utils::serialization;

/// Run configuration. Layered from defaults, an optional JSON file named by `BOGGLE_CONFIG`,
/// `BOGGLE_*` environment variables and finally command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wordlist: PathBuf,
    pub min_length: usize,
    pub size: usize,
    pub iterations: usize,
    pub restarts: usize,
    pub seed: Option<u64>,
    pub verbose: bool,
    pub objective: Objective,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from("wordlist.txt"),
            min_length: DEFAULT_MIN_LENGTH,
            size: DEFAULT_SIZE,
            iterations: 100,
            restarts: 1,
            seed: None,
            verbose: true,
            objective: Objective::Score,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // a missing .env is fine

        let mut config = match std::env::var("BOGGLE_CONFIG") {
            Ok(path) => serialization::load_json(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overrides fields from `BOGGLE_*` variables as reported by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("BOGGLE_WORDLIST") {
            self.wordlist = PathBuf::from(path);
        }
        if let Some(v) = lookup("BOGGLE_MIN_LENGTH") {
            self.min_length = parse_var("BOGGLE_MIN_LENGTH", &v)?;
        }
        if let Some(v) = lookup("BOGGLE_SIZE") {
            self.size = parse_var("BOGGLE_SIZE", &v)?;
        }
        if let Some(v) = lookup("BOGGLE_ITERATIONS") {
            self.iterations = parse_var("BOGGLE_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("BOGGLE_RESTARTS") {
            self.restarts = parse_var("BOGGLE_RESTARTS", &v)?;
        }
        if let Some(v) = lookup("BOGGLE_SEED") {
            self.seed = Some(parse_var("BOGGLE_SEED", &v)?);
        }
        if let Some(v) = lookup("BOGGLE_VERBOSE") {
            self.verbose = parse_var("BOGGLE_VERBOSE", &v)?;
        }
        if let Some(v) = lookup("BOGGLE_OBJECTIVE") {
            self.objective = parse_var("BOGGLE_OBJECTIVE", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(BoggleError::Config("min_length must be at least 1".into()));
        }
        if self.size == 0 {
            return Err(BoggleError::Config("size must be at least 1".into()));
        }
        self.cells()?;
        if self.restarts == 0 {
            return Err(BoggleError::Config("restarts must be at least 1".into()));
        }
        Ok(())
    }

    /// Number of cells on a `size x size` board
    pub fn cells(&self) -> Result<usize> {
        self.size
            .checked_mul(self.size)
            .ok_or_else(|| BoggleError::Config(format!("size {} is too large", self.size)))
    }

    pub fn climb_settings(&self) -> ClimbSettings {
        ClimbSettings {
            iterations: self.iterations,
            objective: self.objective,
            verbose: self.verbose,
        }
    }
}

pub fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| BoggleError::Config(format!("{} = {:?}: {}", key, value, e)))
}
