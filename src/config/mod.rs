//! Command line and experiment configuration.
//!
//! The whole run is described by one [`Configuration`] value: which
//! algorithm, its tuning knobs, how many runs per instance, and the input
//! files. It parses directly from the command line and round-trips through
//! serde so experiment setups can be kept as JSON files.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mco::ReinforceStrategy;

/// Top-level choice of search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Farthest-city construction, nothing else.
    DetConstruction,
    /// Uniform random construction, nothing else.
    RandConstruction,
    /// Deterministic construction plus one local search descent.
    LocalSearch,
    /// Greedy randomized adaptive search.
    Grasp,
    /// Variable neighborhood descent.
    Vnd,
    /// Mouse colony optimization.
    Mco,
}

/// How a local-search iteration chooses among neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StepFunction {
    /// A uniformly random neighbor.
    Random,
    /// The first improving neighbor in enumeration order.
    FirstImprovement,
    /// The best improving neighbor.
    BestImprovement,
}

/// Everything one invocation needs to know.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use cbtsp::config::{Algorithm, Configuration};
///
/// let config = Configuration::parse_from(["cbtsp", "-a", "grasp", "instance.txt"]);
/// assert_eq!(config.algorithm, Algorithm::Grasp);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "cbtsp", about = "Cost-balanced traveling salesman heuristics")]
pub struct Configuration {
    /// Search algorithm to run.
    #[arg(short, long, value_enum, default_value = "grasp")]
    pub algorithm: Algorithm,

    /// Step function for the local search parts.
    #[arg(short, long, value_enum, default_value = "first-improvement")]
    pub step: StepFunction,

    /// GRASP restarts, or MCO ticks without improvement before stopping.
    #[arg(short, long, default_value_t = 100)]
    pub iterations: usize,

    /// Tours constructed per MCO tick.
    #[arg(short, long, default_value_t = 100)]
    pub popsize: usize,

    /// Pheromone decay fraction per tick, between 0 and 1.
    #[arg(long, default_value_t = 0.1)]
    pub evaporation: f64,

    /// Extra reinforcement factor for the best tour; 0 disables elitism.
    #[arg(long, default_value_t = 1.0)]
    pub elitism: f64,

    /// Pheromone floor.
    #[arg(long, default_value_t = 0.0)]
    pub min_pheromone: f64,

    /// Pheromone ceiling.
    #[arg(long, default_value_t = 1.0)]
    pub max_pheromone: f64,

    /// Exponent on the pheromone term of the mouse incentive.
    #[arg(long, default_value_t = 1.0)]
    pub pheromone_attraction: f64,

    /// Exponent on the balance term of the mouse incentive.
    #[arg(long, default_value_t = 1.0)]
    pub objective_attraction: f64,

    /// Probability of exploiting the best candidate instead of sampling.
    #[arg(long, default_value_t = 0.5)]
    pub intensification: f64,

    /// Which solution lays pheromone: as constructed or as improved.
    #[arg(long, value_enum, default_value = "lamarck")]
    pub reinforce_strategy: ReinforceStrategy,

    /// Independent searches per input instance.
    #[arg(short, long, default_value_t = 10)]
    pub runs: usize,

    /// RNG seed; omit for a fresh seed from the operating system.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append per-instance statistics to this CSV file.
    #[arg(short, long)]
    pub dump: Option<PathBuf>,

    /// Instance files to solve.
    #[arg(required = true)]
    pub input_files: Vec<PathBuf>,
}

impl Configuration {
    /// Checks all parameter ranges; runs before any instance is touched.
    pub fn validate(&self) -> Result<()> {
        fn at_least_one(name: &'static str, value: usize) -> Result<()> {
            if value == 0 {
                return Err(Error::InvalidParameter {
                    name,
                    reason: "must be at least 1".into(),
                });
            }
            Ok(())
        }
        fn fraction(name: &'static str, value: f64) -> Result<()> {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidParameter {
                    name,
                    reason: format!("{value} is not between 0 and 1"),
                });
            }
            Ok(())
        }

        at_least_one("iterations", self.iterations)?;
        at_least_one("popsize", self.popsize)?;
        at_least_one("runs", self.runs)?;
        fraction("evaporation", self.evaporation)?;
        fraction("intensification", self.intensification)?;
        if self.elitism < 0.0 {
            return Err(Error::InvalidParameter {
                name: "elitism",
                reason: format!("{} is negative", self.elitism),
            });
        }
        if self.min_pheromone < 0.0 {
            return Err(Error::InvalidParameter {
                name: "min-pheromone",
                reason: format!("{} is negative", self.min_pheromone),
            });
        }
        if self.max_pheromone < self.min_pheromone {
            return Err(Error::InvalidParameter {
                name: "max-pheromone",
                reason: format!(
                    "{} is below the pheromone floor {}",
                    self.max_pheromone, self.min_pheromone
                ),
            });
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Grasp,
            step: StepFunction::FirstImprovement,
            iterations: 100,
            popsize: 100,
            evaporation: 0.1,
            elitism: 1.0,
            min_pheromone: 0.0,
            max_pheromone: 1.0,
            pheromone_attraction: 1.0,
            objective_attraction: 1.0,
            intensification: 0.5,
            reinforce_strategy: ReinforceStrategy::Lamarck,
            runs: 10,
            seed: None,
            dump: None,
            input_files: Vec::new(),
        }
    }
}
