//! Search algorithms over whole problem instances.
//!
//! Everything that turns a [`Problem`] into a finished [`Solution`]
//! implements [`Search`]; [`SearchAlgorithm`] is the configured dispatch the
//! runner drives.

mod grasp;
mod setup;
mod vnd;

pub use grasp::Grasp;
pub use setup::SearchAlgorithm;
pub use vnd::Vnd;

use rand::Rng;

use crate::construction::{Construction, DeterministicConstruction};
use crate::local_search::LocalSearch;
use crate::models::{Problem, Solution};

/// A complete solving strategy for one instance.
pub trait Search {
    /// Produces one full tour for `problem`.
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a>;
}

/// A bare construction heuristic run as a search.
pub struct ConstructionSearch<C: Construction> {
    construction: C,
}

impl<C: Construction> ConstructionSearch<C> {
    /// Wraps a construction.
    pub fn new(construction: C) -> Self {
        Self { construction }
    }
}

impl<C: Construction> Search for ConstructionSearch<C> {
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a> {
        self.construction.construct(problem, rng)
    }
}

/// Deterministic construction followed by one local search descent.
pub struct StandaloneLocalSearch {
    construction: DeterministicConstruction,
    local: LocalSearch,
}

impl StandaloneLocalSearch {
    /// Creates the construct-then-descend search.
    pub fn new(construction: DeterministicConstruction, local: LocalSearch) -> Self {
        Self {
            construction,
            local,
        }
    }
}

impl Search for StandaloneLocalSearch {
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a> {
        let start = self.construction.construct(problem, rng);
        self.local.improve(start, rng)
    }
}
