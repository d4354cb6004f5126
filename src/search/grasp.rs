//! Greedy randomized adaptive search.

use rand::Rng;
use tracing::debug;

use crate::construction::Construction;
use crate::local_search::LocalSearch;
use crate::models::{Problem, Solution};

use super::Search;

/// Repeats construct-then-improve for a fixed number of iterations and keeps
/// the strictly best polished tour.
pub struct Grasp<C: Construction> {
    construction: C,
    improvement: LocalSearch,
    iterations: usize,
}

impl<C: Construction> Grasp<C> {
    /// Creates a GRASP over the given restart generator and improvement
    /// search.
    ///
    /// # Panics
    ///
    /// Panics when `iterations` is 0.
    pub fn new(construction: C, improvement: LocalSearch, iterations: usize) -> Self {
        assert!(iterations > 0);
        Self {
            construction,
            improvement,
            iterations,
        }
    }
}

impl<C: Construction> Search for Grasp<C> {
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a> {
        let start = self.construction.construct(problem, rng);
        let mut best = self.improvement.improve(start, rng);

        for iteration in 1..self.iterations {
            let start = self.construction.construct(problem, rng);
            let candidate = self.improvement.improve(start, rng);
            if candidate < best {
                debug!(
                    iteration,
                    objective = candidate.objective(),
                    "restart found new best"
                );
                best = candidate;
            }
        }
        best
    }
}
