//! Variable neighborhood descent.

use rand::Rng;

use crate::construction::Construction;
use crate::local_search::Step;
use crate::models::{Problem, Solution};

use super::Search;

/// Descends through an ordered list of step functions.
///
/// The first step's neighborhood is searched until it yields no improvement,
/// then the next level takes over; any improvement drops back to level 0.
/// The search ends once the last level stagnates, i.e. the result is a local
/// optimum of every configured neighborhood at once.
pub struct Vnd<C: Construction> {
    construction: C,
    steps: Vec<Step>,
}

impl<C: Construction> Vnd<C> {
    /// Creates a VND over the given start-tour construction and step levels,
    /// ordered from cheapest to widest.
    pub fn new(construction: C, steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty());
        Self {
            construction,
            steps,
        }
    }
}

impl<C: Construction> Search for Vnd<C> {
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a> {
        let mut best = self.construction.construct(problem, rng);
        let mut level = 0;

        while level < self.steps.len() {
            let mut candidate = best.clone();
            self.steps[level].step(&mut candidate, rng);

            if candidate.objective() < best.objective() {
                best = candidate;
                level = 0;
            } else {
                level += 1;
            }
        }
        best
    }
}
