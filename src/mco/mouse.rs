//! Probabilistic tour construction guided by pheromone trails.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Problem, Solution};

use super::state::McoState;

/// Incentive floor for a perfectly balanced extension; keeps the reciprocal
/// finite so one candidate cannot absorb the whole distribution.
const MIN_MAGNITUDE: f64 = 1e-9;

/// One colony member: builds a tour by repeatedly choosing the next vertex
/// among the remaining ones.
///
/// # Algorithm
///
/// Start from a random permutation with a random rotation, then fix tour
/// positions left to right. For position `i`, every remaining candidate is
/// scored by `pheromone^pa + (1/|value|)^oa`, where `value` is the signed
/// tour value with the candidate swapped into position `i`. With probability
/// `intensification` the best-scored candidate is taken outright; otherwise
/// the score acts as a roulette weight. The chosen candidate is brought to
/// position `i` by a segment reversal, preserving the tail as a permutation.
#[derive(Debug, Clone, Copy)]
pub struct Mouse {
    pheromone_attraction: f64,
    objective_attraction: f64,
    intensification: f64,
}

impl Mouse {
    /// Creates a mouse with the given attraction exponents and
    /// intensification probability.
    pub fn new(pheromone_attraction: f64, objective_attraction: f64, intensification: f64) -> Self {
        Self {
            pheromone_attraction,
            objective_attraction,
            intensification,
        }
    }

    /// Builds one full tour over `problem`.
    pub fn construct<'a, R: Rng + ?Sized>(
        &self,
        problem: &'a Problem,
        state: &McoState,
        rng: &mut R,
    ) -> Solution<'a> {
        let n = problem.vertices();
        let mut tour: Vec<_> = (0..n).collect();
        tour.shuffle(rng);
        tour.rotate_left(rng.random_range(0..n));

        let mut solution = Solution::new(problem, tour);
        for position in 1..n {
            let next = self.decide_next(&solution, state, position, rng);
            solution.two_opt(position, next + 1);
        }
        solution
    }

    /// Picks the tour index (>= `position`) whose vertex takes `position`.
    fn decide_next<R: Rng + ?Sized>(
        &self,
        solution: &Solution<'_>,
        state: &McoState,
        position: usize,
        rng: &mut R,
    ) -> usize {
        debug_assert!(position > 0);
        let n = solution.len();
        let from = solution.vertices()[position - 1];

        let mut incentives = Vec::with_capacity(n - position);
        for i in position..n {
            let to = solution.vertices()[i];
            let pheromone = state.pheromone(from, to).powf(self.pheromone_attraction);
            let magnitude =
                (solution.two_opt_value(position, i + 1).abs() as f64).max(MIN_MAGNITUDE);
            let balance = magnitude.recip().powf(self.objective_attraction);
            let incentive = pheromone + balance;
            incentives.push(if incentive.is_finite() && incentive > 0.0 {
                incentive
            } else {
                0.0
            });
        }

        if rng.random_bool(self.intensification) {
            let mut best = 0;
            for (k, &incentive) in incentives.iter().enumerate() {
                if incentive > incentives[best] {
                    best = k;
                }
            }
            return position + best;
        }

        let total: f64 = incentives.iter().sum();
        if total <= 0.0 {
            return rng.random_range(position..n);
        }
        let mut draw = rng.random_range(0.0..total);
        for (k, &incentive) in incentives.iter().enumerate() {
            draw -= incentive;
            if draw <= 0.0 {
                return position + k;
            }
        }
        n - 1
    }
}
