//! Local search driver and its termination criterion.

use rand::Rng;

use crate::models::{Solution, Value};

use super::step::Step;

/// Stops a search as soon as an iteration fails to improve on the best
/// objective seen so far.
#[derive(Debug, Clone)]
pub struct WhenStagnant {
    best: Value,
}

impl WhenStagnant {
    /// Creates a fresh criterion that accepts any first objective.
    pub fn new() -> Self {
        Self { best: Value::MAX }
    }

    /// `true` once `solution` no longer beats the best objective on record.
    pub fn done_after(&mut self, solution: &Solution<'_>) -> bool {
        let objective = solution.objective();
        if objective >= self.best {
            true
        } else {
            self.best = objective;
            false
        }
    }
}

impl Default for WhenStagnant {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterates a [`Step`] until stagnation.
///
/// With an improvement step this descends to a local optimum of the step's
/// neighborhood; with a random step it walks until the first non-improving
/// draw. Each call runs with a fresh stagnation tracker, so one instance can
/// polish any number of solutions.
#[derive(Debug, Clone, Copy)]
pub struct LocalSearch {
    step: Step,
}

impl LocalSearch {
    /// Creates a local search around the given step function.
    pub fn new(step: Step) -> Self {
        Self { step }
    }

    /// Runs `solution` to stagnation and returns the result.
    pub fn improve<'a, R: Rng + ?Sized>(
        &self,
        mut solution: Solution<'a>,
        rng: &mut R,
    ) -> Solution<'a> {
        let mut stagnant = WhenStagnant::new();
        loop {
            self.step.step(&mut solution, rng);
            if stagnant.done_after(&solution) {
                return solution;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::Neighborhood;
    use crate::models::{Edge, Problem};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn instance() -> Problem {
        Problem::from_edges(
            5,
            &[
                Edge::new(0, 1, 1),
                Edge::new(1, 2, -1),
                Edge::new(2, 3, 3),
                Edge::new(3, 4, -1),
                Edge::new(4, 0, -2),
                Edge::new(0, 3, 3),
                Edge::new(1, 4, -4),
            ],
        )
        .expect("valid instance")
    }

    #[test]
    fn test_stagnation_criterion() {
        let problem = instance();
        let mut stagnant = WhenStagnant::new();
        let better = Solution::new(&problem, vec![0, 1, 2, 3, 4]); // objective 0
        let worse = Solution::new(&problem, vec![0, 1, 3, 4, 2]);
        assert!(!stagnant.done_after(&worse));
        assert!(!stagnant.done_after(&better));
        assert!(stagnant.done_after(&better));
        assert!(stagnant.done_after(&worse));
    }

    #[test]
    fn test_first_improvement_search_reaches_optimum() {
        let problem = instance();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let start = Solution::new(&problem, vec![0, 1, 3, 4, 2]);
        let local = LocalSearch::new(Step::FirstImprovement(Neighborhood::TwoExchange));
        let mut found = local.improve(start, &mut rng);
        found.normalize();
        assert_eq!(found.vertices(), &[0, 1, 2, 3, 4]);
        assert_eq!(found.objective(), 0);
    }

    #[test]
    fn test_best_improvement_search_reaches_optimum() {
        let problem = instance();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let start = Solution::new(&problem, vec![0, 1, 3, 4, 2]);
        let local = LocalSearch::new(Step::BestImprovement(Neighborhood::TwoExchange));
        let mut found = local.improve(start, &mut rng);
        found.normalize();
        assert_eq!(found.vertices(), &[0, 1, 2, 3, 4]);
        assert_eq!(found.objective(), 0);
    }

    #[test]
    fn test_search_results_are_independent() {
        // Polishing a good tour first must not poison a later run on a
        // worse start; every call gets its own stagnation tracker.
        let problem = instance();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let local = LocalSearch::new(Step::FirstImprovement(Neighborhood::TwoExchange));
        let first = local.improve(Solution::new(&problem, vec![0, 1, 2, 3, 4]), &mut rng);
        assert_eq!(first.objective(), 0);
        let second = local.improve(Solution::new(&problem, vec![0, 1, 3, 4, 2]), &mut rng);
        assert_eq!(second.objective(), 0);
    }
}
