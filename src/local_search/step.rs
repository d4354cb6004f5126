//! Step functions: how one local-search iteration picks its move.

use rand::Rng;

use crate::models::Solution;

use super::neighborhood::Neighborhood;

/// A single local-search step over a neighborhood.
///
/// The improvement variants leave the solution untouched when no strictly
/// improving move exists, which is what lets the stagnation criterion detect
/// a local optimum. [`Random`](Self::Random) applies an arbitrary neighbor
/// unconditionally and therefore walks rather than descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Apply the first strictly improving move in enumeration order.
    FirstImprovement(Neighborhood),
    /// Apply the best strictly improving move.
    BestImprovement(Neighborhood),
    /// Apply a uniformly random move.
    Random(Neighborhood),
}

impl Step {
    /// Performs one step on `solution`.
    pub fn step<R: Rng + ?Sized>(&self, solution: &mut Solution<'_>, rng: &mut R) {
        let n = solution.len();
        match *self {
            Step::FirstImprovement(neighborhood) => {
                let base = solution.objective();
                let improving = neighborhood
                    .moves(n)
                    .find(|m| m.objective(solution) < base);
                if let Some(chosen) = improving {
                    chosen.apply(solution);
                }
            }
            Step::BestImprovement(neighborhood) => {
                let mut best = solution.objective();
                let mut chosen = None;
                for candidate in neighborhood.moves(n) {
                    let objective = candidate.objective(solution);
                    if objective < best {
                        best = objective;
                        chosen = Some(candidate);
                    }
                }
                if let Some(chosen) = chosen {
                    chosen.apply(solution);
                }
            }
            Step::Random(neighborhood) => {
                let count = neighborhood.moves(n).count();
                if count == 0 {
                    return;
                }
                let picked = rng.random_range(0..count);
                if let Some(chosen) = neighborhood.moves(n).nth(picked) {
                    chosen.apply(solution);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, Problem};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

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
    fn test_first_improvement_takes_first_better_neighbor() {
        let problem = instance();
        let mut solution = Solution::new(&problem, vec![0, 1, 3, 4, 2]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let before = solution.objective();
        Step::FirstImprovement(Neighborhood::TwoExchange).step(&mut solution, &mut rng);
        assert!(solution.objective() < before);
        assert_eq!(solution.vertices(), &[1, 0, 3, 4, 2]);
    }

    #[test]
    fn test_best_improvement_takes_best_neighbor() {
        let problem = instance();
        let mut solution = Solution::new(&problem, vec![1, 0, 3, 4, 2]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        Step::BestImprovement(Neighborhood::TwoExchange).step(&mut solution, &mut rng);
        // Cuts (2, 4) reach objective 0; (0, 3) would only reach 11.
        assert_eq!(solution.objective(), 0);
        assert_eq!(solution.vertices(), &[1, 0, 4, 3, 2]);
    }

    #[test]
    fn test_improvement_steps_leave_local_optimum_alone() {
        let problem = instance();
        let mut solution = Solution::new(&problem, vec![0, 1, 2, 3, 4]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(solution.objective(), 0);
        Step::FirstImprovement(Neighborhood::TwoExchange).step(&mut solution, &mut rng);
        assert_eq!(solution.vertices(), &[0, 1, 2, 3, 4]);
        Step::BestImprovement(Neighborhood::TwoExchange).step(&mut solution, &mut rng);
        assert_eq!(solution.vertices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_random_step_keeps_permutation() {
        let problem = instance();
        let mut solution = Solution::new(&problem, vec![0, 1, 2, 3, 4]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..10 {
            Step::Random(Neighborhood::TwoExchange).step(&mut solution, &mut rng);
            let distinct: BTreeSet<_> = solution.vertices().iter().copied().collect();
            assert_eq!(distinct.len(), 5);
        }
    }
}
