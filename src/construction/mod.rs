//! Construction heuristics that build full tours from scratch.
//!
//! Construction is factored into a vertex [`Selector`] (which city joins the
//! tour next) and the [`BestTourInserter`] (where it goes). The two stock
//! combinations are [`DeterministicConstruction`] (farthest-city selection,
//! always the same tour) and [`RandomConstruction`] (uniform selection, the
//! randomized restart generator for GRASP).

mod inserter;
mod selector;

pub use inserter::BestTourInserter;
pub use selector::{FarthestCitySelector, RandomSelector, Selector};

use rand::Rng;

use crate::models::{Problem, Solution};

/// Builds a complete tour for a problem.
///
/// Takes `&mut self` so stateful implementations (counters, caches) are
/// possible; the stock constructions carry no state.
pub trait Construction {
    /// Constructs a full tour over every vertex of `problem`.
    fn construct<'a, R: Rng + ?Sized>(
        &mut self,
        problem: &'a Problem,
        rng: &mut R,
    ) -> Solution<'a>;
}

/// Grows a tour one vertex at a time: the selector picks the vertex, the
/// inserter places it at the best-balance position.
#[derive(Debug, Clone, Default)]
pub struct SelectInsertConstruction<S: Selector> {
    selector: S,
    inserter: BestTourInserter,
}

impl<S: Selector> SelectInsertConstruction<S> {
    /// Creates a construction around the given selector.
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            inserter: BestTourInserter,
        }
    }
}

impl<S: Selector> Construction for SelectInsertConstruction<S> {
    fn construct<'a, R: Rng + ?Sized>(
        &mut self,
        problem: &'a Problem,
        rng: &mut R,
    ) -> Solution<'a> {
        let mut solution = Solution::new(problem, Vec::with_capacity(problem.vertices()));
        while solution.is_partial() {
            let vertex = self.selector.select(problem, solution.vertices(), rng);
            self.inserter.insert(&mut solution, vertex);
        }
        solution
    }
}

/// Farthest-city construction; deterministic for a given problem.
pub type DeterministicConstruction = SelectInsertConstruction<FarthestCitySelector>;

/// Uniform-random selection construction.
pub type RandomConstruction = SelectInsertConstruction<RandomSelector>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    fn instance5() -> Problem {
        Problem::from_edges(
            5,
            &[
                Edge::new(0, 1, 1),
                Edge::new(0, 2, 2),
                Edge::new(0, 3, 3),
                Edge::new(0, 4, -4),
                Edge::new(1, 2, -1),
                Edge::new(3, 4, 1),
            ],
        )
        .expect("valid instance")
    }

    #[test]
    fn test_deterministic_construction() {
        let problem = instance5();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut construction = DeterministicConstruction::default();
        let mut solution = construction.construct(&problem, &mut rng);
        assert!(!solution.is_partial());
        solution.normalize();
        assert_eq!(solution.vertices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_random_construction_visits_everything() {
        let problem = instance5();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut construction = RandomConstruction::default();
        for _ in 0..10 {
            let solution = construction.construct(&problem, &mut rng);
            assert_eq!(solution.len(), 5);
            let distinct: BTreeSet<_> = solution.vertices().iter().copied().collect();
            assert_eq!(distinct.len(), 5);
        }
    }
}
