//! Vertex selection strategies for tour construction.
//!
//! A [`Selector`] picks which not-yet-visited vertex a construction should
//! extend the partial tour with next. Selection is independent of where the
//! vertex ends up in the tour; placement is the inserter's job.

use rand::Rng;

use crate::models::{Problem, Vertex};

/// Picks the next vertex to add to a partial tour.
pub trait Selector {
    /// Selects one vertex from those not yet in `partial`.
    ///
    /// `partial` holds fewer vertices than the problem; implementations may
    /// assume at least one candidate exists.
    fn select<R: Rng + ?Sized>(&self, problem: &Problem, partial: &[Vertex], rng: &mut R)
        -> Vertex;
}

/// Vertices of `problem` absent from `partial`, in ascending order.
pub(crate) fn selectables(problem: &Problem, partial: &[Vertex]) -> Vec<Vertex> {
    (0..problem.vertices())
        .filter(|v| !partial.contains(v))
        .collect()
}

/// Selects the candidate whose closest connection to the partial tour is
/// largest in magnitude.
///
/// # Algorithm
///
/// For every candidate, take the minimum |value| over its real edges into the
/// partial tour (absent edges do not count as a connection). The candidate
/// with the maximum such minimum wins, first index on ties. Candidates with
/// no real edge into the tour are considered last: one is returned only when
/// every candidate is disconnected. On an empty partial tour, vertex 0 starts.
///
/// # Examples
///
/// ```
/// use cbtsp::construction::{FarthestCitySelector, Selector};
/// use cbtsp::models::{Edge, Problem};
///
/// let problem = Problem::from_edges(
///     4,
///     &[
///         Edge::new(0, 1, 1),
///         Edge::new(0, 2, 2),
///         Edge::new(0, 3, 5),
///         Edge::new(1, 2, -1),
///     ],
/// )
/// .unwrap();
/// let selector = FarthestCitySelector;
/// let mut rng = rand::rng();
/// // 3 connects to the tour only via 0-3 with |5|, beating 1's |1|.
/// assert_eq!(selector.select(&problem, &[0, 2], &mut rng), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FarthestCitySelector;

impl Selector for FarthestCitySelector {
    fn select<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        partial: &[Vertex],
        _rng: &mut R,
    ) -> Vertex {
        if partial.is_empty() {
            return 0;
        }

        let candidates = selectables(problem, partial);
        debug_assert!(!candidates.is_empty());
        let big_m = problem.big_m();

        let mut best = candidates[0];
        let mut best_distance: Option<i64> = None;
        for &candidate in &candidates {
            let distance = partial
                .iter()
                .map(|&v| problem.value(candidate, v))
                .filter(|&value| value != big_m)
                .map(|value| value.abs())
                .min();
            match (distance, best_distance) {
                (Some(d), Some(b)) if d > b => {
                    best = candidate;
                    best_distance = Some(d);
                }
                (Some(d), None) => {
                    best = candidate;
                    best_distance = Some(d);
                }
                _ => {}
            }
        }
        best
    }
}

/// Selects a candidate uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl Selector for RandomSelector {
    fn select<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        partial: &[Vertex],
        rng: &mut R,
    ) -> Vertex {
        let candidates = selectables(problem, partial);
        debug_assert!(!candidates.is_empty());
        candidates[rng.random_range(0..candidates.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

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
    fn test_farthest_city_starts_at_zero() {
        let problem = instance5();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(FarthestCitySelector.select(&problem, &[], &mut rng), 0);
    }

    #[test]
    fn test_farthest_city_picks_largest_min_distance() {
        let problem = instance5();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // From {0, 2}: 1 has min(|1|, |-1|) = 1, 3 has |3|, 4 has |-4|.
        assert_eq!(FarthestCitySelector.select(&problem, &[0, 2], &mut rng), 4);
        // From {0, 3, 4}: 1 has min |1|, 2 has min |2|.
        assert_eq!(
            FarthestCitySelector.select(&problem, &[0, 3, 4], &mut rng),
            2
        );
    }

    #[test]
    fn test_farthest_city_deprioritizes_disconnected() {
        let problem = Problem::from_edges(
            4,
            &[Edge::new(0, 1, 8), Edge::new(0, 2, 1), Edge::new(1, 2, 1)],
        )
        .expect("valid instance");
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // 3 has no real edge to {0}; the connected 1 (|8|) wins over 2 (|1|).
        assert_eq!(FarthestCitySelector.select(&problem, &[0], &mut rng), 1);
    }

    #[test]
    fn test_random_selector_stays_in_candidates() {
        let problem = instance5();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = RandomSelector.select(&problem, &[0, 3], &mut rng);
            assert!([1, 2, 4].contains(&picked));
        }
    }
}
