//! Tour insertion strategies.

use crate::models::{Solution, Vertex};

/// Inserts a vertex at the position that keeps the partial tour value closest
/// to zero.
///
/// # Algorithm
///
/// Every insertion position replaces one tour edge with two; the resulting
/// value is predicted with the O(1) triangle delta and the first position
/// with minimal |value| wins. Tours of up to one vertex append, where the
/// position is irrelevant. O(n) per insertion.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestTourInserter;

impl BestTourInserter {
    /// Inserts `vertex` into `solution` at the best-balance position.
    pub fn insert(&self, solution: &mut Solution<'_>, vertex: Vertex) {
        let n = solution.len();
        if n <= 1 {
            solution.insert(n, vertex);
            return;
        }

        let problem = solution.problem();
        let tour = solution.vertices();
        let mut best_pos = 0;
        let mut best_objective = i64::MAX;
        for pos in 0..n {
            let prev = tour[(pos + n - 1) % n];
            let next = tour[pos];
            let value = solution.value() + problem.value(prev, vertex)
                + problem.value(vertex, next)
                - problem.value(prev, next);
            if value.abs() < best_objective {
                best_objective = value.abs();
                best_pos = pos;
            }
        }
        solution.insert(best_pos, vertex);
    }
}
