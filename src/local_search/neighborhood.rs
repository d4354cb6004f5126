//! Move neighborhoods over full tours.
//!
//! Every neighborhood here is a family of segment reversals, parameterized
//! by two cut positions. Reversing the segment between the cuts exchanges
//! two tour edges for two others, so a candidate's value is available in
//! O(1) through [`Solution::two_opt_value`] before committing anything.

use crate::models::{Solution, Value};

/// One segment-reversal move, identified by its two cut positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// First cut position.
    pub cut1: usize,
    /// Second cut position, at most the tour length.
    pub cut2: usize,
}

impl Move {
    /// Signed tour value the move would produce. O(1).
    pub fn value(&self, solution: &Solution<'_>) -> Value {
        solution.two_opt_value(self.cut1, self.cut2)
    }

    /// Objective the move would produce. O(1).
    pub fn objective(&self, solution: &Solution<'_>) -> Value {
        self.value(solution).abs()
    }

    /// Commits the reversal to `solution`.
    pub fn apply(&self, solution: &mut Solution<'_>) {
        solution.two_opt(self.cut1, self.cut2);
    }
}

/// The move families a step function can draw from.
///
/// A cut pair splits the cyclic tour into two segments of lengths `l` and
/// `n - l`; each family constrains those lengths:
///
/// * [`TwoExchange`](Self::TwoExchange): both segments at least 2, i.e. the
///   complete 2-exchange neighborhood of n(n-3)/2 moves.
/// * [`NarrowTwoExchange`](Self::NarrowTwoExchange): both at least 3 and the
///   shorter at most `max(n/4, 3)`, a small-perturbation slice.
/// * [`WideTwoExchange`](Self::WideTwoExchange): both longer than
///   `max(n/4, 3)`, the complementary large-perturbation slice. Empty on
///   small instances.
/// * [`VertexShift`](Self::VertexShift): the shorter segment exactly 2,
///   which swaps one adjacent vertex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// All 2-exchange moves.
    TwoExchange,
    /// Short-segment 2-exchange moves.
    NarrowTwoExchange,
    /// Long-segment 2-exchange moves.
    WideTwoExchange,
    /// Adjacent pair swaps.
    VertexShift,
}

impl Neighborhood {
    /// Enumerates the family's moves for a tour of `n` vertices.
    ///
    /// Each cut set appears exactly once; the iterator is lazy and
    /// restartable by calling `moves` again.
    pub fn moves(&self, n: usize) -> Moves {
        let q = (n / 4).max(3);
        let (min_len, max_len) = match self {
            Neighborhood::TwoExchange => (2, n),
            Neighborhood::NarrowTwoExchange => (3, q),
            Neighborhood::WideTwoExchange => (q + 1, n),
            Neighborhood::VertexShift => (2, 2),
        };
        Moves {
            n,
            min_len,
            max_len,
            cut1: 0,
            cut2: 0,
        }
    }
}

/// Lazy enumeration of a neighborhood's cut pairs.
#[derive(Debug, Clone)]
pub struct Moves {
    n: usize,
    min_len: usize,
    max_len: usize,
    cut1: usize,
    cut2: usize,
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            self.cut2 += 1;
            if self.cut2 >= self.n {
                self.cut1 += 1;
                self.cut2 = self.cut1 + 1;
                if self.cut2 >= self.n {
                    return None;
                }
            }
            let l1 = self.cut2 - self.cut1;
            let l2 = self.n - l1;
            if l1 >= self.min_len && l2 >= self.min_len && l1.min(l2) <= self.max_len {
                return Some(Move {
                    cut1: self.cut1,
                    cut2: self.cut2,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cut_pairs(neighborhood: Neighborhood, n: usize) -> Vec<(usize, usize)> {
        neighborhood
            .moves(n)
            .map(|m| (m.cut1, m.cut2))
            .collect()
    }

    #[test]
    fn test_two_exchange_enumeration() {
        assert_eq!(
            cut_pairs(Neighborhood::TwoExchange, 5),
            vec![(0, 2), (0, 3), (1, 3), (1, 4), (2, 4)]
        );
        // n(n-3)/2 distinct moves.
        assert_eq!(cut_pairs(Neighborhood::TwoExchange, 8).len(), 20);
    }

    #[test]
    fn test_vertex_shift_enumeration() {
        // One move per adjacent pair, wrap-around pairs included.
        assert_eq!(cut_pairs(Neighborhood::VertexShift, 5).len(), 5);
        assert_eq!(cut_pairs(Neighborhood::VertexShift, 8).len(), 8);
        for (c1, c2) in cut_pairs(Neighborhood::VertexShift, 8) {
            let l = c2 - c1;
            assert!(l == 2 || l == 6);
        }
    }

    #[test]
    fn test_narrow_and_wide_partition() {
        // n = 12, threshold max(12/4, 3) = 3: narrow reverses segments of
        // exactly 3, wide needs both sides longer than 3.
        assert_eq!(cut_pairs(Neighborhood::NarrowTwoExchange, 12).len(), 12);
        assert_eq!(cut_pairs(Neighborhood::WideTwoExchange, 12).len(), 30);
    }

    #[test]
    fn test_wide_is_empty_on_small_instances() {
        assert!(cut_pairs(Neighborhood::WideTwoExchange, 7).is_empty());
    }

    #[test]
    fn test_degenerate_tour_sizes() {
        assert!(cut_pairs(Neighborhood::TwoExchange, 3).is_empty());
        assert!(cut_pairs(Neighborhood::TwoExchange, 0).is_empty());
    }
}
