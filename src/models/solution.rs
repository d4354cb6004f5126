//! Tours with incrementally maintained signed values.
//!
//! A [`Solution`] is an ordered vertex sequence interpreted cyclically (the
//! last vertex connects back to the first) together with a cached signed sum
//! of its edge values. The cache is established by one O(n) scan at
//! construction and kept exact by O(1) delta updates on every mutation;
//! nothing ever rescans the tour afterwards.

use std::cmp::Ordering;
use std::fmt;

use super::{Problem, Value, Vertex};

/// A (possibly partial) tour over a [`Problem`].
///
/// The problem is borrowed read-only and must outlive the solution; many
/// solutions share one problem during a search run.
///
/// # Examples
///
/// ```
/// use cbtsp::models::{Problem, Solution};
///
/// let problem = Problem::from_text("3 3\n0 1 1\n0 2 -1\n1 2 3\n").unwrap();
/// let solution = Solution::new(&problem, vec![0, 1, 2]);
/// assert_eq!(solution.value(), 1 + 3 - 1);
/// assert_eq!(solution.objective(), 3);
/// assert!(solution.is_feasible());
/// ```
#[derive(Debug, Clone)]
pub struct Solution<'a> {
    problem: &'a Problem,
    vertices: Vec<Vertex>,
    value: Value,
}

impl<'a> Solution<'a> {
    /// Creates a solution from a vertex sequence, computing its value by one
    /// full cyclic scan.
    pub fn new(problem: &'a Problem, vertices: Vec<Vertex>) -> Self {
        let value = calculate_value(problem, &vertices);
        Self {
            problem,
            vertices,
            value,
        }
    }

    /// The problem this tour lives on.
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    /// The vertex sequence, in tour order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices currently in the tour.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if the tour holds no vertices yet.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The signed cyclic sum of edge values.
    pub fn value(&self) -> Value {
        self.value
    }

    /// The objective: absolute value of the signed sum, lower is better.
    pub fn objective(&self) -> Value {
        self.value.abs()
    }

    /// `true` while the tour does not yet visit every vertex.
    pub fn is_partial(&self) -> bool {
        self.vertices.len() < self.problem.vertices()
    }

    /// `true` for a full tour using no absent (big-M) edge. O(n).
    pub fn is_feasible(&self) -> bool {
        !self.is_partial() && self.infeasible_edges() == 0
    }

    /// Number of cyclic edges that are absent from the problem. O(n).
    pub fn infeasible_edges(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        let big_m = self.problem.big_m();
        (0..n)
            .filter(|&i| {
                let prev = self.vertices[(i + n - 1) % n];
                self.problem.value(prev, self.vertices[i]) == big_m
            })
            .count()
    }

    /// Inserts `vertex` at position `pos`, delta-updating the value with the
    /// changed triangle of edges. O(1) beyond the `Vec` shift.
    ///
    /// A one-vertex tour becomes a 2-cycle whose value counts the connecting
    /// edge twice (out and back), which keeps the invariant intact while a
    /// construction grows the tour edge by edge.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert(&mut self, pos: usize, vertex: Vertex) {
        let n = self.vertices.len();
        match n {
            0 => {}
            1 => self.value = 2 * self.problem.value(self.vertices[0], vertex),
            _ => {
                let prev = self.vertices[(pos + n - 1) % n];
                let next = self.vertices[pos % n];
                self.value += self.problem.value(prev, vertex)
                    + self.problem.value(vertex, next)
                    - self.problem.value(prev, next);
            }
        }
        self.vertices.insert(pos, vertex);
    }

    /// Signed tour value that applying [`two_opt`](Self::two_opt) with the
    /// same cuts would produce, without mutating. O(1): only the 4 boundary
    /// edges change.
    pub fn two_opt_value(&self, c1: usize, c2: usize) -> Value {
        let n = self.vertices.len();
        let (low, high) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        debug_assert!(high <= n);
        if high - low == 0 || high - low == n {
            return self.value;
        }

        let prev = self.vertices[(low + n - 1) % n];
        let first = self.vertices[low];
        let last = self.vertices[high - 1];
        let next = self.vertices[high % n];

        self.value - self.problem.value(prev, first) - self.problem.value(last, next)
            + self.problem.value(prev, last)
            + self.problem.value(first, next)
    }

    /// Reverses the segment `[min(c1, c2), max(c1, c2))` and delta-updates
    /// the value. `max(c1, c2)` may equal `len()` (suffix reversal).
    pub fn two_opt(&mut self, c1: usize, c2: usize) {
        self.value = self.two_opt_value(c1, c2);
        let (low, high) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        self.vertices[low..high].reverse();
    }

    /// Canonicalizes the cyclic tour: rotate the minimum vertex to the front
    /// and traverse in the direction whose second vertex is smaller.
    ///
    /// Rotations and reflections of the same cycle normalize to the same
    /// sequence; the operation is idempotent and objective-preserving.
    pub fn normalize(&mut self) {
        let n = self.vertices.len();
        if n < 2 {
            return;
        }

        let start = self
            .vertices
            .iter()
            .enumerate()
            .min_by_key(|(_, &v)| v)
            .map(|(i, _)| i)
            .unwrap_or(0);

        let forward = self.vertices[(start + 1) % n];
        let backward = self.vertices[(start + n - 1) % n];

        let mut normal = Vec::with_capacity(n);
        if forward > backward {
            // Walk the cycle backwards from the minimum.
            for i in 0..n {
                normal.push(self.vertices[(start + n - i) % n]);
            }
        } else {
            for i in 0..n {
                normal.push(self.vertices[(start + i) % n]);
            }
        }

        // The edge multiset is unchanged, so the value is too.
        self.vertices = normal;
    }

    /// The tour as a line of space-separated vertex indices, e.g. `"3 0 1"`.
    pub fn representation(&self) -> String {
        self.vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.representation())
    }
}

/// Solutions order by objective, ascending: smaller is better, and the big-M
/// design makes every feasible tour beat every infeasible one.
impl PartialEq for Solution<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.objective() == other.objective()
    }
}

impl Eq for Solution<'_> {}

impl PartialOrd for Solution<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.objective().cmp(&other.objective())
    }
}

fn calculate_value(problem: &Problem, vertices: &[Vertex]) -> Value {
    if vertices.len() <= 1 {
        return 0;
    }
    let mut total = 0;
    let mut prev = vertices[vertices.len() - 1];
    for &v in vertices {
        total += problem.value(prev, v);
        prev = v;
    }
    total
}
