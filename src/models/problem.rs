//! Problem instance: a signed-weight graph with a big-M sentinel.
//!
//! An instance is a complete lookup table over V vertices. Vertex pairs
//! without an explicit edge hold the big-M sentinel, a penalty chosen so that
//! any tour crossing even one absent edge scores worse than every tour that
//! uses only real edges. Constraint handling thus collapses into the
//! objective itself.
//!
//! # Big-M
//!
//! With `low` = sum of the V smallest edge values, `high` = sum of the V
//! largest, `s` = largest of the V smallest and `t` = smallest of the V
//! largest, the sentinel is
//!
//! ```text
//! big_m = high - low + s + 1    if -low < high
//! big_m = low - high + t - 1    otherwise
//! ```
//!
//! Any Hamiltonian cycle sums exactly V edge values, so its value lies in
//! `[low, high]`. Replacing one real edge with the sentinel pushes the sum
//! beyond that interval in the dominant direction, which is what makes
//! infeasible tours strictly worse than feasible ones.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Index of a vertex in a problem instance.
pub type Vertex = usize;

/// Signed edge value; tour values and objectives share this type.
pub type Value = i64;

/// An undirected edge with a signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub a: Vertex,
    /// Second endpoint.
    pub b: Vertex,
    /// Signed edge value.
    pub value: Value,
}

impl Edge {
    /// Creates an edge between `a` and `b` with the given value.
    pub fn new(a: Vertex, b: Vertex, value: Value) -> Self {
        Self { a, b, value }
    }
}

/// An immutable cost-balanced TSP instance.
///
/// Built once (programmatically or from text), then shared read-only by every
/// solution and search component derived from it.
///
/// # Examples
///
/// ```
/// use cbtsp::models::Problem;
///
/// let problem = Problem::from_text("3 3\n0 1 1\n0 2 -1\n1 2 3\n").unwrap();
/// assert_eq!(problem.vertices(), 3);
/// assert_eq!(problem.value(0, 1), 1);
/// assert_eq!(problem.value(1, 0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    vertices: usize,
    big_m: Value,
    values: Vec<Value>,
}

impl Problem {
    /// Creates an edgeless instance with an explicit big-M sentinel.
    ///
    /// Prefer [`Problem::from_edges`], which derives the sentinel from the
    /// edge list; an explicit sentinel is mostly useful for tests and for
    /// instances whose value range is known up front.
    ///
    /// # Errors
    ///
    /// [`Error::TooFewVertices`] for fewer than 3 vertices,
    /// [`Error::BigMOverflow`] if summing V sentinel values could overflow.
    pub fn new(vertices: usize, big_m: Value) -> Result<Self> {
        if vertices < 3 {
            return Err(Error::TooFewVertices(vertices));
        }
        // A tour sums at most V cells of the table; keep that sum in range.
        big_m
            .checked_abs()
            .and_then(|m| m.checked_mul(vertices as Value))
            .ok_or(Error::BigMOverflow)?;

        Ok(Self {
            vertices,
            big_m,
            values: vec![big_m; vertices * vertices],
        })
    }

    /// Builds an instance from an edge list, deriving big-M in a first pass
    /// before any edge is inserted.
    pub fn from_edges(vertices: usize, edges: &[Edge]) -> Result<Self> {
        let big_m = compute_big_m(vertices, edges)?;
        let mut problem = Self::new(vertices, big_m)?;
        for edge in edges {
            problem.add_edge(edge.a, edge.b, edge.value)?;
        }
        Ok(problem)
    }

    /// Parses an instance from its textual form.
    ///
    /// The format is a first line `"<vertices> <edges>"` followed by one
    /// `"<a> <b> <value>"` line per edge, all whitespace-separated integers.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on malformed, missing or excess tokens, plus every
    /// error [`Problem::from_edges`] can produce.
    pub fn from_text(text: &str) -> Result<Self> {
        let numbers = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<Value>()
                    .map_err(|_| Error::Parse(format!("not an integer: {token:?}")))
            })
            .collect::<Result<Vec<_>>>()?;

        if numbers.len() < 2 {
            return Err(Error::Parse(
                "an instance must specify the number of vertices and edges".into(),
            ));
        }

        let vertices = as_index(numbers[0])?;
        let edge_count = as_index(numbers[1])?;

        if numbers.len() != 2 + edge_count * 3 {
            return Err(Error::Parse(format!(
                "the instance must contain exactly {edge_count} edges"
            )));
        }

        let edges = numbers[2..]
            .chunks_exact(3)
            .map(|chunk| Ok(Edge::new(as_index(chunk[0])?, as_index(chunk[1])?, chunk[2])))
            .collect::<Result<Vec<_>>>()?;

        Self::from_edges(vertices, &edges)
    }

    /// Inserts an undirected edge.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range endpoints, self-loops, duplicate edges, values
    /// colliding with the sentinel, and values large enough to overflow tour
    /// arithmetic.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex, value: Value) -> Result<()> {
        for vertex in [a, b] {
            if vertex >= self.vertices {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    vertices: self.vertices,
                });
            }
        }
        if a == b {
            return Err(Error::LoopingEdge(a));
        }
        if value == self.big_m {
            return Err(Error::SentinelCollision(value));
        }
        if self.values[a * self.vertices + b] != self.big_m {
            return Err(Error::DuplicateEdge { a, b });
        }
        value
            .checked_abs()
            .and_then(|v| v.checked_mul(self.vertices as Value))
            .ok_or(Error::BigMOverflow)?;

        self.values[a * self.vertices + b] = value;
        self.values[b * self.vertices + a] = value;
        Ok(())
    }

    /// Number of vertices in the instance.
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// The big-M sentinel standing in for absent edges.
    pub fn big_m(&self) -> Value {
        self.big_m
    }

    /// Value of the edge between `a` and `b`, or big-M if absent. O(1).
    ///
    /// # Panics
    ///
    /// Debug builds assert that both endpoints are in range.
    pub fn value(&self, a: Vertex, b: Vertex) -> Value {
        debug_assert!(a < self.vertices && b < self.vertices);
        self.values[a * self.vertices + b]
    }
}

fn as_index(number: Value) -> Result<usize> {
    usize::try_from(number).map_err(|_| Error::Parse(format!("negative count or index: {number}")))
}

/// Two-pass big-M: order statistics over the full edge value list.
fn compute_big_m(vertices: usize, edges: &[Edge]) -> Result<Value> {
    if edges.is_empty() {
        return Ok(1);
    }

    let mut values: Vec<Value> = edges.iter().map(|e| e.value).collect();
    values.sort_unstable();

    let k = vertices.min(values.len());
    let smallest = &values[..k];
    let largest = &values[values.len() - k..];

    let low = sum_checked(smallest)?;
    let high = sum_checked(largest)?;
    let s = smallest[k - 1];
    let t = largest[0];

    let big_m = if low.checked_neg().ok_or(Error::BigMOverflow)? < high {
        high.checked_sub(low)
            .and_then(|m| m.checked_add(s))
            .and_then(|m| m.checked_add(1))
    } else {
        low.checked_sub(high)
            .and_then(|m| m.checked_add(t))
            .and_then(|m| m.checked_sub(1))
    };

    big_m.ok_or(Error::BigMOverflow)
}

fn sum_checked(values: &[Value]) -> Result<Value> {
    values
        .iter()
        .try_fold(0 as Value, |acc, &v| acc.checked_add(v))
        .ok_or(Error::BigMOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let problem = Problem::from_text("3 3\n0 1 1\n0 2 -1\n1 2 3\n").expect("valid instance");
        assert_eq!(problem.vertices(), 3);
        assert_eq!(problem.value(0, 1), 1);
        assert_eq!(problem.value(1, 0), 1);
        assert_eq!(problem.value(0, 2), -1);
        assert_eq!(problem.value(2, 0), -1);
        assert_eq!(problem.value(1, 2), 3);
        assert_eq!(problem.value(2, 1), 3);
    }

    #[test]
    fn test_from_text_malformed() {
        assert!(matches!(Problem::from_text(""), Err(Error::Parse(_))));
        assert!(matches!(Problem::from_text("3"), Err(Error::Parse(_))));
        // Announces 3 edges, delivers 2.
        assert!(matches!(
            Problem::from_text("3 3\n0 1 1\n0 2 -1\n"),
            Err(Error::Parse(_))
        ));
        // Trailing garbage.
        assert!(matches!(
            Problem::from_text("3 1\n0 1 1\n7\n"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Problem::from_text("3 1\n0 x 1\n"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_from_text_out_of_range_vertex() {
        assert!(matches!(
            Problem::from_text("3 1\n0 5 1\n"),
            Err(Error::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn test_big_m_two_pass() {
        // Values {1, -1, 3, 5, 0} over 4 vertices: low = -1+0+1+3 = 3,
        // high = 0+1+3+5 = 9, s = 3, so big_m = 9 - 3 + 3 + 1 = 10.
        let edges = [
            Edge::new(0, 1, 1),
            Edge::new(1, 2, -1),
            Edge::new(2, 3, 3),
            Edge::new(3, 0, 5),
            Edge::new(0, 2, 0),
        ];
        let problem = Problem::from_edges(4, &edges).expect("valid instance");
        assert_eq!(problem.big_m(), 10);
        // The one absent pair reports the sentinel.
        assert_eq!(problem.value(1, 3), 10);
        assert_eq!(problem.value(3, 1), 10);
    }

    #[test]
    fn test_big_m_negative_dominant() {
        // Values {1, 3, -1, -4, 0} over 4 vertices: low = -4, high = 3,
        // -low >= high, t = -1, so big_m = -4 - 3 - 1 - 1 = -9.
        let edges = [
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 3),
            Edge::new(2, 3, -1),
            Edge::new(3, 0, -4),
            Edge::new(0, 2, 0),
        ];
        let problem = Problem::from_edges(4, &edges).expect("valid instance");
        assert_eq!(problem.big_m(), -9);
        assert_eq!(problem.value(1, 3), -9);
    }

    #[test]
    fn test_symmetry() {
        let problem = Problem::from_text("4 3\n0 1 4\n1 2 -7\n2 3 2\n").expect("valid instance");
        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(problem.value(a, b), problem.value(b, a));
            }
        }
    }

    #[test]
    fn test_too_few_vertices() {
        assert!(matches!(Problem::new(2, 100), Err(Error::TooFewVertices(2))));
    }

    #[test]
    fn test_add_edge_rejects_invalid() {
        let mut problem = Problem::new(4, 100).expect("valid instance");
        assert!(matches!(
            problem.add_edge(0, 4, 1),
            Err(Error::VertexOutOfRange { vertex: 4, .. })
        ));
        assert!(matches!(problem.add_edge(2, 2, 1), Err(Error::LoopingEdge(2))));
        assert!(matches!(
            problem.add_edge(0, 1, 100),
            Err(Error::SentinelCollision(100))
        ));
        problem.add_edge(0, 1, 5).expect("first insert");
        assert!(matches!(
            problem.add_edge(1, 0, 5),
            Err(Error::DuplicateEdge { a: 1, b: 0 })
        ));
    }

    #[test]
    fn test_overflow_guard() {
        assert!(matches!(
            Problem::new(4, Value::MAX / 2),
            Err(Error::BigMOverflow)
        ));
        let mut problem = Problem::new(4, 100).expect("valid instance");
        assert!(matches!(
            problem.add_edge(0, 1, Value::MAX / 2),
            Err(Error::BigMOverflow)
        ));
    }
}
