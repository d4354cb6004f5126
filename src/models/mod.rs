//! Core data model: problem instances and tours.

mod problem;
mod solution;

pub use problem::{Edge, Problem, Value, Vertex};
pub use solution::Solution;
