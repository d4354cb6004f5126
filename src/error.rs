//! Crate-wide error taxonomy.
//!
//! All failure modes are unrecoverable at the point of detection: malformed
//! instance text and structural violations are rejected while building a
//! [`Problem`](crate::models::Problem), configuration mistakes before any
//! search begins. The search core itself is pure computation over validated
//! in-memory data and has no failure modes of its own.

use thiserror::Error;

/// Errors produced while loading instances, building problems, or validating
/// a configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A valid instance needs at least 3 vertices.
    #[error("a valid instance consists of at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// An edge endpoint does not exist in the instance.
    #[error("vertex {vertex} is out of range for an instance with {vertices} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the instance.
        vertices: usize,
    },

    /// Self-loops carry no routing information and are forbidden.
    #[error("looping edge at vertex {0} is forbidden")]
    LoopingEdge(usize),

    /// The same vertex pair was specified twice.
    #[error("edge ({a}, {b}) is already present")]
    DuplicateEdge {
        /// First endpoint.
        a: usize,
        /// Second endpoint.
        b: usize,
    },

    /// An edge value collides with the big-M sentinel and would be
    /// indistinguishable from an absent edge.
    #[error("edge value {0} collides with the big-M sentinel")]
    SentinelCollision(i64),

    /// Edge values are large enough that summing a tour could overflow.
    #[error("edge values overflow big-M arithmetic")]
    BigMOverflow,

    /// The instance text does not follow the `"V E"` + edge-list format.
    #[error("malformed instance text: {0}")]
    Parse(String),

    /// A configuration knob is outside its legal range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Reading an instance or writing results failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
