//! # cbtsp
//!
//! Heuristics for the cost-balanced traveling salesman problem: find a
//! round trip over signed edge values whose sum is as close to zero as
//! possible. Missing edges are modeled with a big-M sentinel so every vertex
//! sequence has a value and infeasibility is simply a very bad objective.
//!
//! ## Modules
//!
//! - [`models`] — Problem instances and tours with delta-evaluated values
//! - [`construction`] — Greedy and randomized tour construction
//! - [`local_search`] — 2-exchange neighborhoods, step functions, descent
//! - [`search`] — GRASP, VND, and the configured algorithm dispatch
//! - [`mco`] — Mouse colony optimization
//! - [`statistics`] — Aggregation of repeated runs
//! - [`config`] — Command line and experiment configuration
//! - [`run`] — The experiment harness around all of the above

pub mod config;
pub mod construction;
pub mod error;
pub mod local_search;
pub mod mco;
pub mod models;
pub mod run;
pub mod search;
pub mod statistics;

pub use error::{Error, Result};
