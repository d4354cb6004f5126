//! Shared pheromone state of the mouse colony.

use crate::models::{Problem, Solution, Vertex};

/// Symmetric pheromone matrix plus the per-tick reinforcement buffer.
///
/// Reinforcements accumulate in a separate delta matrix so that every mouse
/// of a tick samples from the same pheromone snapshot; [`update`](Self::update)
/// commits the buffer and clamps each cell into the configured band.
#[derive(Debug, Clone)]
pub struct McoState {
    vertices: usize,
    min_pheromone: f64,
    max_pheromone: f64,
    pheromone: Vec<f64>,
    delta: Vec<f64>,
}

impl McoState {
    /// Creates state for `problem` with every trail at `max_pheromone`,
    /// making the first tick maximally exploratory.
    pub fn new(problem: &Problem, min_pheromone: f64, max_pheromone: f64) -> Self {
        let n = problem.vertices();
        Self {
            vertices: n,
            min_pheromone,
            max_pheromone,
            pheromone: vec![max_pheromone; n * n],
            delta: vec![0.0; n * n],
        }
    }

    /// Current pheromone on the undirected edge `a`-`b`.
    pub fn pheromone(&self, a: Vertex, b: Vertex) -> f64 {
        self.pheromone[a * self.vertices + b]
    }

    /// Buffers reinforcement of `factor / objective` on every edge of the
    /// tour; an objective of 0 reinforces as if it were 1.
    pub fn reinforce(&mut self, solution: &Solution<'_>, factor: f64) {
        debug_assert!(!solution.is_partial());
        let amount = factor / solution.objective().max(1) as f64;
        let vertices = solution.vertices();
        let mut prev = vertices[vertices.len() - 1];
        for &v in vertices {
            self.delta[prev * self.vertices + v] += amount;
            self.delta[v * self.vertices + prev] += amount;
            prev = v;
        }
    }

    /// Commits buffered reinforcements, clamping each trail into
    /// `[min_pheromone, max_pheromone]`, and clears the buffer.
    pub fn update(&mut self) {
        for (p, d) in self.pheromone.iter_mut().zip(self.delta.iter_mut()) {
            *p = (*p + *d).clamp(self.min_pheromone, self.max_pheromone);
            *d = 0.0;
        }
    }

    /// Decays every trail towards the pheromone floor by the given fraction.
    pub fn evaporate(&mut self, evaporation: f64) {
        for p in self.pheromone.iter_mut() {
            *p = (1.0 - evaporation) * *p + evaporation * self.min_pheromone;
        }
    }
}
