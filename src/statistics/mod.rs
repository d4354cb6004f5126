//! Aggregation of repeated search runs on one instance.

use std::time::Duration;

use crate::models::{Solution, Value};

/// Collects the outcomes of independent runs and derives the report numbers.
///
/// Feasible and infeasible samples feed separate series: objectives are only
/// meaningful for feasible tours, while infeasible ones are summarized by
/// how many absent edges they use. The spread estimator divides by
/// `n - 1.5`, which has lower mean-squared error than Bessel's `n - 1` for
/// the small run counts used here, so it needs at least two samples in the
/// series to be defined.
pub struct Statistics<'a> {
    name: String,
    best: Option<Solution<'a>>,
    feasible_objectives: Vec<Value>,
    infeasible_edges: Vec<usize>,
    runtimes: Vec<Duration>,
}

impl<'a> Statistics<'a> {
    /// Creates an empty collection labelled `name` (usually the instance
    /// file stem).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            best: None,
            feasible_objectives: Vec::new(),
            infeasible_edges: Vec::new(),
            runtimes: Vec::new(),
        }
    }

    /// Records one finished run.
    pub fn record(&mut self, solution: Solution<'a>, runtime: Duration) {
        self.runtimes.push(runtime);
        if solution.is_feasible() {
            self.feasible_objectives.push(solution.objective());
            if self.best.as_ref().is_none_or(|b| solution < *b) {
                self.best = Some(solution);
            }
        } else {
            self.infeasible_edges.push(solution.infeasible_edges());
        }
    }

    /// The collection's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of recorded runs.
    pub fn samples(&self) -> usize {
        self.runtimes.len()
    }

    /// Number of runs that produced a feasible tour.
    pub fn feasibles(&self) -> usize {
        self.feasible_objectives.len()
    }

    /// The best feasible tour seen, if any run produced one.
    pub fn best_solution(&self) -> Option<&Solution<'a>> {
        self.best.as_ref()
    }

    /// Mean objective over the feasible runs.
    pub fn mean_objective(&self) -> f64 {
        mean(self.feasible_objectives.iter().map(|&v| v as f64))
    }

    /// Spread of the objective over the feasible runs.
    pub fn stdev_objective(&self) -> f64 {
        stdev(self.feasible_objectives.iter().map(|&v| v as f64))
    }

    /// Mean count of absent edges over the infeasible runs.
    pub fn mean_infeasible_edges(&self) -> f64 {
        mean(self.infeasible_edges.iter().map(|&v| v as f64))
    }

    /// Spread of the absent-edge count over the infeasible runs.
    pub fn stdev_infeasible_edges(&self) -> f64 {
        stdev(self.infeasible_edges.iter().map(|&v| v as f64))
    }

    /// Median wall-clock runtime over all runs.
    pub fn median_runtime(&self) -> Duration {
        if self.runtimes.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.runtimes.clone();
        sorted.sort();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2
        }
    }

    /// One semicolon-separated report line:
    /// `name;samples;feasibles;best;mean;stdev;meanInf;stdevInf;medRuntime`.
    /// The best field stays empty when no run was feasible.
    pub fn csv_row(&self) -> String {
        let best = self
            .best
            .as_ref()
            .map(|b| b.objective().to_string())
            .unwrap_or_default();
        format!(
            "{};{};{};{};{};{};{};{};{}",
            self.name,
            self.samples(),
            self.feasibles(),
            best,
            self.mean_objective(),
            self.stdev_objective(),
            self.mean_infeasible_edges(),
            self.stdev_infeasible_edges(),
            self.median_runtime().as_secs_f64(),
        )
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64> + Clone) -> f64 {
    let n = values.len();
    values.sum::<f64>() / n as f64
}

fn stdev(values: impl ExactSizeIterator<Item = f64> + Clone) -> f64 {
    let n = values.len();
    let mean = mean(values.clone());
    let squares: f64 = values.map(|v| (v - mean) * (v - mean)).sum();
    (squares / (n as f64 - 1.5)).sqrt()
}
