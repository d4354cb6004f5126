//! Assembly of the configured search algorithm.

use rand::Rng;

use crate::config::{Algorithm, Configuration, StepFunction};
use crate::construction::{DeterministicConstruction, RandomConstruction};
use crate::local_search::{LocalSearch, Neighborhood, Step};
use crate::mco::{Mco, McoParams};
use crate::models::{Problem, Solution};

use super::{ConstructionSearch, Grasp, Search, StandaloneLocalSearch, Vnd};

/// The configured search, one variant per algorithm on the command line.
///
/// Built once per instance run from a validated [`Configuration`];
/// constructed via [`SearchAlgorithm::from_configuration`].
pub enum SearchAlgorithm {
    /// Farthest-city construction only.
    DeterministicConstruction(ConstructionSearch<DeterministicConstruction>),
    /// Random construction only.
    RandomConstruction(ConstructionSearch<RandomConstruction>),
    /// Deterministic construction plus one descent.
    LocalSearch(StandaloneLocalSearch),
    /// Randomized restarts with improvement.
    Grasp(Grasp<RandomConstruction>),
    /// Variable neighborhood descent.
    Vnd(Vnd<RandomConstruction>),
    /// Mouse colony optimization.
    Mco(Mco),
}

impl SearchAlgorithm {
    /// Assembles the search the configuration asks for.
    pub fn from_configuration(config: &Configuration) -> Self {
        match config.algorithm {
            Algorithm::DetConstruction => SearchAlgorithm::DeterministicConstruction(
                ConstructionSearch::new(DeterministicConstruction::default()),
            ),
            Algorithm::RandConstruction => SearchAlgorithm::RandomConstruction(
                ConstructionSearch::new(RandomConstruction::default()),
            ),
            Algorithm::LocalSearch => SearchAlgorithm::LocalSearch(StandaloneLocalSearch::new(
                DeterministicConstruction::default(),
                LocalSearch::new(build_step(config.step, Neighborhood::TwoExchange)),
            )),
            Algorithm::Grasp => SearchAlgorithm::Grasp(Grasp::new(
                RandomConstruction::default(),
                build_improvement(config),
                config.iterations,
            )),
            Algorithm::Vnd => SearchAlgorithm::Vnd(Vnd::new(
                RandomConstruction::default(),
                build_vnd_steps(config),
            )),
            Algorithm::Mco => SearchAlgorithm::Mco(Mco::new(
                McoParams {
                    ticks: config.iterations,
                    mice: config.popsize,
                    evaporation: config.evaporation,
                    elitism: config.elitism,
                    min_pheromone: config.min_pheromone,
                    max_pheromone: config.max_pheromone,
                    pheromone_attraction: config.pheromone_attraction,
                    objective_attraction: config.objective_attraction,
                    intensification: config.intensification,
                },
                config.reinforce_strategy,
                build_improvement(config),
            )),
        }
    }
}

impl Search for SearchAlgorithm {
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a> {
        match self {
            SearchAlgorithm::DeterministicConstruction(s) => s.search(problem, rng),
            SearchAlgorithm::RandomConstruction(s) => s.search(problem, rng),
            SearchAlgorithm::LocalSearch(s) => s.search(problem, rng),
            SearchAlgorithm::Grasp(s) => s.search(problem, rng),
            SearchAlgorithm::Vnd(s) => s.search(problem, rng),
            SearchAlgorithm::Mco(s) => s.search(problem, rng),
        }
    }
}

fn build_step(step: StepFunction, neighborhood: Neighborhood) -> Step {
    match step {
        StepFunction::Random => Step::Random(neighborhood),
        StepFunction::FirstImprovement => Step::FirstImprovement(neighborhood),
        StepFunction::BestImprovement => Step::BestImprovement(neighborhood),
    }
}

/// The improvement search used inside GRASP and MCO: the configured step
/// over the full 2-exchange neighborhood.
fn build_improvement(config: &Configuration) -> LocalSearch {
    LocalSearch::new(build_step(config.step, Neighborhood::TwoExchange))
}

/// VND levels from cheap to wide.
fn build_vnd_steps(config: &Configuration) -> Vec<Step> {
    vec![
        build_step(config.step, Neighborhood::VertexShift),
        build_step(config.step, Neighborhood::NarrowTwoExchange),
        build_step(config.step, Neighborhood::WideTwoExchange),
    ]
}
