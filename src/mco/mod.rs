//! Mouse colony optimization.
//!
//! A population of mice repeatedly constructs tours under the pull of shared
//! pheromone trails; good tours reinforce their edges, evaporation forgets
//! old ones. Construction lives in [`Mouse`], the trail matrix in
//! [`McoState`], and the surrounding population loop in [`Mco`].

mod mouse;
mod state;

pub use mouse::Mouse;
pub use state::McoState;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::local_search::LocalSearch;
use crate::models::{Problem, Solution};
use crate::search::Search;

/// Which solution a mouse's trail reinforcement is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReinforceStrategy {
    /// Reinforce the tour as constructed, before local improvement.
    Darwin,
    /// Reinforce the locally improved tour.
    Lamarck,
}

/// Tuning knobs of the colony loop.
#[derive(Debug, Clone, Copy)]
pub struct McoParams {
    /// Ticks without improvement before the search stops.
    pub ticks: usize,
    /// Tours constructed per tick.
    pub mice: usize,
    /// Per-tick trail decay fraction, in `[0, 1]`.
    pub evaporation: f64,
    /// Extra reinforcement factor for the best tour so far; 0 disables.
    pub elitism: f64,
    /// Pheromone floor.
    pub min_pheromone: f64,
    /// Pheromone ceiling.
    pub max_pheromone: f64,
    /// Exponent on the pheromone term of the incentive.
    pub pheromone_attraction: f64,
    /// Exponent on the balance term of the incentive.
    pub objective_attraction: f64,
    /// Probability of exploiting the best candidate instead of sampling.
    pub intensification: f64,
}

/// The colony search.
///
/// Runs ticks of `mice` constructions each; every constructed tour is run
/// through the improvement search, and the strategy decides whether the raw
/// or the improved tour lays pheromone. A tick that produces a new best
/// solution resets the stagnation countdown.
pub struct Mco {
    params: McoParams,
    mouse: Mouse,
    reinforce_strategy: ReinforceStrategy,
    improvement: LocalSearch,
}

impl Mco {
    /// Creates a colony search.
    ///
    /// # Panics
    ///
    /// Panics when `ticks` or `mice` is 0 or a fraction parameter is outside
    /// its range; the configuration layer rejects these before search setup.
    pub fn new(
        params: McoParams,
        reinforce_strategy: ReinforceStrategy,
        improvement: LocalSearch,
    ) -> Self {
        assert!(params.ticks > 0);
        assert!(params.mice > 0);
        assert!((0.0..=1.0).contains(&params.evaporation));
        assert!((0.0..=1.0).contains(&params.intensification));
        assert!(params.min_pheromone >= 0.0 && params.max_pheromone >= params.min_pheromone);
        let mouse = Mouse::new(
            params.pheromone_attraction,
            params.objective_attraction,
            params.intensification,
        );
        Self {
            params,
            mouse,
            reinforce_strategy,
            improvement,
        }
    }
}

impl Search for Mco {
    fn search<'a, R: Rng + ?Sized>(&mut self, problem: &'a Problem, rng: &mut R) -> Solution<'a> {
        let mut state = McoState::new(
            problem,
            self.params.min_pheromone,
            self.params.max_pheromone,
        );
        let mut best: Option<Solution<'a>> = None;
        let mut countdown = self.params.ticks;

        while countdown > 0 {
            countdown -= 1;

            for _ in 0..self.params.mice {
                let constructed = self.mouse.construct(problem, &state, rng);
                if self.reinforce_strategy == ReinforceStrategy::Darwin {
                    state.reinforce(&constructed, 1.0);
                }
                let improved = self.improvement.improve(constructed, rng);
                if self.reinforce_strategy == ReinforceStrategy::Lamarck {
                    state.reinforce(&improved, 1.0);
                }

                if best.as_ref().is_none_or(|b| improved < *b) {
                    debug!(objective = improved.objective(), "colony found new best");
                    best = Some(improved);
                    countdown = self.params.ticks;
                }
            }

            if self.params.elitism > 0.0 {
                if let Some(elite) = &best {
                    state.reinforce(elite, self.params.elitism);
                }
            }
            state.update();
            state.evaporate(self.params.evaporation);
        }

        best.expect("at least one mouse runs per tick")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::{Neighborhood, Step};
    use crate::models::Edge;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params(ticks: usize, mice: usize) -> McoParams {
        McoParams {
            ticks,
            mice,
            evaporation: 0.1,
            elitism: 1.0,
            min_pheromone: 0.0,
            max_pheromone: 10.0,
            pheromone_attraction: 10.0,
            objective_attraction: 1.0,
            intensification: 0.5,
        }
    }

    fn improvement() -> LocalSearch {
        LocalSearch::new(Step::FirstImprovement(Neighborhood::TwoExchange))
    }

    #[test]
    fn test_basic_run_finds_feasible_solution() {
        // Few edges, but enough for a full tour over the available ones.
        let problem = Problem::from_edges(
            5,
            &[
                Edge::new(0, 1, 1000),
                Edge::new(1, 2, -1000),
                Edge::new(2, 3, 500),
                Edge::new(3, 4, 200),
                Edge::new(4, 0, -200),
                Edge::new(0, 2, -500),
            ],
        )
        .expect("valid instance");

        let mut mco = Mco::new(params(20, 20), ReinforceStrategy::Lamarck, improvement());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let found = mco.search(&problem, &mut rng);
        assert!(found.is_feasible());
    }

    #[test]
    fn test_easy_run_finds_the_single_excellent_tour() {
        // Complete-ish instance with exactly one perfectly balanced tour.
        let mut problem = Problem::new(6, 10000).expect("valid instance");
        for (a, b, value) in [
            (0, 1, 1000),
            (1, 2, -1000),
            (2, 3, 500),
            (3, 4, 200),
            (4, 5, -200),
            (5, 0, -500),
            (0, 2, 1501),
            (1, 3, 701),
            (2, 4, 701),
            (3, 5, 1499),
            (4, 0, 1199),
            (5, 1, 799),
            (0, 3, 702),
            (1, 4, 1502),
            (2, 5, 1202),
        ] {
            problem.add_edge(a, b, value).expect("edge");
        }

        let mut mco = Mco::new(params(30, 30), ReinforceStrategy::Lamarck, improvement());
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut found = mco.search(&problem, &mut rng);
        found.normalize();
        assert_eq!(found.objective(), 0);
        assert_eq!(found.vertices(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_darwin_strategy_also_terminates() {
        let problem = Problem::from_edges(
            5,
            &[
                Edge::new(0, 1, 1000),
                Edge::new(1, 2, -1000),
                Edge::new(2, 3, 500),
                Edge::new(3, 4, 200),
                Edge::new(4, 0, -200),
                Edge::new(0, 2, -500),
            ],
        )
        .expect("valid instance");

        let mut mco = Mco::new(params(10, 10), ReinforceStrategy::Darwin, improvement());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let found = mco.search(&problem, &mut rng);
        assert_eq!(found.len(), 5);
    }
}
