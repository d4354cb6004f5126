//! The experiment harness: load instances, run searches, write results.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::Configuration;
use crate::error::Result;
use crate::models::Problem;
use crate::search::{Search, SearchAlgorithm};
use crate::statistics::Statistics;

/// Reads and parses one instance file.
pub fn read_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path)?;
    Problem::from_text(&text)
}

/// Executes the configured experiment.
///
/// For every input file: parse the instance, perform `runs` independent
/// searches, write the best tour to a `.solution` file next to the input,
/// and append one statistics row to the dump CSV when configured.
pub fn run(config: &Configuration) -> Result<()> {
    config.validate()?;
    for path in &config.input_files {
        if !path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("input file not found: {}", path.display()),
            )
            .into());
        }
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    for path in &config.input_files {
        let problem = read_problem(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!(
            instance = name.as_str(),
            vertices = problem.vertices(),
            "solving instance"
        );

        let statistics = run_instance(config, &name, &problem, &mut rng);

        let best = statistics
            .best_solution()
            .map(|solution| solution.representation())
            .unwrap_or_default();
        fs::write(path.with_extension("solution"), format!("{best}\n"))?;

        if let Some(dump) = &config.dump {
            let mut csv = OpenOptions::new().create(true).append(true).open(dump)?;
            writeln!(csv, "{}", statistics.csv_row())?;
        }
    }
    Ok(())
}

/// Runs the configured search `runs` times on one instance.
fn run_instance<'a>(
    config: &Configuration,
    name: &str,
    problem: &'a Problem,
    rng: &mut ChaCha8Rng,
) -> Statistics<'a> {
    let mut statistics = Statistics::new(name);
    let mut search = SearchAlgorithm::from_configuration(config);

    for run in 0..config.runs {
        let started = Instant::now();
        let mut solution = search.search(problem, rng);
        let elapsed = started.elapsed();
        solution.normalize();
        info!(
            instance = name,
            run,
            objective = solution.objective(),
            feasible = solution.is_feasible(),
            ?elapsed,
            "run finished"
        );
        statistics.record(solution, elapsed);
    }
    statistics
}
