//! Run configuration: a problem plus search parameters, loadable from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::demo_data::demo_problem;
use crate::error::CvrpError;
use crate::models::ProblemData;
use crate::solver::SearchParameters;

/// Everything needed for one pipeline run.
///
/// The JSON form is the problem's own fields plus an optional `search`
/// object; missing search fields take their defaults.
///
/// # Examples
///
/// ```
/// use u_cvrp::config::RunConfig;
///
/// let config = RunConfig::from_json(r#"{
///     "x": [0, 0, 4], "y": [0, 3, 0],
///     "demands": [0, 5, 5],
///     "vehicle_capacities": [10],
///     "num_vehicles": 1,
///     "search": { "time_limit_seconds": 2.5, "local_search_metaheuristic": "GREEDY_DESCENT" }
/// }"#).unwrap();
/// assert_eq!(config.problem.depot, 0);
/// assert_eq!(config.search.time_limit.as_millis(), 2500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub problem: ProblemData,
    #[serde(default)]
    pub search: SearchParameters,
}

impl RunConfig {
    /// The built-in demonstration problem with default search parameters.
    pub fn demo() -> Self {
        Self {
            problem: demo_problem(),
            search: SearchParameters::default(),
        }
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CvrpError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self, CvrpError> {
        debug!("Reading problem from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| CvrpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstSolutionStrategy, LocalSearchMetaheuristic};

    #[test]
    fn test_search_defaults_when_absent() {
        let config = RunConfig::from_json(
            r#"{"x": [0, 1], "y": [0, 1], "demands": [0, 1], "vehicle_capacities": [5], "num_vehicles": 1}"#,
        )
        .expect("valid json");
        assert_eq!(config.search, SearchParameters::default());
        assert_eq!(config.problem.node_count(), 2);
    }

    #[test]
    fn test_strategy_names() {
        let config = RunConfig::from_json(
            r#"{"x": [0], "y": [0], "demands": [0], "vehicle_capacities": [5], "num_vehicles": 1, "depot": 0,
                "search": {"first_solution_strategy": "SAVINGS", "local_search_metaheuristic": "SIMULATED_ANNEALING", "seed": 9}}"#,
        )
        .expect("valid json");
        assert_eq!(config.search.first_solution_strategy, FirstSolutionStrategy::Savings);
        assert_eq!(
            config.search.local_search_metaheuristic,
            LocalSearchMetaheuristic::SimulatedAnnealing
        );
        assert_eq!(config.search.seed, 9);
    }

    #[test]
    fn test_round_trip_demo() {
        let demo = RunConfig::demo();
        let text = serde_json::to_string(&demo).expect("serializable");
        assert_eq!(RunConfig::from_json(&text).expect("parses"), demo);
    }

    #[test]
    fn test_parse_and_io_errors() {
        assert!(matches!(RunConfig::from_json("{"), Err(CvrpError::Parse(_))));
        let missing = Path::new("/nonexistent/u-cvrp/problem.json");
        assert!(matches!(RunConfig::from_file(missing), Err(CvrpError::Io { .. })));
    }
}
