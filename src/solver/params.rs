//! Search parameters.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Heuristic that builds the initial feasible route set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FirstSolutionStrategy {
    /// Let the solver pick; resolves to [`PathCheapestArc`](Self::PathCheapestArc).
    Automatic,
    /// Extend each vehicle's path with the cheapest feasible arc.
    #[default]
    PathCheapestArc,
    /// Clarke-Wright savings merges.
    Savings,
}

impl FirstSolutionStrategy {
    /// Replaces [`Automatic`](Self::Automatic) by the concrete strategy it
    /// stands for.
    pub fn resolve(self) -> Self {
        match self {
            Self::Automatic => Self::PathCheapestArc,
            other => other,
        }
    }
}

/// Strategy used to escape local minima during improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocalSearchMetaheuristic {
    /// Let the solver pick; resolves to [`GreedyDescent`](Self::GreedyDescent).
    Automatic,
    /// Accept improving moves until a local minimum is reached.
    GreedyDescent,
    /// Penalize features of local minima to reshape the cost landscape.
    GuidedLocalSearch,
    /// Accept worsening moves with a temperature-dependent probability.
    SimulatedAnnealing,
    /// Forbid recently moved customers from moving again.
    #[default]
    TabuSearch,
    /// Forbid moves that return to a recently seen plan cost.
    ObjectiveTabuSearch,
}

impl LocalSearchMetaheuristic {
    /// Replaces [`Automatic`](Self::Automatic) by the concrete metaheuristic it
    /// stands for.
    pub fn resolve(self) -> Self {
        match self {
            Self::Automatic => Self::GreedyDescent,
            other => other,
        }
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`; expected one of: {expected}")]
pub struct ParseStrategyError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

impl FromStr for FirstSolutionStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "AUTOMATIC" => Ok(Self::Automatic),
            "PATH_CHEAPEST_ARC" => Ok(Self::PathCheapestArc),
            "SAVINGS" => Ok(Self::Savings),
            _ => Err(ParseStrategyError {
                kind: "first solution strategy",
                value: s.to_string(),
                expected: "AUTOMATIC, PATH_CHEAPEST_ARC, SAVINGS",
            }),
        }
    }
}

impl FromStr for LocalSearchMetaheuristic {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "AUTOMATIC" => Ok(Self::Automatic),
            "GREEDY_DESCENT" => Ok(Self::GreedyDescent),
            "GUIDED_LOCAL_SEARCH" => Ok(Self::GuidedLocalSearch),
            "SIMULATED_ANNEALING" => Ok(Self::SimulatedAnnealing),
            "TABU_SEARCH" => Ok(Self::TabuSearch),
            "OBJECTIVE_TABU_SEARCH" => Ok(Self::ObjectiveTabuSearch),
            _ => Err(ParseStrategyError {
                kind: "local search metaheuristic",
                value: s.to_string(),
                expected: "AUTOMATIC, GREEDY_DESCENT, GUIDED_LOCAL_SEARCH, SIMULATED_ANNEALING, TABU_SEARCH, OBJECTIVE_TABU_SEARCH",
            }),
        }
    }
}

impl fmt::Display for FirstSolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Automatic => "AUTOMATIC",
            Self::PathCheapestArc => "PATH_CHEAPEST_ARC",
            Self::Savings => "SAVINGS",
        })
    }
}

impl fmt::Display for LocalSearchMetaheuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Automatic => "AUTOMATIC",
            Self::GreedyDescent => "GREEDY_DESCENT",
            Self::GuidedLocalSearch => "GUIDED_LOCAL_SEARCH",
            Self::SimulatedAnnealing => "SIMULATED_ANNEALING",
            Self::TabuSearch => "TABU_SEARCH",
            Self::ObjectiveTabuSearch => "OBJECTIVE_TABU_SEARCH",
        })
    }
}

/// Parameters for one solver invocation.
///
/// Defaults: path cheapest arc, tabu search, a 30 second time limit and
/// search logging on.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::solver::{LocalSearchMetaheuristic, SearchParameters};
///
/// let params = SearchParameters::default()
///     .with_metaheuristic(LocalSearchMetaheuristic::GuidedLocalSearch)
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(params.time_limit, Duration::from_secs(5));
/// assert!(params.log_search);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    pub first_solution_strategy: FirstSolutionStrategy,
    pub local_search_metaheuristic: LocalSearchMetaheuristic,
    /// Wall-clock budget; the best solution found so far is returned when it
    /// runs out.
    #[serde(rename = "time_limit_seconds", with = "seconds")]
    pub time_limit: Duration,
    /// Log construction and each new best solution at `info` level.
    pub log_search: bool,
    /// Optional cap on improvement iterations, checked alongside the deadline.
    pub iteration_limit: Option<u64>,
    /// Iterations a moved customer stays tabu.
    pub tabu_tenure: u64,
    /// Scales the guided local search penalty weight.
    pub guided_local_search_lambda_coefficient: f64,
    /// Seed for randomized metaheuristics.
    pub seed: u64,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::PathCheapestArc,
            local_search_metaheuristic: LocalSearchMetaheuristic::TabuSearch,
            time_limit: Duration::from_secs(30),
            log_search: true,
            iteration_limit: None,
            tabu_tenure: 7,
            guided_local_search_lambda_coefficient: 0.1,
            seed: 0,
        }
    }
}

impl SearchParameters {
    /// Sets the first solution strategy.
    pub fn with_first_solution_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    /// Sets the local search metaheuristic.
    pub fn with_metaheuristic(mut self, metaheuristic: LocalSearchMetaheuristic) -> Self {
        self.local_search_metaheuristic = metaheuristic;
        self
    }

    /// Sets the wall-clock time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Caps the number of improvement iterations.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Turns search progress logging on or off.
    pub fn with_log_search(mut self, log_search: bool) -> Self {
        self.log_search = log_search;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// (De)serializes a [`Duration`] as fractional seconds.
mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_settings() {
        let p = SearchParameters::default();
        assert_eq!(p.first_solution_strategy, FirstSolutionStrategy::PathCheapestArc);
        assert_eq!(p.local_search_metaheuristic, LocalSearchMetaheuristic::TabuSearch);
        assert_eq!(p.time_limit, Duration::from_secs(30));
        assert!(p.log_search);
        assert!(p.iteration_limit.is_none());
    }

    #[test]
    fn test_automatic_resolution() {
        assert_eq!(
            FirstSolutionStrategy::Automatic.resolve(),
            FirstSolutionStrategy::PathCheapestArc
        );
        assert_eq!(
            LocalSearchMetaheuristic::Automatic.resolve(),
            LocalSearchMetaheuristic::GreedyDescent
        );
        assert_eq!(
            LocalSearchMetaheuristic::TabuSearch.resolve(),
            LocalSearchMetaheuristic::TabuSearch
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "path-cheapest-arc".parse::<FirstSolutionStrategy>(),
            Ok(FirstSolutionStrategy::PathCheapestArc)
        );
        assert_eq!(
            "GUIDED_LOCAL_SEARCH".parse::<LocalSearchMetaheuristic>(),
            Ok(LocalSearchMetaheuristic::GuidedLocalSearch)
        );
        assert_eq!(
            "objective_tabu_search".parse::<LocalSearchMetaheuristic>(),
            Ok(LocalSearchMetaheuristic::ObjectiveTabuSearch)
        );
        assert!("tabu".parse::<LocalSearchMetaheuristic>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for m in [
            LocalSearchMetaheuristic::Automatic,
            LocalSearchMetaheuristic::GreedyDescent,
            LocalSearchMetaheuristic::GuidedLocalSearch,
            LocalSearchMetaheuristic::SimulatedAnnealing,
            LocalSearchMetaheuristic::TabuSearch,
            LocalSearchMetaheuristic::ObjectiveTabuSearch,
        ] {
            assert_eq!(m.to_string().parse::<LocalSearchMetaheuristic>(), Ok(m));
        }
    }

    #[test]
    fn test_json_partial_override() {
        let p: SearchParameters = serde_json::from_str(
            r#"{"local_search_metaheuristic": "SIMULATED_ANNEALING", "time_limit_seconds": 1.5}"#,
        )
        .expect("valid json");
        assert_eq!(p.local_search_metaheuristic, LocalSearchMetaheuristic::SimulatedAnnealing);
        assert_eq!(p.time_limit, Duration::from_millis(1500));
        assert_eq!(p.first_solution_strategy, FirstSolutionStrategy::PathCheapestArc);
        assert_eq!(p.tabu_tenure, 7);
    }

    #[test]
    fn test_negative_time_limit_rejected() {
        let parsed = serde_json::from_str::<SearchParameters>(r#"{"time_limit_seconds": -1}"#);
        assert!(parsed.is_err());
    }
}
