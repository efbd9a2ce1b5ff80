//! End-to-end run: build, solve, report, plot.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::CvrpError;
use crate::evaluation::SolutionEvaluator;
use crate::models::{ProblemInstance, SolveOutcome, Violation};
use crate::report::{render_svg, route_traces, SolutionReport};
use crate::solver::{RoutingModel, RoutingSolver};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// `None` when the solver found no feasible solution.
    pub report: Option<SolutionReport>,
    /// Where the chart was written, if one was requested and a solution exists.
    pub plot: Option<PathBuf>,
}

impl RunSummary {
    pub fn is_found(&self) -> bool {
        self.report.is_some()
    }
}

/// Runs the full pipeline for `config` with `solver`.
///
/// Writes the route report to `out`, or `No solution found.` when the solver
/// comes back empty-handed, and renders the route chart to `plot_path` when
/// given. Validation happens before the solver is called.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::config::RunConfig;
/// use u_cvrp::models::ProblemData;
/// use u_cvrp::pipeline;
/// use u_cvrp::solver::{LocalSearchSolver, SearchParameters};
///
/// let config = RunConfig {
///     problem: ProblemData::with_uniform_capacity(
///         vec![0.0, 0.0, 4.0],
///         vec![0.0, 3.0, 0.0],
///         vec![0, 5, 5],
///         1,
///         10,
///         0,
///     ),
///     search: SearchParameters::default()
///         .with_time_limit(Duration::from_secs(1))
///         .with_iteration_limit(10),
/// };
///
/// let mut out = Vec::new();
/// let summary = pipeline::run(&config, &LocalSearchSolver, &mut out, None).unwrap();
/// assert_eq!(summary.report.unwrap().total_load(), 10);
/// assert!(String::from_utf8(out).unwrap().contains("Total distance of all routes: 12m"));
/// ```
pub fn run<S, W>(
    config: &RunConfig,
    solver: &S,
    out: &mut W,
    plot_path: Option<&Path>,
) -> Result<RunSummary, CvrpError>
where
    S: RoutingSolver + ?Sized,
    W: Write,
{
    let instance = ProblemInstance::from_data(&config.problem)?;
    info!(
        "Solving {} nodes with {} vehicles (demand {}, capacity {})",
        instance.node_count(),
        instance.vehicle_count(),
        instance.total_demand(),
        instance.total_capacity()
    );

    let model = RoutingModel::from_instance(&instance);
    let solution = match solver.solve(&model, &config.search)? {
        SolveOutcome::Found(solution) => solution,
        SolveOutcome::NotFound => {
            writeln!(out, "No solution found.").map_err(CvrpError::Write)?;
            return Ok(RunSummary {
                report: None,
                plot: None,
            });
        }
    };

    let violations = SolutionEvaluator::new(&instance).check(&solution);
    if violations.iter().any(Violation::is_structural) {
        return Err(CvrpError::InvalidSolution(violations));
    }
    if !violations.is_empty() {
        warn!("Solver returned an infeasible solution: {:?}", violations);
    }

    let report = SolutionReport::new(&instance, &solution);
    writeln!(out, "{report}").map_err(CvrpError::Write)?;

    let plot = match plot_path {
        Some(path) => {
            render_svg(&route_traces(&instance, &solution)?, path)?;
            info!("Route chart written to {}", path.display());
            Some(path.to_path_buf())
        }
        None => None,
    };

    Ok(RunSummary {
        report: Some(report),
        plot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::models::{ProblemData, Route, Solution};
    use crate::solver::{LocalSearchSolver, SearchParameters};
    use std::time::Duration;

    fn config(demands: Vec<i64>, capacity: i64) -> RunConfig {
        RunConfig {
            problem: ProblemData::with_uniform_capacity(
                vec![0.0, 0.0, 4.0],
                vec![0.0, 3.0, 0.0],
                demands,
                1,
                capacity,
                0,
            ),
            search: SearchParameters::default()
                .with_time_limit(Duration::from_secs(2))
                .with_iteration_limit(20)
                .with_log_search(false),
        }
    }

    /// Always returns the given outcome.
    struct Fixed(Result<SolveOutcome, SolverError>);

    impl RoutingSolver for Fixed {
        fn solve(
            &self,
            _: &RoutingModel<'_>,
            _: &SearchParameters,
        ) -> Result<SolveOutcome, SolverError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_triangle_report() {
        let mut out = Vec::new();
        let summary = run(&config(vec![0, 5, 5], 10), &LocalSearchSolver, &mut out, None)
            .expect("runs");
        let text = String::from_utf8(out).expect("utf8");

        assert!(summary.is_found());
        assert!(summary.plot.is_none());
        assert!(text.starts_with("Route for vehicle 0:\n 0 Load(0) -> "));
        assert!(text.contains("Distance of the route: 12m\nLoad of the route: 10\n\n"));
        assert!(text.ends_with("Total distance of all routes: 12m\nTotal load of all routes: 10\n"));
    }

    #[test]
    fn test_not_found_skips_report() {
        let mut out = Vec::new();
        let plot = std::env::temp_dir().join(format!("u-cvrp-notfound-{}.svg", std::process::id()));
        let summary = run(&config(vec![0, 10, 5], 10), &LocalSearchSolver, &mut out, Some(&plot))
            .expect("runs");

        assert!(!summary.is_found());
        assert_eq!(String::from_utf8(out).expect("utf8"), "No solution found.\n");
        assert!(!plot.exists());
    }

    #[test]
    fn test_invalid_configuration_never_reaches_solver() {
        let mut out = Vec::new();
        let err = run(&config(vec![0, 5], 10), &Fixed(Ok(SolveOutcome::NotFound)), &mut out, None)
            .unwrap_err();
        assert!(matches!(err, CvrpError::InvalidConfiguration(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_solver_error_propagates() {
        let mut out = Vec::new();
        let solver = Fixed(Err(SolverError::NoVehicles));
        let err = run(&config(vec![0, 5, 5], 10), &solver, &mut out, None).unwrap_err();
        assert!(matches!(err, CvrpError::Solver(SolverError::NoVehicles)));
    }

    #[test]
    fn test_unknown_node_rejected_before_report() {
        let solver = Fixed(Ok(SolveOutcome::Found(Solution::new(
            vec![Route::new(0, 0, vec![1, 2, 7])],
            12,
        ))));
        let plot = std::env::temp_dir().join(format!("u-cvrp-unknown-{}.svg", std::process::id()));
        let mut out = Vec::new();
        let err = run(&config(vec![0, 5, 5], 10), &solver, &mut out, Some(&plot)).unwrap_err();

        assert!(matches!(
            err,
            CvrpError::InvalidSolution(ref v) if v.contains(&Violation::UnknownNode { vehicle_id: 0, node: 7 })
        ));
        assert!(out.is_empty());
        assert!(!plot.exists());
    }

    #[test]
    fn test_over_capacity_solution_still_reported() {
        let solver = Fixed(Ok(SolveOutcome::Found(Solution::new(
            vec![Route::new(0, 0, vec![1, 2])],
            12,
        ))));
        let mut out = Vec::new();
        let summary = run(&config(vec![0, 5, 5], 8), &solver, &mut out, None).expect("runs");
        assert_eq!(summary.report.map(|r| r.total_load()), Some(10));
    }

    #[test]
    fn test_plot_written_for_found_solution() {
        let solver = Fixed(Ok(SolveOutcome::Found(Solution::new(
            vec![Route::new(0, 0, vec![1, 2])],
            12,
        ))));
        let plot = std::env::temp_dir().join(format!("u-cvrp-pipeline-{}.svg", std::process::id()));
        let mut out = Vec::new();
        let summary = run(&config(vec![0, 5, 5], 10), &solver, &mut out, Some(&plot)).expect("runs");

        assert_eq!(summary.plot.as_deref(), Some(plot.as_path()));
        assert!(plot.exists());
        let _ = std::fs::remove_file(&plot);
    }
}
