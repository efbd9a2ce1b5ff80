//! Built-in construction + local search solver.

use tracing::info;

use super::{RoutingModel, RoutingSolver, SearchParameters};
use crate::constructive::{construct, repair};
use crate::error::SolverError;
use crate::metaheuristic::{improve, SearchBudget, SearchLog};
use crate::models::{Route, Solution, SolveOutcome};

/// Solves a [`RoutingModel`] in two phases.
///
/// 1. The first solution strategy builds a feasible route per vehicle,
///    falling back to the other construction heuristic. If neither places
///    every customer, a capacity repair runs within the search budget; the
///    outcome is [`SolveOutcome::NotFound`] only when that fails too.
/// 2. The local search metaheuristic improves that plan until it reaches a
///    local minimum (greedy descent) or the time / iteration budget runs out.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::models::{ProblemData, ProblemInstance};
/// use u_cvrp::solver::{LocalSearchSolver, RoutingModel, RoutingSolver, SearchParameters};
///
/// let data = ProblemData::with_uniform_capacity(
///     vec![0.0, 0.0, 4.0],
///     vec![0.0, 3.0, 0.0],
///     vec![0, 5, 5],
///     1,
///     10,
///     0,
/// );
/// let instance = ProblemInstance::from_data(&data).unwrap();
/// let model = RoutingModel::from_instance(&instance);
/// let params = SearchParameters::default()
///     .with_time_limit(Duration::from_secs(1))
///     .with_iteration_limit(10);
///
/// let outcome = LocalSearchSolver.solve(&model, &params).unwrap();
/// assert_eq!(outcome.solution().unwrap().objective(), 12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearchSolver;

impl RoutingSolver for LocalSearchSolver {
    fn solve(
        &self,
        model: &RoutingModel<'_>,
        params: &SearchParameters,
    ) -> Result<SolveOutcome, SolverError> {
        model.validate()?;

        let budget = SearchBudget::from_params(params);
        let log = SearchLog::from_params(params);
        let strategy = params.first_solution_strategy.resolve();

        let (initial, source) = match construct(model, strategy) {
            Some(routes) => (routes, strategy.to_string()),
            None => {
                info!("{} could not place every customer, repairing", strategy);
                match repair(model, params.seed, &budget) {
                    Some(routes) => (routes, "CAPACITY_REPAIR".to_string()),
                    None => {
                        info!("No capacity-feasible assignment within the search budget");
                        return Ok(SolveOutcome::NotFound);
                    }
                }
            }
        };
        log.first_solution(source, model.plan_cost(&initial), budget.elapsed());

        let routes = improve(model, initial, params, &budget, &log);
        let objective = model.plan_cost(&routes);
        let routes = routes
            .into_iter()
            .enumerate()
            .map(|(vehicle, visits)| Route::new(vehicle, model.depot(), visits))
            .collect();

        Ok(SolveOutcome::Found(Solution::new(routes, objective)))
    }
}
