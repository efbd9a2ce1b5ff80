//! Local-search metaheuristics over per-vehicle customer sequences.
//!
//! - [`greedy_descent`] — Best-improvement descent to a local minimum
//! - [`tabu_search`] — Best admissible move with short-term memory on moved customers
//! - [`objective_tabu_search`] — Best admissible move with short-term memory on plan costs
//! - [`simulated_annealing`] — Random moves under Metropolis acceptance
//! - [`guided_local_search`] — Descent on an arc-penalized cost
//!
//! All of them start from a feasible route set, only ever apply
//! capacity-feasible moves, stop when the [`SearchBudget`] runs out and
//! return the cheapest route set seen.

mod annealing;
mod budget;
mod greedy;
mod guided;
mod tabu;

pub use annealing::simulated_annealing;
pub use budget::{SearchBudget, SearchLog};
pub use greedy::greedy_descent;
pub use guided::guided_local_search;
pub use tabu::{objective_tabu_search, tabu_search};

use crate::solver::{LocalSearchMetaheuristic, RoutingModel, SearchParameters};

/// Improves `routes` with the metaheuristic selected in `params`.
pub fn improve(
    model: &RoutingModel<'_>,
    routes: Vec<Vec<usize>>,
    params: &SearchParameters,
    budget: &SearchBudget,
    log: &SearchLog,
) -> Vec<Vec<usize>> {
    match params.local_search_metaheuristic.resolve() {
        LocalSearchMetaheuristic::TabuSearch => {
            tabu_search(model, routes, params.tabu_tenure, budget, log)
        }
        LocalSearchMetaheuristic::ObjectiveTabuSearch => {
            objective_tabu_search(model, routes, params.tabu_tenure, budget, log)
        }
        LocalSearchMetaheuristic::SimulatedAnnealing => {
            simulated_annealing(model, routes, params.seed, budget, log)
        }
        LocalSearchMetaheuristic::GuidedLocalSearch => guided_local_search(
            model,
            routes,
            params.guided_local_search_lambda_coefficient,
            budget,
            log,
        ),
        _ => greedy_descent(model, routes, budget, log),
    }
}

/// Cheapest route set seen so far.
#[derive(Debug, Clone)]
struct Incumbent {
    routes: Vec<Vec<usize>>,
    cost: i64,
}

impl Incumbent {
    fn new(routes: &[Vec<usize>], cost: i64) -> Self {
        Self {
            routes: routes.to_vec(),
            cost,
        }
    }

    /// Keeps `routes` if strictly cheaper. Returns whether it did.
    fn offer(&mut self, routes: &[Vec<usize>], cost: i64) -> bool {
        if cost < self.cost {
            self.routes = routes.to_vec();
            self.cost = cost;
            true
        } else {
            false
        }
    }
}
