//! Routing solver boundary.
//!
//! - [`RoutingCallbacks`] — arc-cost and demand lookups supplied by the problem
//! - [`RoutingModel`] — callbacks, fleet, depot and [`CapacityDimension`]
//! - [`SearchParameters`] — first solution strategy, metaheuristic, time limit
//! - [`RoutingSolver`] — a blocking, time-bounded solve returning a
//!   [`SolveOutcome`](crate::models::SolveOutcome)
//! - [`LocalSearchSolver`] — the built-in solver

mod callbacks;
mod dimension;
mod local;
mod model;
mod params;

pub use callbacks::{FnCallbacks, RoutingCallbacks};
pub use dimension::CapacityDimension;
pub use local::LocalSearchSolver;
pub use model::{costs_fit, route_cost_with, RoutingModel};
pub(crate) use model::arc_cost_ceiling;
pub use params::{FirstSolutionStrategy, LocalSearchMetaheuristic, ParseStrategyError, SearchParameters};

use crate::error::SolverError;
use crate::models::SolveOutcome;

/// A capacity-constrained route search.
///
/// `solve` blocks until a solution is proven unreachable for the solver's
/// strategy or the parameters' time limit elapses, and returns the best
/// feasible solution found. Running out of budget without any feasible
/// solution yields [`SolveOutcome::NotFound`], not an error.
pub trait RoutingSolver {
    /// Searches for a minimum-cost set of routes for `model`.
    fn solve(
        &self,
        model: &RoutingModel<'_>,
        params: &SearchParameters,
    ) -> Result<SolveOutcome, SolverError>;
}
