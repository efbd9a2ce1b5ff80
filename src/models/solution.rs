//! Solution, solve outcome and violation types.

use super::Route;

/// A complete assignment of customers to vehicles: one route per vehicle.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Route, Solution};
///
/// let sol = Solution::new(vec![Route::new(0, 0, vec![1, 2]), Route::empty(1, 0)], 12);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 2);
/// assert_eq!(sol.objective(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    routes: Vec<Route>,
    objective: i64,
}

impl Solution {
    /// Creates a solution from per-vehicle routes and the objective value
    /// the solver assigned to them.
    pub fn new(routes: Vec<Route>, objective: i64) -> Self {
        Self { routes, objective }
    }

    /// Returns the routes, indexed by vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (one per vehicle, used or not).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Objective value (total arc cost) reported by the solver.
    pub fn objective(&self) -> i64 {
        self.objective
    }
}

/// Result of a solver invocation.
///
/// Running out of search budget without a feasible assignment is an expected
/// outcome, not an error: callers match on `NotFound` before touching routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A feasible solution.
    Found(Solution),
    /// No feasible assignment within the search budget.
    NotFound,
}

impl SolveOutcome {
    /// Returns the solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Found(solution) => Some(solution),
            SolveOutcome::NotFound => None,
        }
    }

    /// Returns `true` if a solution was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found(_))
    }
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        vehicle_id: usize,
        load: i64,
        capacity: i64,
    },
    /// A customer appears on no route.
    Unserved { node: usize },
    /// A customer appears more than once across all routes.
    VisitedTwice { node: usize },
    /// The depot appears among a route's customer visits.
    DepotVisited { vehicle_id: usize },
    /// A route starts and ends somewhere other than the problem's depot.
    WrongDepot { vehicle_id: usize, depot: usize },
    /// A route visits a node index outside the problem.
    UnknownNode { vehicle_id: usize, node: usize },
    /// A route refers to a vehicle outside the fleet, or a vehicle has
    /// more than one route.
    UnknownVehicle { vehicle_id: usize },
}

impl Violation {
    /// Whether the route cannot even be walked on the problem's nodes.
    pub fn is_structural(&self) -> bool {
        matches!(self, Violation::UnknownNode { .. } | Violation::WrongDepot { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_counts() {
        let sol = Solution::new(
            vec![
                Route::new(0, 0, vec![1]),
                Route::new(1, 0, vec![2, 3]),
                Route::empty(2, 0),
            ],
            130,
        );
        assert_eq!(sol.num_routes(), 3);
    }

    #[test]
    fn test_outcome_accessors() {
        let found = SolveOutcome::Found(Solution::new(vec![Route::empty(0, 0)], 0));
        assert!(found.is_found());
        assert!(found.solution().is_some());
        assert!(!SolveOutcome::NotFound.is_found());
        assert!(SolveOutcome::NotFound.solution().is_none());
    }
}
