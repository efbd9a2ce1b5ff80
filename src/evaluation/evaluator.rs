//! Solution evaluator that computes load, distance, and feasibility.

use crate::models::{ProblemInstance, Route, Solution, Violation};

/// Evaluates solutions against a problem instance.
///
/// Independent of any solver: it recomputes loads and distances from the
/// instance's demands and distance matrix and lists every constraint the
/// solution breaks.
///
/// # Examples
///
/// ```
/// use u_cvrp::evaluation::SolutionEvaluator;
/// use u_cvrp::models::{ProblemData, ProblemInstance, Route, Solution, Violation};
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
/// let evaluator = SolutionEvaluator::new(&instance);
///
/// let solution = Solution::new(vec![Route::new(0, 0, vec![1, 2])], 12);
/// assert_eq!(evaluator.total_distance(&solution), 12);
/// assert!(evaluator.is_feasible(&solution));
///
/// let partial = Solution::new(vec![Route::new(0, 0, vec![2])], 8);
/// assert_eq!(evaluator.check(&partial), vec![Violation::Unserved { node: 1 }]);
/// ```
pub struct SolutionEvaluator<'a> {
    instance: &'a ProblemInstance,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        Self { instance }
    }

    /// Total demand of the route's visits. Unknown nodes count as zero.
    pub fn route_load(&self, route: &Route) -> i64 {
        route
            .visits()
            .iter()
            .filter_map(|&node| self.instance.nodes().get(node))
            .map(|node| node.demand())
            .sum()
    }

    /// Length of the route from depot back to depot.
    ///
    /// Arcs touching an unknown node are skipped.
    pub fn route_distance(&self, route: &Route) -> i64 {
        let n = self.instance.node_count();
        route
            .arcs()
            .filter(|&(a, b)| a < n && b < n)
            .map(|(a, b)| self.instance.distances().get(a, b))
            .sum()
    }

    /// Sum of all route lengths.
    pub fn total_distance(&self, solution: &Solution) -> i64 {
        solution.routes().iter().map(|r| self.route_distance(r)).sum()
    }

    /// Lists every constraint violation, route by route, then unserved
    /// customers in index order.
    pub fn check(&self, solution: &Solution) -> Vec<Violation> {
        let n = self.instance.node_count();
        let depot = self.instance.depot();
        let vehicles = self.instance.vehicles();

        let mut violations = Vec::new();
        let mut visits = vec![0usize; n];
        let mut route_count = vec![0usize; vehicles.len()];

        for route in solution.routes() {
            let vehicle_id = route.vehicle_id();
            match route_count.get_mut(vehicle_id) {
                Some(count) if *count == 0 => *count += 1,
                _ => violations.push(Violation::UnknownVehicle { vehicle_id }),
            }
            if route.depot() != depot {
                violations.push(Violation::WrongDepot {
                    vehicle_id,
                    depot: route.depot(),
                });
            }

            for &node in route.visits() {
                if node >= n {
                    violations.push(Violation::UnknownNode { vehicle_id, node });
                } else if node == depot {
                    violations.push(Violation::DepotVisited { vehicle_id });
                } else {
                    visits[node] += 1;
                    if visits[node] == 2 {
                        violations.push(Violation::VisitedTwice { node });
                    }
                }
            }

            if let Some(vehicle) = vehicles.get(vehicle_id) {
                let load = self.route_load(route);
                if !vehicle.fits(load) {
                    violations.push(Violation::CapacityExceeded {
                        vehicle_id,
                        load,
                        capacity: vehicle.capacity(),
                    });
                }
            }
        }

        violations.extend(
            (0..n)
                .filter(|&node| node != depot && visits[node] == 0)
                .map(|node| Violation::Unserved { node }),
        );
        violations
    }

    /// Returns `true` if [`check`](Self::check) finds nothing.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.check(solution).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;

    fn square() -> ProblemInstance {
        instance(
            &[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0), (-3.0, 4.0)],
            &[0, 10, 20, 5],
            &[25, 25],
        )
    }

    #[test]
    fn test_feasible_solution() {
        let inst = square();
        let eval = SolutionEvaluator::new(&inst);
        let sol = Solution::new(vec![Route::new(0, 0, vec![1, 3]), Route::new(1, 0, vec![2])], 0);
        assert!(eval.is_feasible(&sol));
        assert_eq!(eval.route_load(&sol.routes()[0]), 15);
        // 0→1→3→0 = 5 + 6 + 5, 0→2→0 = 10 + 10
        assert_eq!(eval.total_distance(&sol), 36);
    }

    #[test]
    fn test_capacity_violation() {
        let inst = square();
        let eval = SolutionEvaluator::new(&inst);
        let sol = Solution::new(vec![Route::new(0, 0, vec![1, 2]), Route::new(1, 0, vec![3])], 0);
        assert_eq!(
            eval.check(&sol),
            vec![Violation::CapacityExceeded {
                vehicle_id: 0,
                load: 30,
                capacity: 25
            }]
        );
    }

    #[test]
    fn test_structural_violations() {
        let inst = square();
        let eval = SolutionEvaluator::new(&inst);
        let sol = Solution::new(
            vec![
                Route::new(0, 0, vec![1, 0, 9]),
                Route::new(0, 0, vec![1]),
                Route::new(4, 2, vec![]),
            ],
            0,
        );
        let violations = eval.check(&sol);
        assert_eq!(
            violations,
            vec![
                Violation::DepotVisited { vehicle_id: 0 },
                Violation::UnknownNode { vehicle_id: 0, node: 9 },
                Violation::UnknownVehicle { vehicle_id: 0 },
                Violation::VisitedTwice { node: 1 },
                Violation::UnknownVehicle { vehicle_id: 4 },
                Violation::WrongDepot { vehicle_id: 4, depot: 2 },
                Violation::Unserved { node: 2 },
                Violation::Unserved { node: 3 },
            ]
        );
    }
}
