//! Path cheapest arc construction.
//!
//! Builds routes greedily, one vehicle at a time: starting from the depot,
//! always extend the path with the cheapest arc to an unvisited customer whose
//! demand still fits. When nothing fits, move on to the next vehicle.
//!
//! # Complexity
//!
//! O(n²) arc evaluations where n = number of customers.

use crate::solver::RoutingModel;

/// Constructs per-vehicle routes using the path cheapest arc heuristic.
///
/// Returns one customer sequence per vehicle (possibly empty), or `None` if
/// some customer could not be placed on any vehicle. Ties between equally
/// cheap arcs go to the lower node index.
///
/// # Examples
///
/// ```
/// use u_cvrp::constructive::path_cheapest_arc;
/// use u_cvrp::models::{ProblemData, ProblemInstance};
/// use u_cvrp::solver::RoutingModel;
///
/// let data = ProblemData::with_uniform_capacity(
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![0.0; 4],
///     vec![0, 10, 10, 10],
///     2,
///     20,
///     0,
/// );
/// let instance = ProblemInstance::from_data(&data).unwrap();
/// let model = RoutingModel::from_instance(&instance);
///
/// let routes = path_cheapest_arc(&model).unwrap();
/// assert_eq!(routes, vec![vec![1, 2], vec![3]]);
/// ```
pub fn path_cheapest_arc(model: &RoutingModel<'_>) -> Option<Vec<Vec<usize>>> {
    let n = model.node_count();
    let depot = model.depot();

    let mut visited = vec![false; n];
    visited[depot] = true;
    let mut remaining = model.customer_count();

    let mut routes = vec![Vec::new(); model.vehicle_count()];

    for (vehicle, route) in routes.iter_mut().enumerate() {
        if remaining == 0 {
            break;
        }
        let mut current = depot;
        let mut load = 0;

        loop {
            // Cheapest arc to an unvisited customer that fits
            let mut best: Option<(usize, i64)> = None;
            for next in 0..n {
                if visited[next] || !model.fits(vehicle, load + model.demand(next)) {
                    continue;
                }
                let cost = model.arc_cost(current, next);
                if best.is_none_or(|(_, c)| cost < c) {
                    best = Some((next, cost));
                }
            }

            match best {
                Some((next, _)) => {
                    visited[next] = true;
                    remaining -= 1;
                    route.push(next);
                    load += model.demand(next);
                    current = next;
                }
                None => break,
            }
        }
    }

    (remaining == 0).then_some(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;

    #[test]
    fn test_pca_all_on_one_route() {
        let inst = instance(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], &[0, 10, 10, 10], &[100]);
        let model = RoutingModel::from_instance(&inst);
        let routes = path_cheapest_arc(&model).expect("feasible");
        assert_eq!(routes, vec![vec![1, 2, 3]]);
        assert_eq!(model.plan_cost(&routes), 6);
    }

    #[test]
    fn test_pca_chooses_cheapest() {
        let inst = instance(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)], &[0, 5, 5], &[100]);
        let model = RoutingModel::from_instance(&inst);
        assert_eq!(path_cheapest_arc(&model), Some(vec![vec![2, 1]]));
    }

    #[test]
    fn test_pca_skips_customers_that_do_not_fit() {
        // 0 → 1 (load 8); 2 would overflow, 3 fits.
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            &[0, 8, 5, 2],
            &[10, 10],
        );
        let model = RoutingModel::from_instance(&inst);
        assert_eq!(path_cheapest_arc(&model), Some(vec![vec![1, 3], vec![2]]));
    }

    #[test]
    fn test_pca_insufficient_fleet() {
        let inst = instance(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)], &[0, 10, 5], &[10]);
        let model = RoutingModel::from_instance(&inst);
        assert!(path_cheapest_arc(&model).is_none());
    }

    #[test]
    fn test_pca_heterogeneous_fleet_uses_vehicle_capacity() {
        let inst = instance(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], &[0, 6, 6], &[5, 12]);
        let model = RoutingModel::from_instance(&inst);
        assert_eq!(path_cheapest_arc(&model), Some(vec![vec![], vec![1, 2]]));
    }

    #[test]
    fn test_pca_depot_only() {
        let inst = instance(&[(0.0, 0.0)], &[0], &[10, 10]);
        let model = RoutingModel::from_instance(&inst);
        assert_eq!(path_cheapest_arc(&model), Some(vec![vec![], vec![]]));
    }
}
