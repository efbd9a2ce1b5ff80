//! Clarke-Wright savings construction.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot). It then merges routes by
//! computing the "savings" of combining the end of one route with the start
//! of another:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Routes are merged in decreasing order of savings while the merged load
//! fits the largest vehicle. The merged routes are then matched to vehicles,
//! heaviest route to largest vehicle.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::solver::RoutingModel;

#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: i64,
}

/// Constructs per-vehicle routes using the Clarke-Wright savings algorithm.
///
/// Returns `None` if the merged routes outnumber the vehicles or a route
/// cannot be matched to a vehicle large enough for it.
///
/// # Examples
///
/// ```
/// use u_cvrp::constructive::savings;
/// use u_cvrp::models::{ProblemData, ProblemInstance};
/// use u_cvrp::solver::RoutingModel;
///
/// let data = ProblemData::with_uniform_capacity(
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![0.0; 4],
///     vec![0, 10, 10, 10],
///     1,
///     30,
///     0,
/// );
/// let instance = ProblemInstance::from_data(&data).unwrap();
/// let model = RoutingModel::from_instance(&instance);
///
/// let routes = savings(&model).unwrap();
/// assert_eq!(model.plan_cost(&routes), 6);
/// ```
pub fn savings(model: &RoutingModel<'_>) -> Option<Vec<Vec<usize>>> {
    let n = model.node_count();
    let depot = model.depot();
    let max_capacity = model.max_capacity();
    let customers: Vec<usize> = model.customers().collect();

    if customers.iter().any(|&c| model.demand(c) > max_capacity) {
        return None;
    }

    let mut savings = Vec::with_capacity(customers.len() * customers.len().saturating_sub(1) / 2);
    for (a, &i) in customers.iter().enumerate() {
        for &j in &customers[a + 1..] {
            let value = model.arc_cost(depot, i) + model.arc_cost(j, depot) - model.arc_cost(i, j);
            if value >= 0 {
                savings.push(Saving { i, j, value });
            }
        }
    }

    // Decreasing savings; stable, so ties keep index order
    savings.sort_by(|a, b| b.value.cmp(&a.value));

    // route_of[customer] = route slot, route_members[slot] = customers in order
    let mut route_of = vec![0usize; n];
    let mut route_load = vec![0i64; n];
    let mut route_members: Vec<Vec<usize>> = vec![Vec::new(); n];

    for &c in &customers {
        route_of[c] = c;
        route_load[c] = model.demand(c);
        route_members[c].push(c);
    }

    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];

        if ri == rj {
            continue;
        }

        let combined_load = route_load[ri] + route_load[rj];
        if combined_load > max_capacity {
            continue;
        }

        // i and j must sit at route ends to be joined by an arc
        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        let i_at_start = route_members[ri].first() == Some(&saving.i);
        let j_at_end = route_members[rj].last() == Some(&saving.j);

        let (merge_from, merge_into, reverse_from, reverse_into) = if i_at_end && j_at_start {
            (rj, ri, false, false)
        } else if j_at_end && i_at_start {
            (ri, rj, false, false)
        } else if i_at_end && j_at_end {
            (rj, ri, true, false)
        } else if i_at_start && j_at_start {
            (rj, ri, false, true)
        } else {
            continue;
        };

        let mut from_members = std::mem::take(&mut route_members[merge_from]);
        if reverse_from {
            from_members.reverse();
        }
        if reverse_into {
            route_members[merge_into].reverse();
        }

        route_members[merge_into].append(&mut from_members);
        route_load[merge_into] = combined_load;
        route_load[merge_from] = 0;

        for &cid in &route_members[merge_into] {
            route_of[cid] = merge_into;
        }
    }

    let mut merged: Vec<(i64, Vec<usize>)> = route_members
        .into_iter()
        .zip(route_load)
        .filter(|(members, _)| !members.is_empty())
        .map(|(members, load)| (load, members))
        .collect();

    assign_to_vehicles(model, &mut merged)
}

/// Matches routes to vehicles, heaviest route to largest vehicle.
fn assign_to_vehicles(
    model: &RoutingModel<'_>,
    merged: &mut [(i64, Vec<usize>)],
) -> Option<Vec<Vec<usize>>> {
    if merged.len() > model.vehicle_count() {
        return None;
    }

    merged.sort_by(|a, b| b.0.cmp(&a.0));
    let mut vehicles: Vec<usize> = (0..model.vehicle_count()).collect();
    vehicles.sort_by_key(|&v| std::cmp::Reverse(model.capacity(v)));

    let mut routes = vec![Vec::new(); model.vehicle_count()];
    for ((load, members), &vehicle) in merged.iter_mut().zip(&vehicles) {
        if !model.fits(vehicle, *load) {
            return None;
        }
        routes[vehicle] = std::mem::take(members);
    }
    Some(routes)
}
