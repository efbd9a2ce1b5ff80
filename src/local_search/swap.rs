//! Inter-route customer swap.
//!
//! Exchanges one customer of route A with one customer of route B in place.
//! Each route sees a single-node replacement, so the delta is the sum of two
//! independent replacement costs. O(n² × R²) per pass.

use super::{at, before, Candidate, Move};
use crate::solver::RoutingModel;

/// Emits every capacity-feasible swap between two different routes.
pub fn swap_moves<C>(
    routes: &[Vec<usize>],
    loads: &[i64],
    model: &RoutingModel<'_>,
    cost: &C,
    out: &mut Vec<Candidate>,
) where
    C: Fn(usize, usize) -> i64,
{
    let depot = model.depot();

    for (route_a, ra) in routes.iter().enumerate() {
        for (route_b, rb) in routes.iter().enumerate().skip(route_a + 1) {
            for (pos_a, &x) in ra.iter().enumerate() {
                for (pos_b, &y) in rb.iter().enumerate() {
                    let shift = model.demand(y) - model.demand(x);
                    if !model.fits(route_a, loads[route_a] + shift)
                        || !model.fits(route_b, loads[route_b] - shift)
                    {
                        continue;
                    }
                    let delta = replace_delta(ra, pos_a, y, depot, cost)
                        + replace_delta(rb, pos_b, x, depot, cost);
                    out.push(Candidate {
                        mv: Move::Swap {
                            route_a,
                            pos_a,
                            route_b,
                            pos_b,
                        },
                        delta,
                    });
                }
            }
        }
    }
}

/// Cost change of putting `node` at `route[pos]` in place of its occupant.
fn replace_delta<C>(route: &[usize], pos: usize, node: usize, depot: usize, cost: &C) -> i64
where
    C: Fn(usize, usize) -> i64,
{
    let prev = before(route, pos, depot);
    let next = at(route, pos + 1, depot);
    let old = route[pos];
    cost(prev, node) + cost(node, next) - cost(prev, old) - cost(old, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;

    #[test]
    fn test_swap_uncrosses_routes() {
        // Customers 1 and 2 are on the right, 3 and 4 on the left, but each
        // route serves one of each side.
        let inst = instance(
            &[(0.0, 0.0), (10.0, 1.0), (10.0, -1.0), (-10.0, 1.0), (-10.0, -1.0)],
            &[0, 1, 1, 1, 1],
            &[2, 2],
        );
        let model = RoutingModel::from_instance(&inst);
        let routes = vec![vec![1, 3], vec![2, 4]];
        let loads = vec![2, 2];
        let mut out = Vec::new();
        swap_moves(&routes, &loads, &model, &|a, b| model.arc_cost(a, b), &mut out);

        assert_eq!(out.len(), 4);
        let best = out.iter().min_by_key(|c| c.delta).expect("moves");
        let mut after = routes.clone();
        best.mv.apply(&mut after);
        assert!(model.plan_cost(&after) < model.plan_cost(&routes));
        assert_eq!(model.plan_cost(&after) - model.plan_cost(&routes), best.delta);
    }

    #[test]
    fn test_swap_skips_overloading_pairs() {
        let inst = instance(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], &[0, 2, 8], &[5, 10]);
        let model = RoutingModel::from_instance(&inst);
        let mut out = Vec::new();
        swap_moves(&[vec![1], vec![2]], &[2, 8], &model, &|a, b| model.arc_cost(a, b), &mut out);
        assert!(out.is_empty());
    }
}
