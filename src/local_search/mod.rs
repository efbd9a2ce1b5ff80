//! Local search neighbourhood for improving VRP solutions.
//!
//! - [`two_opt_moves`] — Intra-route segment reversal
//! - [`or_opt_moves`] — Intra-route relocation of 1–3 customer segments
//! - [`relocate_moves`] — Inter-route customer relocation
//! - [`swap_moves`] — Inter-route customer swap
//! - [`exchange_moves`] — Inter-route tail exchange (2-opt*)
//!
//! Routes are plain customer sequences (depot excluded), one per vehicle.
//! Every generator emits all capacity-feasible moves with their exact cost
//! change under a caller-supplied arc cost, so metaheuristics can price moves
//! with an augmented cost.

mod exchange;
mod or_opt;
mod relocate;
mod swap;
mod two_opt;

pub use exchange::exchange_moves;
pub use or_opt::or_opt_moves;
pub use relocate::relocate_moves;
pub use swap::swap_moves;
pub use two_opt::two_opt_moves;

use crate::solver::RoutingModel;

/// A neighbourhood move over per-vehicle customer sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Reverse `route[i..=j]`.
    TwoOpt { route: usize, i: usize, j: usize },
    /// Take `route[from..from + len]` out and reinsert it at index `to` of the
    /// shortened route.
    OrOpt {
        route: usize,
        from: usize,
        len: usize,
        to: usize,
    },
    /// Move one customer to another route.
    Relocate {
        from_route: usize,
        from_pos: usize,
        to_route: usize,
        to_pos: usize,
    },
    /// Swap two customers on different routes.
    Swap {
        route_a: usize,
        pos_a: usize,
        route_b: usize,
        pos_b: usize,
    },
    /// Swap the tails `route_a[cut_a..]` and `route_b[cut_b..]`.
    Exchange {
        route_a: usize,
        cut_a: usize,
        route_b: usize,
        cut_b: usize,
    },
}

/// A move together with the cost change it causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    pub delta: i64,
}

impl Move {
    /// Applies the move in place.
    pub fn apply(&self, routes: &mut [Vec<usize>]) {
        match *self {
            Move::TwoOpt { route, i, j } => routes[route][i..=j].reverse(),
            Move::OrOpt {
                route,
                from,
                len,
                to,
            } => {
                let segment: Vec<usize> = routes[route].drain(from..from + len).collect();
                routes[route].splice(to..to, segment);
            }
            Move::Relocate {
                from_route,
                from_pos,
                to_route,
                to_pos,
            } => {
                let customer = routes[from_route].remove(from_pos);
                routes[to_route].insert(to_pos, customer);
            }
            Move::Swap {
                route_a,
                pos_a,
                route_b,
                pos_b,
            } => {
                let a = routes[route_a][pos_a];
                routes[route_a][pos_a] = routes[route_b][pos_b];
                routes[route_b][pos_b] = a;
            }
            Move::Exchange {
                route_a,
                cut_a,
                route_b,
                cut_b,
            } => {
                let tail_a = routes[route_a].split_off(cut_a);
                let tail_b = routes[route_b].split_off(cut_b);
                routes[route_a].extend(tail_b);
                routes[route_b].extend(tail_a);
            }
        }
    }

    /// Customers whose position the move changes, read before applying it.
    ///
    /// For tail exchanges only the first customer of each tail is reported.
    pub fn moved_customers(&self, routes: &[Vec<usize>]) -> Vec<usize> {
        match *self {
            Move::TwoOpt { route, i, j } => vec![routes[route][i], routes[route][j]],
            Move::OrOpt {
                route, from, len, ..
            } => routes[route][from..from + len].to_vec(),
            Move::Relocate {
                from_route,
                from_pos,
                ..
            } => vec![routes[from_route][from_pos]],
            Move::Swap {
                route_a,
                pos_a,
                route_b,
                pos_b,
            } => vec![routes[route_a][pos_a], routes[route_b][pos_b]],
            Move::Exchange {
                route_a,
                cut_a,
                route_b,
                cut_b,
            } => routes[route_a]
                .get(cut_a)
                .into_iter()
                .chain(routes[route_b].get(cut_b))
                .copied()
                .collect(),
        }
    }
}

/// Collects every feasible move of every operator into `out`.
///
/// `out` is cleared first so the buffer can be reused across iterations.
pub fn neighborhood<C>(
    routes: &[Vec<usize>],
    model: &RoutingModel<'_>,
    cost: &C,
    out: &mut Vec<Candidate>,
) where
    C: Fn(usize, usize) -> i64,
{
    out.clear();
    let loads: Vec<i64> = routes.iter().map(|r| model.route_load(r)).collect();
    two_opt_moves(routes, model.depot(), cost, out);
    or_opt_moves(routes, model.depot(), cost, out);
    relocate_moves(routes, &loads, model, cost, out);
    swap_moves(routes, &loads, model, cost, out);
    exchange_moves(routes, model, cost, out);
}

/// Node visited before position `pos` (the depot for `pos == 0`).
fn before(route: &[usize], pos: usize, depot: usize) -> usize {
    if pos == 0 {
        depot
    } else {
        route[pos - 1]
    }
}

/// Node at position `pos` (the depot past the end).
fn at(route: &[usize], pos: usize, depot: usize) -> usize {
    route.get(pos).copied().unwrap_or(depot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::route_cost_with;
    use crate::test_support::instance;

    /// Every generated delta must equal the real cost difference.
    #[test]
    fn test_deltas_match_recomputed_cost() {
        let inst = instance(
            &[
                (0.0, 0.0),
                (5.0, 1.0),
                (-5.0, -1.0),
                (5.0, -1.0),
                (-5.0, 1.0),
                (2.0, 7.0),
                (-3.0, 4.0),
            ],
            &[0, 3, 4, 5, 2, 6, 1],
            &[12, 12, 12],
        );
        let model = RoutingModel::from_instance(&inst);
        let routes = vec![vec![1, 4, 5], vec![3, 2], vec![6]];
        let cost = |a: usize, b: usize| model.arc_cost(a, b);

        let mut candidates = Vec::new();
        neighborhood(&routes, &model, &cost, &mut candidates);
        assert!(!candidates.is_empty());

        let before_cost = model.plan_cost(&routes);
        for candidate in &candidates {
            let mut after = routes.clone();
            candidate.mv.apply(&mut after);
            assert_eq!(
                model.plan_cost(&after) - before_cost,
                candidate.delta,
                "{:?}",
                candidate.mv
            );
            for (v, route) in after.iter().enumerate() {
                assert!(model.fits(v, model.route_load(route)), "{:?}", candidate.mv);
            }
            let mut served: Vec<usize> = after.iter().flatten().copied().collect();
            served.sort_unstable();
            assert_eq!(served, vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_deltas_under_asymmetric_cost() {
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (3.0, 0.0), (1.0, 3.0)],
            &[0, 1, 1, 1, 1],
            &[10, 10],
        );
        let model = RoutingModel::from_instance(&inst);
        let routes = vec![vec![1, 2, 3], vec![4]];
        let cost = |a: usize, b: usize| model.arc_cost(a, b) + if a < b { 3 } else { 0 };

        let mut candidates = Vec::new();
        neighborhood(&routes, &model, &cost, &mut candidates);
        let before_cost: i64 = routes.iter().map(|r| route_cost_with(r, 0, cost)).sum();
        for candidate in &candidates {
            let mut after = routes.clone();
            candidate.mv.apply(&mut after);
            let after_cost: i64 = after.iter().map(|r| route_cost_with(r, 0, cost)).sum();
            assert_eq!(after_cost - before_cost, candidate.delta, "{:?}", candidate.mv);
        }
    }

    #[test]
    fn test_apply_moves() {
        let mut routes = vec![vec![1, 2, 3, 4], vec![5, 6]];
        Move::TwoOpt { route: 0, i: 1, j: 3 }.apply(&mut routes);
        assert_eq!(routes[0], vec![1, 4, 3, 2]);

        Move::OrOpt { route: 0, from: 0, len: 2, to: 2 }.apply(&mut routes);
        assert_eq!(routes[0], vec![3, 2, 1, 4]);

        Move::Relocate { from_route: 0, from_pos: 3, to_route: 1, to_pos: 1 }.apply(&mut routes);
        assert_eq!(routes, vec![vec![3, 2, 1], vec![5, 4, 6]]);

        Move::Swap { route_a: 0, pos_a: 0, route_b: 1, pos_b: 2 }.apply(&mut routes);
        assert_eq!(routes, vec![vec![6, 2, 1], vec![5, 4, 3]]);

        Move::Exchange { route_a: 0, cut_a: 1, route_b: 1, cut_b: 2 }.apply(&mut routes);
        assert_eq!(routes, vec![vec![6, 3], vec![5, 4, 2, 1]]);
    }

    #[test]
    fn test_moved_customers() {
        let routes = vec![vec![1, 2, 3], vec![4]];
        assert_eq!(
            Move::OrOpt { route: 0, from: 1, len: 2, to: 0 }.moved_customers(&routes),
            vec![2, 3]
        );
        assert_eq!(
            Move::Exchange { route_a: 0, cut_a: 3, route_b: 1, cut_b: 0 }.moved_customers(&routes),
            vec![4]
        );
    }
}
