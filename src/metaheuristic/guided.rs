//! Guided local search.
//!
//! # Algorithm
//!
//! Descends on the augmented cost `c(a, b) + λ · p(a, b)`. At each local
//! minimum, the arcs of the current plan with maximal utility
//! `c(a, b) / (1 + p(a, b))` get their penalty `p` raised by one, which pushes
//! the descent away from expensive arcs it keeps using. `λ` is fixed at the
//! first local minimum as `coefficient · cost / arcs`, at least 1.
//!
//! The best plan is tracked on the real cost.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its application
//! to the traveling salesman problem", *European Journal of Operational
//! Research* 113(2), 469-499.

use super::{Incumbent, SearchBudget, SearchLog};
use crate::local_search::neighborhood;
use crate::solver::{arc_cost_ceiling, RoutingModel};

/// Runs guided local search from `routes` and returns the best plan seen.
pub fn guided_local_search(
    model: &RoutingModel<'_>,
    mut routes: Vec<Vec<usize>>,
    lambda_coefficient: f64,
    budget: &SearchBudget,
    log: &SearchLog,
) -> Vec<Vec<usize>> {
    let n = model.node_count();
    let depot = model.depot();
    let mut penalties = vec![0i64; n * n];
    let mut lambda = 0i64;
    // Keeps augmented arcs within the same bound as real ones
    let penalty_cap = arc_cost_ceiling(n, routes.len());

    let mut cost = model.plan_cost(&routes);
    let mut best = Incumbent::new(&routes, cost);
    let mut candidates = Vec::new();
    let mut iteration = 0;

    while !budget.exhausted(iteration) {
        iteration += 1;

        let augmented = |a: usize, b: usize| {
            model.arc_cost(a, b) + lambda.saturating_mul(penalties[a * n + b]).min(penalty_cap)
        };
        neighborhood(&routes, model, &augmented, &mut candidates);
        let improving = candidates
            .iter()
            .filter(|c| c.delta < 0)
            .min_by_key(|c| c.delta)
            .copied();

        if let Some(chosen) = improving {
            chosen.mv.apply(&mut routes);
            cost = model.plan_cost(&routes);
            if best.offer(&routes, cost) {
                log.improved(iteration, cost, budget.elapsed());
            }
            continue;
        }

        // Local minimum of the augmented cost
        let arcs: Vec<(usize, usize)> = plan_arcs(&routes, depot).collect();
        if arcs.is_empty() {
            break;
        }
        if lambda == 0 {
            let per_arc = lambda_coefficient * cost as f64 / arcs.len() as f64;
            lambda = (per_arc.round() as i64).max(1);
        }

        let utility =
            |&(a, b): &(usize, usize)| model.arc_cost(a, b) as f64 / (1 + penalties[a * n + b]) as f64;
        let max_utility = arcs.iter().map(utility).fold(f64::NEG_INFINITY, f64::max);
        let worst: Vec<(usize, usize)> = arcs
            .iter()
            .filter(|&&arc| utility(&arc) >= max_utility)
            .copied()
            .collect();
        for (a, b) in worst {
            penalties[a * n + b] += 1;
            if a != b {
                penalties[b * n + a] += 1;
            }
        }
    }

    log.finished("Guided local search", iteration, best.cost, budget.elapsed());
    best.routes
}

/// Arcs of every non-empty route, depot to depot.
fn plan_arcs(routes: &[Vec<usize>], depot: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    routes.iter().filter(|r| !r.is_empty()).flat_map(move |route| {
        let path: Vec<usize> = std::iter::once(depot)
            .chain(route.iter().copied())
            .chain(std::iter::once(depot))
            .collect();
        path.windows(2).map(|w| (w[0], w[1])).collect::<Vec<_>>()
    })
}
