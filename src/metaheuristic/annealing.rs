//! Simulated annealing.
//!
//! # Algorithm
//!
//! Each iteration draws one move uniformly from the neighbourhood. Improving
//! moves are always applied; worsening moves with probability
//! `exp(-delta / T)` (Metropolis criterion). The temperature cools
//! geometrically with budget progress, from `T₀` down to `0.01 · T₀`, where
//! `T₀` is a tenth of the starting cost per customer.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Incumbent, SearchBudget, SearchLog};
use crate::local_search::neighborhood;
use crate::solver::RoutingModel;

/// Final temperature as a fraction of the initial one.
const COOLING_FLOOR: f64 = 0.01;

/// Runs simulated annealing from `routes` and returns the best plan seen.
///
/// Without a deadline the run is deterministic for a given `seed`.
pub fn simulated_annealing(
    model: &RoutingModel<'_>,
    mut routes: Vec<Vec<usize>>,
    seed: u64,
    budget: &SearchBudget,
    log: &SearchLog,
) -> Vec<Vec<usize>> {
    let arc = |a: usize, b: usize| model.arc_cost(a, b);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cost = model.plan_cost(&routes);
    let mut best = Incumbent::new(&routes, cost);

    let initial_temperature = (0.1 * cost as f64 / model.customer_count().max(1) as f64).max(1.0);
    let mut candidates = Vec::new();
    let mut iteration = 0;

    while !budget.exhausted(iteration) {
        iteration += 1;
        neighborhood(&routes, model, &arc, &mut candidates);
        if candidates.is_empty() {
            break;
        }

        let candidate = candidates[rng.random_range(0..candidates.len())];
        let temperature = initial_temperature * COOLING_FLOOR.powf(budget.progress(iteration));
        let accept = candidate.delta <= 0
            || rng.random::<f64>() < (-(candidate.delta as f64) / temperature).exp();
        if !accept {
            continue;
        }

        candidate.mv.apply(&mut routes);
        cost += candidate.delta;
        if best.offer(&routes, cost) {
            log.improved(iteration, cost, budget.elapsed());
        }
    }

    log.finished("Simulated annealing", iteration, best.cost, budget.elapsed());
    best.routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;
    use std::time::Duration;

    fn square() -> crate::models::ProblemInstance {
        instance(
            &[
                (0.0, 0.0),
                (10.0, 10.0),
                (-10.0, 10.0),
                (10.0, -10.0),
                (-10.0, -10.0),
                (0.0, 12.0),
            ],
            &[0, 3, 3, 3, 3, 3],
            &[9, 9],
        )
    }

    #[test]
    fn test_annealing_is_deterministic_per_seed() {
        let inst = square();
        let model = RoutingModel::from_instance(&inst);
        let start = vec![vec![1, 4, 2], vec![3, 5]];

        let run = |seed| {
            let budget = SearchBudget::new(Duration::MAX, Some(300));
            simulated_annealing(&model, start.clone(), seed, &budget, &SearchLog::new(false))
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_annealing_keeps_capacity() {
        let inst = square();
        let model = RoutingModel::from_instance(&inst);
        let start = vec![vec![1, 4, 2], vec![3, 5]];
        let budget = SearchBudget::new(Duration::from_secs(3600), Some(300));
        let routes = simulated_annealing(&model, start.clone(), 7, &budget, &SearchLog::new(false));

        assert!(model.plan_cost(&routes) <= model.plan_cost(&start));
        for (v, route) in routes.iter().enumerate() {
            assert!(model.fits(v, model.route_load(route)));
        }
        assert_eq!(routes.iter().map(Vec::len).sum::<usize>(), 5);
    }
}
