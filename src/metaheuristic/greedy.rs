//! Greedy descent.
//!
//! Applies the best improving move of the full neighbourhood until no move
//! improves the plan (a local minimum) or the budget runs out.

use super::{SearchBudget, SearchLog};
use crate::local_search::neighborhood;
use crate::solver::RoutingModel;

/// Runs best-improvement descent from `routes`.
pub fn greedy_descent(
    model: &RoutingModel<'_>,
    mut routes: Vec<Vec<usize>>,
    budget: &SearchBudget,
    log: &SearchLog,
) -> Vec<Vec<usize>> {
    let arc = |a: usize, b: usize| model.arc_cost(a, b);
    let mut cost = model.plan_cost(&routes);
    let mut candidates = Vec::new();
    let mut iteration = 0;

    while !budget.exhausted(iteration) {
        neighborhood(&routes, model, &arc, &mut candidates);
        let Some(best) = candidates
            .iter()
            .filter(|c| c.delta < 0)
            .min_by_key(|c| c.delta)
            .copied()
        else {
            break;
        };

        best.mv.apply(&mut routes);
        cost += best.delta;
        iteration += 1;
        log.improved(iteration, cost, budget.elapsed());
    }

    log.finished("Greedy descent", iteration, cost, budget.elapsed());
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;
    use std::time::Duration;

    #[test]
    fn test_descent_reaches_line_optimum() {
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)],
            &[0, 1, 1, 1, 1],
            &[10, 10],
        );
        let model = RoutingModel::from_instance(&inst);
        let budget = SearchBudget::new(Duration::from_secs(10), None);
        let routes = greedy_descent(
            &model,
            vec![vec![3, 1], vec![4, 2]],
            &budget,
            &SearchLog::new(false),
        );
        // Any plan visiting every customer costs at least 2 * 4
        assert_eq!(model.plan_cost(&routes), 8);
    }

    #[test]
    fn test_descent_respects_iteration_limit() {
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)],
            &[0, 1, 1, 1, 1],
            &[10],
        );
        let model = RoutingModel::from_instance(&inst);
        let budget = SearchBudget::new(Duration::from_secs(10), Some(0));
        let start = vec![vec![4, 1, 3, 2]];
        let routes = greedy_descent(&model, start.clone(), &budget, &SearchLog::new(false));
        assert_eq!(routes, start);
    }
}
