//! Tabu search.
//!
//! # Algorithm
//!
//! Each iteration applies the cheapest admissible move of the neighbourhood,
//! even when it worsens the plan. Customers moved by the chosen move become
//! tabu for `tenure` iterations: moves touching a tabu customer are admissible
//! only if they produce a new best plan (aspiration).
//!
//! The objective variant keeps the plan costs of the last `tenure`
//! iterations instead, and forbids moves that land on one of them.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use std::collections::VecDeque;

use super::{Incumbent, SearchBudget, SearchLog};
use crate::local_search::neighborhood;
use crate::solver::RoutingModel;

/// Runs tabu search from `routes` and returns the best plan seen.
pub fn tabu_search(
    model: &RoutingModel<'_>,
    mut routes: Vec<Vec<usize>>,
    tenure: u64,
    budget: &SearchBudget,
    log: &SearchLog,
) -> Vec<Vec<usize>> {
    let arc = |a: usize, b: usize| model.arc_cost(a, b);
    let mut cost = model.plan_cost(&routes);
    let mut best = Incumbent::new(&routes, cost);

    // tabu_until[node] = first iteration at which `node` may move again
    let mut tabu_until = vec![0u64; model.node_count()];
    let mut candidates = Vec::new();
    let mut iteration = 0;

    while !budget.exhausted(iteration) {
        iteration += 1;
        neighborhood(&routes, model, &arc, &mut candidates);
        if candidates.is_empty() {
            break;
        }

        let chosen = candidates
            .iter()
            .filter(|c| {
                let tabu = c
                    .mv
                    .moved_customers(&routes)
                    .iter()
                    .any(|&node| tabu_until[node] > iteration);
                !tabu || cost + c.delta < best.cost
            })
            .min_by_key(|c| c.delta)
            .copied();
        let Some(chosen) = chosen else {
            continue;
        };

        for node in chosen.mv.moved_customers(&routes) {
            tabu_until[node] = iteration + tenure;
        }
        chosen.mv.apply(&mut routes);
        cost += chosen.delta;

        if best.offer(&routes, cost) {
            log.improved(iteration, cost, budget.elapsed());
        }
    }

    log.finished("Tabu search", iteration, best.cost, budget.elapsed());
    best.routes
}

/// Runs tabu search on objective values from `routes` and returns the best
/// plan seen.
pub fn objective_tabu_search(
    model: &RoutingModel<'_>,
    mut routes: Vec<Vec<usize>>,
    tenure: u64,
    budget: &SearchBudget,
    log: &SearchLog,
) -> Vec<Vec<usize>> {
    let arc = |a: usize, b: usize| model.arc_cost(a, b);
    let mut cost = model.plan_cost(&routes);
    let mut best = Incumbent::new(&routes, cost);

    let tenure = usize::try_from(tenure).unwrap_or(usize::MAX);
    let mut recent: VecDeque<i64> = VecDeque::from([cost]);
    let mut candidates = Vec::new();
    let mut iteration = 0;

    while !budget.exhausted(iteration) {
        iteration += 1;
        neighborhood(&routes, model, &arc, &mut candidates);
        if candidates.is_empty() {
            break;
        }

        let chosen = candidates
            .iter()
            .filter(|c| {
                let next = cost + c.delta;
                !recent.contains(&next) || next < best.cost
            })
            .min_by_key(|c| c.delta)
            .copied();
        let Some(chosen) = chosen else {
            // Every neighbour repeats a recent objective; let the oldest go
            recent.pop_front();
            continue;
        };

        chosen.mv.apply(&mut routes);
        cost += chosen.delta;
        recent.push_back(cost);
        while recent.len() > tenure {
            recent.pop_front();
        }

        if best.offer(&routes, cost) {
            log.improved(iteration, cost, budget.elapsed());
        }
    }

    log.finished("Objective tabu search", iteration, best.cost, budget.elapsed());
    best.routes
}
