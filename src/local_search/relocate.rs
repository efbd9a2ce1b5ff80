//! Inter-route customer relocation operator.
//!
//! # Algorithm
//!
//! Tries moving each customer from its current route to every insertion
//! position of every other route whose vehicle can absorb its demand.
//!
//! # Complexity
//!
//! O(n² × R) per pass where n = customers per route, R = number of routes.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{at, before, Candidate, Move};
use crate::solver::RoutingModel;

/// Emits every capacity-feasible inter-route relocation.
///
/// `loads[r]` must be the current load of `routes[r]`.
pub fn relocate_moves<C>(
    routes: &[Vec<usize>],
    loads: &[i64],
    model: &RoutingModel<'_>,
    cost: &C,
    out: &mut Vec<Candidate>,
) where
    C: Fn(usize, usize) -> i64,
{
    let depot = model.depot();

    for (from_route, route) in routes.iter().enumerate() {
        for (from_pos, &customer) in route.iter().enumerate() {
            let demand = model.demand(customer);
            let prev = before(route, from_pos, depot);
            let next = at(route, from_pos + 1, depot);
            let removal = cost(prev, next) - cost(prev, customer) - cost(customer, next);

            for (to_route, target) in routes.iter().enumerate() {
                if to_route == from_route || !model.fits(to_route, loads[to_route] + demand) {
                    continue;
                }
                for to_pos in 0..=target.len() {
                    let a = before(target, to_pos, depot);
                    let b = at(target, to_pos, depot);
                    let insertion = cost(a, customer) + cost(customer, b) - cost(a, b);
                    out.push(Candidate {
                        mv: Move::Relocate {
                            from_route,
                            from_pos,
                            to_route,
                            to_pos,
                        },
                        delta: removal + insertion,
                    });
                }
            }
        }
    }
}
