//! Inter-route exchange operator (2-opt*).
//!
//! # Algorithm
//!
//! The cross-exchange (2-opt*) operator swaps tail segments between two routes.
//! Given routes R1 = [a₁, ..., aᵢ, aᵢ₊₁, ..., aₙ] and
//! R2 = [b₁, ..., bⱼ, bⱼ₊₁, ..., bₘ], produce:
//!
//! R1' = [a₁, ..., aᵢ, bⱼ₊₁, ..., bₘ]
//! R2' = [b₁, ..., bⱼ, aᵢ₊₁, ..., aₙ]
//!
//! Only the two connecting arcs change, so each move is priced in O(1).
//! Either tail may be empty, which lets a route be emptied into another.
//!
//! # Complexity
//!
//! O(n² × R²) per pass, where n = customers per route, R = number of routes.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1995). "An Exchange Heuristic for
//! Routeing Problems with Time Windows", *Journal of the Operational Research
//! Society* 46(12), 1433-1446.

use super::{at, before, Candidate, Move};
use crate::solver::RoutingModel;

/// Emits every capacity-feasible tail exchange between two routes.
pub fn exchange_moves<C>(
    routes: &[Vec<usize>],
    model: &RoutingModel<'_>,
    cost: &C,
    out: &mut Vec<Candidate>,
) where
    C: Fn(usize, usize) -> i64,
{
    let depot = model.depot();
    let prefixes: Vec<Vec<i64>> = routes.iter().map(|r| prefix_loads(r, model)).collect();

    for (route_a, ra) in routes.iter().enumerate() {
        for (route_b, rb) in routes.iter().enumerate().skip(route_a + 1) {
            if ra.is_empty() && rb.is_empty() {
                continue;
            }
            let pa = &prefixes[route_a];
            let pb = &prefixes[route_b];
            let (load_a, load_b) = (pa[ra.len()], pb[rb.len()]);

            for cut_a in 0..=ra.len() {
                for cut_b in 0..=rb.len() {
                    // Both no-ops: swapping whole routes or swapping two empty tails
                    if (cut_a == 0 && cut_b == 0) || (cut_a == ra.len() && cut_b == rb.len()) {
                        continue;
                    }
                    let new_a = pa[cut_a] + load_b - pb[cut_b];
                    let new_b = pb[cut_b] + load_a - pa[cut_a];
                    if !model.fits(route_a, new_a) || !model.fits(route_b, new_b) {
                        continue;
                    }

                    let last_a = before(ra, cut_a, depot);
                    let head_a = at(ra, cut_a, depot);
                    let last_b = before(rb, cut_b, depot);
                    let head_b = at(rb, cut_b, depot);
                    let delta = cost(last_a, head_b) + cost(last_b, head_a)
                        - cost(last_a, head_a)
                        - cost(last_b, head_b);

                    out.push(Candidate {
                        mv: Move::Exchange {
                            route_a,
                            cut_a,
                            route_b,
                            cut_b,
                        },
                        delta,
                    });
                }
            }
        }
    }
}

/// `prefix[k]` = load of the first `k` customers.
fn prefix_loads(route: &[usize], model: &RoutingModel<'_>) -> Vec<i64> {
    let mut prefix = Vec::with_capacity(route.len() + 1);
    prefix.push(0);
    let mut load = 0;
    for &node in route {
        load += model.demand(node);
        prefix.push(load);
    }
    prefix
}
