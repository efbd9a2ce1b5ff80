//! Intra-route Or-opt.
//!
//! # Algorithm
//!
//! Moves segments of 1, 2, or 3 consecutive customers to a different position
//! within the same route. The cost change is the gain from closing the gap
//! left by the segment plus the cost of opening the arc it is reinserted into.
//!
//! # Complexity
//!
//! O(n²) per route.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{at, before, Candidate, Move};

/// Longest segment moved as a block.
const MAX_SEGMENT: usize = 3;

/// Emits every Or-opt segment move of every route.
pub fn or_opt_moves<C>(routes: &[Vec<usize>], depot: usize, cost: &C, out: &mut Vec<Candidate>)
where
    C: Fn(usize, usize) -> i64,
{
    for (r, route) in routes.iter().enumerate() {
        let n = route.len();
        for len in 1..=MAX_SEGMENT.min(n) {
            let reduced_len = n - len;
            for from in 0..=reduced_len {
                let prev = before(route, from, depot);
                let after = at(route, from + len, depot);
                let first = route[from];
                let last = route[from + len - 1];
                let removal = cost(prev, after) - cost(prev, first) - cost(last, after);

                for to in 0..=reduced_len {
                    // Reinserting where it came from is a no-op
                    if to == from {
                        continue;
                    }
                    let a = if to == 0 {
                        depot
                    } else {
                        reduced(route, to - 1, from, len)
                    };
                    let b = if to == reduced_len {
                        depot
                    } else {
                        reduced(route, to, from, len)
                    };
                    let insertion = cost(a, first) + cost(last, b) - cost(a, b);
                    out.push(Candidate {
                        mv: Move::OrOpt {
                            route: r,
                            from,
                            len,
                            to,
                        },
                        delta: removal + insertion,
                    });
                }
            }
        }
    }
}

/// Element `k` of `route` with `route[from..from + len]` removed.
fn reduced(route: &[usize], k: usize, from: usize, len: usize) -> usize {
    if k < from {
        route[k]
    } else {
        route[k + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(a: usize, b: usize) -> i64 {
        a.abs_diff(b) as i64
    }

    #[test]
    fn test_or_opt_moves_misplaced_customer_home() {
        // 0 → 3 → 1 → 2 → 0 = 3 + 2 + 1 + 2 = 8; the best reorderings cost 6.
        let mut out = Vec::new();
        or_opt_moves(&[vec![3, 1, 2]], 0, &line, &mut out);
        let best = out.iter().min_by_key(|c| c.delta).expect("moves");
        assert_eq!(best.delta, -2);

        let mut routes = vec![vec![3, 1, 2]];
        best.mv.apply(&mut routes);
        assert_eq!(crate::solver::route_cost_with(&routes[0], 0, line), 6);
        assert!(out
            .iter()
            .any(|c| c.mv == Move::OrOpt { route: 0, from: 0, len: 1, to: 2 } && c.delta == -2));
    }

    #[test]
    fn test_or_opt_single_customer_has_no_moves() {
        let mut out = Vec::new();
        or_opt_moves(&[vec![2]], 0, &line, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_reduced_indexing() {
        let route = [10, 11, 12, 13, 14];
        // Remove [11, 12]: reduced = [10, 13, 14]
        assert_eq!(reduced(&route, 0, 1, 2), 10);
        assert_eq!(reduced(&route, 1, 1, 2), 13);
        assert_eq!(reduced(&route, 2, 1, 2), 14);
    }
}
