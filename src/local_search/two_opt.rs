//! Intra-route 2-opt.
//!
//! # Algorithm
//!
//! For each pair of positions i < j in a route, reversing `route[i..=j]`
//! replaces the arcs `(prev_i, r[i])` and `(r[j], next_j)` by
//! `(prev_i, r[j])` and `(r[i], next_j)`:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! The arcs inside the segment change direction; their difference is added so
//! the delta stays exact for asymmetric costs.
//!
//! # Complexity
//!
//! O(n³) per route in the worst case (O(n²) pairs, O(n) interior), O(n²) for
//! symmetric costs where the interior term vanishes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::{at, before, Candidate, Move};

/// Emits every 2-opt reversal of every route.
pub fn two_opt_moves<C>(routes: &[Vec<usize>], depot: usize, cost: &C, out: &mut Vec<Candidate>)
where
    C: Fn(usize, usize) -> i64,
{
    for (r, route) in routes.iter().enumerate() {
        let n = route.len();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                out.push(Candidate {
                    mv: Move::TwoOpt { route: r, i, j },
                    delta: two_opt_delta(route, depot, cost, i, j),
                });
            }
        }
    }
}

fn two_opt_delta<C>(route: &[usize], depot: usize, cost: &C, i: usize, j: usize) -> i64
where
    C: Fn(usize, usize) -> i64,
{
    let prev = before(route, i, depot);
    let next = at(route, j + 1, depot);

    let mut delta = cost(prev, route[j]) + cost(route[i], next)
        - cost(prev, route[i])
        - cost(route[j], next);
    for k in i..j {
        delta += cost(route[k + 1], route[k]) - cost(route[k], route[k + 1]);
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(a: usize, b: usize) -> i64 {
        a.abs_diff(b) as i64
    }

    #[test]
    fn test_2opt_fixes_crossing() {
        // Corners of a 10x10 square under Manhattan distance
        let pts = [(0i64, 0i64), (0, 10), (10, 10), (10, 0)];
        let manhattan = |a: usize, b: usize| {
            (pts[a].0 - pts[b].0).abs() + (pts[a].1 - pts[b].1).abs()
        };
        // 0 → 2 → 1 → 3 → 0 crosses; reversing [2, 1] gives the perimeter.
        let mut out = Vec::new();
        two_opt_moves(&[vec![2, 1, 3]], 0, &manhattan, &mut out);
        let best = out.iter().min_by_key(|c| c.delta).expect("moves");
        assert_eq!(best.mv, Move::TwoOpt { route: 0, i: 0, j: 1 });
        assert_eq!(best.delta, -20);
    }

    #[test]
    fn test_2opt_optimal_route_has_no_improvement() {
        let mut out = Vec::new();
        two_opt_moves(&[vec![1, 2, 3]], 0, &line, &mut out);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|c| c.delta >= 0));
    }

    #[test]
    fn test_2opt_short_routes() {
        let mut out = Vec::new();
        two_opt_moves(&[vec![], vec![4]], 0, &line, &mut out);
        assert!(out.is_empty());
    }
}
