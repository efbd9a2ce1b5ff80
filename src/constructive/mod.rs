//! Construction heuristics for building the initial feasible route set.
//!
//! - [`path_cheapest_arc`] — Vehicle-by-vehicle cheapest arc extension, O(n²)
//! - [`savings`] — Clarke-Wright savings algorithm (1964), O(n² log n)
//! - [`repair`] — Best-fit decreasing packing plus overload descent, bounded by a search budget
//!
//! All return one customer sequence per vehicle, or `None` when some customer
//! cannot be placed.

mod path_cheapest_arc;
mod repair;
mod savings;

pub use path_cheapest_arc::path_cheapest_arc;
pub use repair::repair;
pub use savings::savings;

use crate::solver::{FirstSolutionStrategy, RoutingModel};

/// Runs the construction heuristic selected by `strategy`, then the other
/// one if the first leaves a customer unplaced.
pub fn construct(model: &RoutingModel<'_>, strategy: FirstSolutionStrategy) -> Option<Vec<Vec<usize>>> {
    match strategy.resolve() {
        FirstSolutionStrategy::Savings => savings(model).or_else(|| path_cheapest_arc(model)),
        _ => path_cheapest_arc(model).or_else(|| savings(model)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;

    #[test]
    fn test_falls_back_to_other_heuristic() {
        // Path cheapest arc fills the first vehicle with 5 + 4 and strands 6 + 5
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)],
            &[0, 5, 4, 6, 5],
            &[10, 10],
        );
        let model = RoutingModel::from_instance(&inst);
        assert!(path_cheapest_arc(&model).is_none());

        let routes = construct(&model, FirstSolutionStrategy::PathCheapestArc).expect("savings fits");
        for (v, route) in routes.iter().enumerate() {
            assert!(model.fits(v, model.route_load(route)));
        }
        assert_eq!(routes.iter().map(Vec::len).sum::<usize>(), 4);
    }
}
