//! Lookup callbacks registered with a routing model.

/// The two read-only lookups a routing solver needs from the problem.
///
/// Both take node indices (0..N), not solver-internal indices.
///
/// # Examples
///
/// ```
/// use u_cvrp::solver::{FnCallbacks, RoutingCallbacks};
///
/// let callbacks = FnCallbacks::new(|from: usize, to: usize| from.abs_diff(to) as i64, |_| 1);
/// assert_eq!(callbacks.arc_cost(4, 1), 3);
/// assert_eq!(callbacks.node_demand(2), 1);
/// ```
pub trait RoutingCallbacks {
    /// Travel cost of the arc `from → to`.
    fn arc_cost(&self, from: usize, to: usize) -> i64;

    /// Quantity picked up or delivered at `node`.
    fn node_demand(&self, node: usize) -> i64;
}

/// Adapts a pair of plain functions or closures into [`RoutingCallbacks`].
pub struct FnCallbacks<A, D> {
    arc_cost: A,
    node_demand: D,
}

impl<A, D> FnCallbacks<A, D>
where
    A: Fn(usize, usize) -> i64,
    D: Fn(usize) -> i64,
{
    /// Wraps the two lookups.
    pub fn new(arc_cost: A, node_demand: D) -> Self {
        Self {
            arc_cost,
            node_demand,
        }
    }
}

impl<A, D> RoutingCallbacks for FnCallbacks<A, D>
where
    A: Fn(usize, usize) -> i64,
    D: Fn(usize) -> i64,
{
    fn arc_cost(&self, from: usize, to: usize) -> i64 {
        (self.arc_cost)(from, to)
    }

    fn node_demand(&self, node: usize) -> i64 {
        (self.node_demand)(node)
    }
}

impl<A, D> std::fmt::Debug for FnCallbacks<A, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCallbacks").finish_non_exhaustive()
    }
}
