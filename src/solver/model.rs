//! Routing model: the solver-facing view of a problem.

use tracing::debug;

use super::{CapacityDimension, RoutingCallbacks};
use crate::error::SolverError;
use crate::models::ProblemInstance;

/// Everything a [`RoutingSolver`](super::RoutingSolver) may see of a problem.
///
/// The model holds the registered callbacks by reference and never copies
/// problem data. One arc-cost evaluator applies to all vehicles; an optional
/// capacity dimension bounds the demand carried per vehicle. Without a
/// dimension, vehicles are uncapacitated.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{ProblemData, ProblemInstance};
/// use u_cvrp::solver::RoutingModel;
///
/// let data = ProblemData::with_uniform_capacity(
///     vec![0.0, 0.0, 4.0],
///     vec![0.0, 3.0, 0.0],
///     vec![0, 5, 5],
///     1,
///     10,
///     0,
/// );
/// let instance = ProblemInstance::from_data(&data).unwrap();
/// let model = RoutingModel::from_instance(&instance);
/// assert_eq!(model.route_cost(&[1, 2]), 12);
/// assert_eq!(model.route_load(&[1, 2]), 10);
/// assert_eq!(model.capacity(0), 10);
/// assert!(model.fits(0, 10));
/// assert!(!model.fits(0, 11));
/// ```
pub struct RoutingModel<'a> {
    callbacks: &'a dyn RoutingCallbacks,
    node_count: usize,
    vehicle_count: usize,
    depot: usize,
    capacity: Option<CapacityDimension>,
}

impl<'a> RoutingModel<'a> {
    /// Creates a model over `node_count` nodes served by `vehicle_count`
    /// vehicles that all start and end at `depot`.
    pub fn new(
        callbacks: &'a dyn RoutingCallbacks,
        node_count: usize,
        vehicle_count: usize,
        depot: usize,
    ) -> Self {
        Self {
            callbacks,
            node_count,
            vehicle_count,
            depot,
            capacity: None,
        }
    }

    /// Builds the model for a validated instance: the instance's own lookups
    /// as callbacks and a `"Capacity"` dimension with its vehicle capacities.
    pub fn from_instance(instance: &'a ProblemInstance) -> Self {
        let mut model = Self::new(
            instance,
            instance.node_count(),
            instance.vehicle_count(),
            instance.depot(),
        );
        model.add_capacity_dimension(CapacityDimension::new("Capacity", instance.capacities()));
        model
    }

    /// Registers the capacity dimension, replacing any previous one.
    pub fn add_capacity_dimension(&mut self, dimension: CapacityDimension) {
        debug!(name = dimension.name(), "registered capacity dimension");
        self.capacity = Some(dimension);
    }

    /// The registered capacity dimension, if any.
    pub fn capacity_dimension(&self) -> Option<&CapacityDimension> {
        self.capacity.as_ref()
    }

    /// Number of nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Non-depot nodes in index order.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count).filter(move |&n| n != self.depot)
    }

    /// Number of non-depot nodes.
    pub fn customer_count(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    /// Arc cost callback.
    pub fn arc_cost(&self, from: usize, to: usize) -> i64 {
        self.callbacks.arc_cost(from, to)
    }

    /// Demand callback.
    pub fn demand(&self, node: usize) -> i64 {
        self.callbacks.node_demand(node)
    }

    /// Capacity of `vehicle`; unbounded without a capacity dimension.
    pub fn capacity(&self, vehicle: usize) -> i64 {
        self.capacity
            .as_ref()
            .map_or(i64::MAX, |dim| dim.capacity(vehicle))
    }

    /// Whether a route carrying `load` fits `vehicle` under the capacity
    /// dimension. Always `true` without one.
    pub fn fits(&self, vehicle: usize, load: i64) -> bool {
        self.capacity
            .as_ref()
            .is_none_or(|dim| dim.fits(vehicle, load))
    }

    /// Largest capacity in the fleet.
    pub fn max_capacity(&self) -> i64 {
        (0..self.vehicle_count)
            .map(|v| self.capacity(v))
            .max()
            .unwrap_or(0)
    }

    /// Cost of `depot → route[0] → … → depot` under the model's arc costs.
    pub fn route_cost(&self, route: &[usize]) -> i64 {
        route_cost_with(route, self.depot, |a, b| self.arc_cost(a, b))
    }

    /// Total demand served by `route`.
    pub fn route_load(&self, route: &[usize]) -> i64 {
        route.iter().map(|&n| self.demand(n)).sum()
    }

    /// Total cost of a per-vehicle set of routes.
    pub fn plan_cost(&self, routes: &[Vec<usize>]) -> i64 {
        routes.iter().map(|r| self.route_cost(r)).sum()
    }

    /// Checks the model is something a solver can search over.
    ///
    /// Queries every arc and every node once. Demands must sum without
    /// overflow and arc costs must pass [`costs_fit`].
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.vehicle_count == 0 {
            return Err(SolverError::NoVehicles);
        }
        if self.depot >= self.node_count {
            return Err(SolverError::DepotOutOfRange {
                depot: self.depot,
                nodes: self.node_count,
            });
        }
        if let Some(dim) = &self.capacity {
            if dim.capacities().len() != self.vehicle_count {
                return Err(SolverError::DimensionMismatch {
                    declared: dim.capacities().len(),
                    expected: self.vehicle_count,
                });
            }
        }
        let mut total_demand = 0i64;
        let mut max_arc = 0;
        for node in 0..self.node_count {
            let demand = self.demand(node);
            if demand < 0 {
                return Err(SolverError::NegativeDemand { node, demand });
            }
            total_demand = total_demand
                .checked_add(demand)
                .ok_or(SolverError::DemandOverflow)?;
            for to in 0..self.node_count {
                let cost = self.arc_cost(node, to);
                if cost < 0 {
                    return Err(SolverError::NegativeArcCost {
                        from: node,
                        to,
                        cost,
                    });
                }
                max_arc = max_arc.max(cost);
            }
        }
        if !costs_fit(max_arc, self.node_count, self.vehicle_count) {
            return Err(SolverError::CostOverflow { max_arc });
        }
        Ok(())
    }
}

impl std::fmt::Debug for RoutingModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingModel")
            .field("node_count", &self.node_count)
            .field("vehicle_count", &self.vehicle_count)
            .field("depot", &self.depot)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// Whether arcs no longer than `max_arc` can be summed over any plan of
/// `node_count` nodes and `vehicle_count` vehicles, move deltas and search
/// penalties included, without leaving `i64`.
pub fn costs_fit(max_arc: i64, node_count: usize, vehicle_count: usize) -> bool {
    node_count
        .checked_add(vehicle_count)
        .and_then(|arcs| arcs.checked_add(8))
        .and_then(|arcs| i64::try_from(arcs).ok())
        .and_then(|arcs| arcs.checked_mul(4))
        .is_some_and(|factor| max_arc.checked_mul(factor).is_some())
}

/// Largest arc cost [`costs_fit`] accepts for a plan of this size.
pub(crate) fn arc_cost_ceiling(node_count: usize, vehicle_count: usize) -> i64 {
    let factor = (node_count.saturating_add(vehicle_count).saturating_add(8)).saturating_mul(4);
    i64::MAX / i64::try_from(factor).unwrap_or(i64::MAX)
}

/// Cost of `depot → route[0] → … → route[n-1] → depot` under `cost`.
///
/// An empty route costs `cost(depot, depot)`.
pub fn route_cost_with<C>(route: &[usize], depot: usize, cost: C) -> i64
where
    C: Fn(usize, usize) -> i64,
{
    let mut prev = depot;
    let mut total = 0;
    for &node in route {
        total += cost(prev, node);
        prev = node;
    }
    total + cost(prev, depot)
}
