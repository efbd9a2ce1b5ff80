//! Problem data and the validated problem instance.

use serde::{Deserialize, Serialize};

use super::{Node, Vehicle};
use crate::distance::DistanceMatrix;
use crate::error::CvrpError;
use crate::solver::{costs_fit, RoutingCallbacks};

/// Raw problem input, as literals or a JSON file.
///
/// Field names follow the original data model: parallel coordinate arrays,
/// one demand per node, one capacity per vehicle.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::ProblemData;
///
/// let data: ProblemData = serde_json::from_str(r#"{
///     "x": [0, 0, 4], "y": [0, 3, 0],
///     "demands": [0, 5, 5],
///     "vehicle_capacities": [10],
///     "num_vehicles": 1,
///     "depot": 0
/// }"#).unwrap();
/// assert_eq!(data.node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub demands: Vec<i64>,
    pub vehicle_capacities: Vec<i64>,
    pub num_vehicles: usize,
    #[serde(default)]
    pub depot: usize,
}

impl ProblemData {
    /// Creates problem data where every vehicle has the same capacity.
    pub fn with_uniform_capacity(
        x: Vec<f64>,
        y: Vec<f64>,
        demands: Vec<i64>,
        num_vehicles: usize,
        capacity: i64,
        depot: usize,
    ) -> Self {
        Self {
            x,
            y,
            demands,
            vehicle_capacities: vec![capacity; num_vehicles],
            num_vehicles,
            depot,
        }
    }

    /// Number of nodes described by the coordinate arrays.
    pub fn node_count(&self) -> usize {
        self.x.len()
    }
}

/// A validated, immutable CVRP instance.
///
/// Built once from [`ProblemData`]; read-only afterwards. The instance is also
/// the solver's callback source: it implements [`RoutingCallbacks`] by looking
/// up its distance matrix and demand list.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{ProblemData, ProblemInstance};
/// use u_cvrp::solver::RoutingCallbacks;
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
/// assert_eq!(instance.arc_cost(1, 2), 5);
/// assert_eq!(instance.node_demand(2), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    nodes: Vec<Node>,
    distances: DistanceMatrix,
    vehicles: Vec<Vehicle>,
    depot: usize,
}

impl ProblemInstance {
    /// Validates `data` and builds the instance.
    ///
    /// Total demand is not compared with total fleet capacity; an
    /// undersized fleet is left for the solver to report as
    /// [`SolveOutcome::NotFound`](super::SolveOutcome::NotFound).
    ///
    /// # Errors
    ///
    /// - [`CvrpError::InvalidInput`] for malformed coordinates.
    /// - [`CvrpError::InvalidConfiguration`] for demand/capacity length
    ///   mismatches, an out-of-range depot, a depot with nonzero demand,
    ///   negative demands, non-positive capacities, an empty fleet, or
    ///   demand/capacity totals that overflow `i64`.
    /// - [`CvrpError::InvalidInput`] also when the points lie so far apart
    ///   that summed route costs could overflow.
    pub fn from_data(data: &ProblemData) -> Result<Self, CvrpError> {
        let distances = DistanceMatrix::from_coordinates(&data.x, &data.y)?;
        let n = distances.size();

        if data.demands.len() != n {
            return Err(CvrpError::InvalidConfiguration(format!(
                "{} demands for {n} nodes",
                data.demands.len()
            )));
        }
        if data.depot >= n {
            return Err(CvrpError::InvalidConfiguration(format!(
                "depot index {} is out of range for {n} nodes",
                data.depot
            )));
        }
        if data.demands[data.depot] != 0 {
            return Err(CvrpError::InvalidConfiguration(format!(
                "depot {} has demand {}, expected 0",
                data.depot, data.demands[data.depot]
            )));
        }
        if let Some((node, demand)) = data.demands.iter().enumerate().find(|&(_, &d)| d < 0) {
            return Err(CvrpError::InvalidConfiguration(format!(
                "node {node} has negative demand {demand}"
            )));
        }
        if data.num_vehicles == 0 {
            return Err(CvrpError::InvalidConfiguration(
                "at least one vehicle is required".to_string(),
            ));
        }
        if data.vehicle_capacities.len() != data.num_vehicles {
            return Err(CvrpError::InvalidConfiguration(format!(
                "{} capacities for {} vehicles",
                data.vehicle_capacities.len(),
                data.num_vehicles
            )));
        }
        if let Some((vehicle, capacity)) = data
            .vehicle_capacities
            .iter()
            .enumerate()
            .find(|&(_, &c)| c <= 0)
        {
            return Err(CvrpError::InvalidConfiguration(format!(
                "vehicle {vehicle} has non-positive capacity {capacity}"
            )));
        }

        if data.demands.iter().try_fold(0i64, |acc, &d| acc.checked_add(d)).is_none() {
            return Err(CvrpError::InvalidConfiguration(
                "total demand does not fit an i64".to_string(),
            ));
        }
        if data
            .vehicle_capacities
            .iter()
            .try_fold(0i64, |acc, &c| acc.checked_add(c))
            .is_none()
        {
            return Err(CvrpError::InvalidConfiguration(
                "total fleet capacity does not fit an i64".to_string(),
            ));
        }
        let max_arc = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| distances.get(i, j))
            .max()
            .unwrap_or(0);
        if !costs_fit(max_arc, n, data.num_vehicles) {
            return Err(CvrpError::InvalidInput(format!(
                "coordinates span {max_arc}, too far apart to sum route costs"
            )));
        }

        let nodes = (0..n)
            .map(|i| Node::new(i, data.x[i], data.y[i], data.demands[i]))
            .collect();
        let vehicles = data
            .vehicle_capacities
            .iter()
            .enumerate()
            .map(|(id, &capacity)| Vehicle::new(id, capacity))
            .collect();

        Ok(Self {
            nodes,
            distances,
            vehicles,
            depot: data.depot,
        })
    }

    /// All nodes, indexed by node ID.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The fleet, indexed by vehicle ID.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Depot node index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Per-vehicle capacities.
    pub fn capacities(&self) -> Vec<i64> {
        self.vehicles.iter().map(Vehicle::capacity).collect()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i64 {
        self.nodes.iter().map(Node::demand).sum()
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> i64 {
        self.vehicles.iter().map(Vehicle::capacity).sum()
    }
}

impl RoutingCallbacks for ProblemInstance {
    fn arc_cost(&self, from: usize, to: usize) -> i64 {
        self.distances.get(from, to)
    }

    fn node_demand(&self, node: usize) -> i64 {
        self.nodes[node].demand()
    }
}
