//! Capacity dimension.

/// A quantity accumulated along each route and bounded per vehicle.
///
/// The transit at a node is that node's demand. Slack is zero and the
/// cumulative value starts at zero at the depot, so a route is feasible
/// exactly when its total demand fits the vehicle.
///
/// # Examples
///
/// ```
/// use u_cvrp::solver::CapacityDimension;
///
/// let dim = CapacityDimension::new("Capacity", vec![100, 50]);
/// assert_eq!(dim.capacity(1), 50);
/// assert!(dim.fits(1, 50));
/// assert!(!dim.fits(1, 51));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityDimension {
    name: String,
    capacities: Vec<i64>,
}

impl CapacityDimension {
    /// Declares a dimension with one capacity per vehicle.
    pub fn new(name: impl Into<String>, capacities: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            capacities,
        }
    }

    /// Dimension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capacity of `vehicle`.
    pub fn capacity(&self, vehicle: usize) -> i64 {
        self.capacities[vehicle]
    }

    /// All capacities, indexed by vehicle.
    pub fn capacities(&self) -> &[i64] {
        &self.capacities
    }

    /// Returns `true` if a route carrying `load` fits `vehicle`.
    pub fn fits(&self, vehicle: usize, load: i64) -> bool {
        load <= self.capacity(vehicle)
    }

}
