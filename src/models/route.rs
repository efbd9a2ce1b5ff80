//! Route type.

/// The ordered visits of one vehicle.
///
/// A route starts and ends at the depot. Only the customer visits are stored;
/// [`path`](Route::path) yields the full node sequence including both depot
/// endpoints. An unused vehicle has an empty route (`depot → depot`).
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Route;
///
/// let route = Route::new(0, 0, vec![3, 1]);
/// assert_eq!(route.path().collect::<Vec<_>>(), vec![0, 3, 1, 0]);
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    vehicle_id: usize,
    depot: usize,
    visits: Vec<usize>,
}

impl Route {
    /// Creates a route for `vehicle_id` visiting `visits` in order.
    pub fn new(vehicle_id: usize, depot: usize, visits: Vec<usize>) -> Self {
        Self {
            vehicle_id,
            depot,
            visits,
        }
    }

    /// Creates an empty route (`depot → depot`).
    pub fn empty(vehicle_id: usize, depot: usize) -> Self {
        Self::new(vehicle_id, depot, Vec::new())
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the depot this route starts and ends at.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Returns the customer visits in order (depot excluded).
    pub fn visits(&self) -> &[usize] {
        &self.visits
    }

    /// Number of customer visits.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if the vehicle leaves the depot only to come back.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Full node sequence: depot, visits, depot.
    pub fn path(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.depot)
            .chain(self.visits.iter().copied())
            .chain(std::iter::once(self.depot))
    }

    /// Consecutive `(from, to)` arcs along [`path`](Route::path).
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path().zip(self.path().skip(1))
    }
}
