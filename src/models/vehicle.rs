//! Vehicle type.

/// A capacity-limited vehicle that starts and ends its route at the depot.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Vehicle;
///
/// let v = Vehicle::new(0, 100);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    id: usize,
    capacity: i64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: i64) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Returns `true` if `load` fits in this vehicle.
    pub fn fits(&self, load: i64) -> bool {
        load <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(4, 100);
        assert_eq!(v.id(), 4);
        assert_eq!(v.capacity(), 100);
    }

    #[test]
    fn test_fits() {
        let v = Vehicle::new(0, 10);
        assert!(v.fits(10));
        assert!(!v.fits(11));
    }
}
