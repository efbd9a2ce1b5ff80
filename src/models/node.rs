//! Node type.

/// A location in a routing problem: the depot or a customer.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Node;
///
/// let depot = Node::depot(0, 82.0, 76.0);
/// assert_eq!(depot.demand(), 0);
///
/// let c = Node::new(1, 96.0, 44.0, 19);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
    demand: i64,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64, demand: i64) -> Self {
        Self { id, x, y, demand }
    }

    /// Creates a depot node (demand 0).
    pub fn depot(id: usize, x: f64, y: f64) -> Self {
        Self::new(id, x, y, 0)
    }

    /// Node index.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Quantity delivered at this node.
    pub fn demand(&self) -> i64 {
        self.demand
    }

    /// Coordinates as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let n = Node::new(3, 49.0, 8.0, 6);
        assert_eq!(n.id(), 3);
        assert_eq!(n.position(), (49.0, 8.0));
        assert_eq!(n.demand(), 6);
    }

    #[test]
    fn test_depot() {
        let d = Node::depot(2, 1.0, 2.0);
        assert_eq!(d.id(), 2);
        assert_eq!(d.demand(), 0);
    }
}
