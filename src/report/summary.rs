//! Text route summary.

use std::fmt;

use crate::models::{Route, Solution};
use crate::solver::RoutingCallbacks;

/// A node on a route and the load carried after visiting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub node: usize,
    pub load: i64,
}

/// One vehicle's walk: every stop depot to depot, with running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteReport {
    vehicle_id: usize,
    stops: Vec<Stop>,
    distance: i64,
    load: i64,
}

impl RouteReport {
    /// Walks `route`, summing arc costs and the demand of each node as it is
    /// visited. The closing depot adds no demand.
    pub fn new(callbacks: &dyn RoutingCallbacks, route: &Route) -> Self {
        let path: Vec<usize> = route.path().collect();
        let mut stops = Vec::with_capacity(path.len());
        let mut distance = 0;
        let mut load = 0;

        for (k, &node) in path.iter().enumerate() {
            let last = k + 1 == path.len();
            if !last {
                load += callbacks.node_demand(node);
            }
            stops.push(Stop { node, load });
            if let Some(&next) = path.get(k + 1) {
                distance += callbacks.arc_cost(node, next);
            }
        }

        Self {
            vehicle_id: route.vehicle_id(),
            stops,
            distance,
            load,
        }
    }

    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Total arc cost of the route.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Total demand served.
    pub fn load(&self) -> i64 {
        self.load
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route for vehicle {}:", self.vehicle_id)?;
        if let Some((last, init)) = self.stops.split_last() {
            for stop in init {
                write!(f, " {} Load({}) -> ", stop.node, stop.load)?;
            }
            writeln!(f, " {} Load({})", last.node, last.load)?;
        }
        writeln!(f, "Distance of the route: {}m", self.distance)?;
        writeln!(f, "Load of the route: {}", self.load)
    }
}

/// The full route summary of a solution, in vehicle order.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{ProblemData, ProblemInstance, Route, Solution};
/// use u_cvrp::report::SolutionReport;
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
/// let solution = Solution::new(vec![Route::new(0, 0, vec![1, 2])], 12);
///
/// let report = SolutionReport::new(&instance, &solution);
/// assert_eq!(report.total_distance(), 12);
/// assert_eq!(report.total_load(), 10);
/// assert!(report.to_string().starts_with("Route for vehicle 0:\n 0 Load(0) ->  1 Load(5)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionReport {
    routes: Vec<RouteReport>,
}

impl SolutionReport {
    pub fn new(callbacks: &dyn RoutingCallbacks, solution: &Solution) -> Self {
        Self {
            routes: solution
                .routes()
                .iter()
                .map(|route| RouteReport::new(callbacks, route))
                .collect(),
        }
    }

    pub fn routes(&self) -> &[RouteReport] {
        &self.routes
    }

    /// Sum of route distances.
    pub fn total_distance(&self) -> i64 {
        self.routes.iter().map(RouteReport::distance).sum()
    }

    /// Sum of route loads.
    pub fn total_load(&self) -> i64 {
        self.routes.iter().map(RouteReport::load).sum()
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in &self.routes {
            writeln!(f, "{route}")?;
        }
        writeln!(f, "Total distance of all routes: {}m", self.total_distance())?;
        write!(f, "Total load of all routes: {}", self.total_load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;

    #[test]
    fn test_route_text_matches_format() {
        // Depot at origin, customer 1 at (0, 6) with demand 6
        let inst = instance(&[(0.0, 0.0), (0.0, 6.0)], &[0, 6], &[10]);
        let report = RouteReport::new(&inst, &Route::new(0, 0, vec![1]));
        assert_eq!(
            report.to_string(),
            "Route for vehicle 0:\n 0 Load(0) ->  1 Load(6) ->  0 Load(6)\nDistance of the route: 12m\nLoad of the route: 6\n"
        );
    }

    #[test]
    fn test_unused_vehicle() {
        let inst = instance(&[(0.0, 0.0), (0.0, 6.0)], &[0, 6], &[10, 10]);
        let report = RouteReport::new(&inst, &Route::empty(1, 0));
        assert_eq!(
            report.stops(),
            &[Stop { node: 0, load: 0 }, Stop { node: 0, load: 0 }]
        );
        assert_eq!(
            report.to_string(),
            "Route for vehicle 1:\n 0 Load(0) ->  0 Load(0)\nDistance of the route: 0m\nLoad of the route: 0\n"
        );
    }

    #[test]
    fn test_full_report_and_totals() {
        let inst = instance(
            &[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0), (-4.0, 0.0)],
            &[0, 5, 5, 2],
            &[10, 10],
        );
        let solution = Solution::new(
            vec![Route::new(0, 0, vec![1, 2]), Route::new(1, 0, vec![3])],
            20,
        );
        let report = SolutionReport::new(&inst, &solution);

        assert_eq!(report.routes()[0].distance(), 12);
        assert_eq!(report.routes()[1].distance(), 8);
        assert_eq!(report.total_distance(), 20);
        assert_eq!(report.total_load(), 12);
        assert_eq!(
            report.routes()[0].stops().iter().map(|s| s.load).collect::<Vec<_>>(),
            vec![0, 5, 10, 10]
        );

        let text = report.to_string();
        assert!(text.contains("Load of the route: 10\n\nRoute for vehicle 1:\n"));
        assert!(text.ends_with(
            "Load of the route: 2\n\nTotal distance of all routes: 20m\nTotal load of all routes: 12"
        ));
    }
}
