//! # u-cvrp
//!
//! Capacitated vehicle routing: model a depot, customers with demands and a
//! capacity-limited fleet, search for low-cost routes within a time limit,
//! then print a route summary and plot the routes.
//!
//! ## Modules
//!
//! - [`distance`] — Truncated Euclidean distance matrix
//! - [`models`] — Domain model types (Node, Vehicle, Route, Solution, ProblemInstance)
//! - [`solver`] — Solver boundary: callbacks, routing model, search parameters, [`solver::RoutingSolver`]
//! - [`constructive`] — First solution heuristics (path cheapest arc, Clarke-Wright savings)
//! - [`local_search`] — Neighbourhood operators (2-opt, Or-opt, relocate, swap, 2-opt*)
//! - [`metaheuristic`] — Greedy descent, tabu search, simulated annealing, guided local search
//! - [`evaluation`] — Solution feasibility checking
//! - [`report`] — Text route summary and SVG route chart
//! - [`config`] / [`pipeline`] — JSON run configuration and the end-to-end run
//!
//! ## Quick start
//!
//! ```
//! use std::time::Duration;
//! use u_cvrp::models::{ProblemData, ProblemInstance};
//! use u_cvrp::report::SolutionReport;
//! use u_cvrp::solver::{LocalSearchSolver, RoutingModel, RoutingSolver, SearchParameters};
//!
//! let data = ProblemData::with_uniform_capacity(
//!     vec![0.0, 0.0, 4.0],
//!     vec![0.0, 3.0, 0.0],
//!     vec![0, 5, 5],
//!     1,
//!     10,
//!     0,
//! );
//! let instance = ProblemInstance::from_data(&data).unwrap();
//! let model = RoutingModel::from_instance(&instance);
//! let params = SearchParameters::default()
//!     .with_time_limit(Duration::from_secs(1))
//!     .with_iteration_limit(50);
//!
//! if let Some(solution) = LocalSearchSolver.solve(&model, &params).unwrap().solution() {
//!     println!("{}", SolutionReport::new(&instance, solution));
//! }
//! ```

pub mod config;
pub mod constructive;
pub mod demo_data;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod metaheuristic;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod solver;

pub use error::{CvrpError, SolverError};
