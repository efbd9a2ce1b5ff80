//! Domain model types for capacitated vehicle routing.
//!
//! Provides nodes with demands, vehicles with capacities, the validated
//! problem instance, routes as ordered sequences of visits, and the solver
//! outcome.

mod node;
mod problem;
mod route;
mod solution;
mod vehicle;

pub use node::Node;
pub use problem::{ProblemData, ProblemInstance};
pub use route::Route;
pub use solution::{Solution, SolveOutcome, Violation};
pub use vehicle::Vehicle;
