//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Violation;

/// Errors raised while building, solving or reporting a routing problem.
#[derive(Debug, Error)]
pub enum CvrpError {
    /// Malformed raw input (coordinates).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed problem instance (lengths, depot, capacities).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The routing solver failed internally.
    #[error("solver failure: {0}")]
    Solver(#[from] SolverError),

    /// The solver returned routes through nodes the problem does not have.
    #[error("solver returned an unusable solution: {0:?}")]
    InvalidSolution(Vec<Violation>),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report")]
    Write(#[source] std::io::Error),

    #[error("failed to parse problem file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to render chart: {0}")]
    Plot(String),
}

/// Opaque failures raised inside a [`RoutingSolver`](crate::solver::RoutingSolver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("routing model has no vehicles")]
    NoVehicles,

    #[error("depot {depot} is outside the model's {nodes} nodes")]
    DepotOutOfRange { depot: usize, nodes: usize },

    #[error("capacity dimension declares {declared} vehicles, model has {expected}")]
    DimensionMismatch { declared: usize, expected: usize },

    #[error("arc cost callback returned {cost} for arc {from} -> {to}")]
    NegativeArcCost { from: usize, to: usize, cost: i64 },

    #[error("demand callback returned {demand} for node {node}")]
    NegativeDemand { node: usize, demand: i64 },

    #[error("total demand does not fit an i64")]
    DemandOverflow,

    #[error("arc costs up to {max_arc} overflow route cost sums")]
    CostOverflow { max_arc: i64 },
}
