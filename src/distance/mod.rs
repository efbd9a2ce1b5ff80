//! Distance matrices.
//!
//! Provides a dense integer distance matrix built from node coordinates.

mod matrix;

pub use matrix::DistanceMatrix;
