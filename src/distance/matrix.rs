//! Dense integer distance matrix.

use crate::error::CvrpError;

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Euclidean distances are truncated toward zero, so `(0, 0) → (1, 1)`
/// costs 1 rather than 1.414 or 2. Every cost handed to the solver and every
/// total printed in a report is derived from these truncated values.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coordinates(&[0.0, 0.0, 4.0], &[0.0, 3.0, 0.0]).unwrap();
/// assert_eq!(dm.get(0, 1), 3);
/// assert_eq!(dm.get(1, 2), 5);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes a truncated Euclidean distance matrix from two coordinate
    /// sequences.
    ///
    /// # Errors
    ///
    /// [`CvrpError::InvalidInput`] if the sequences differ in length, are
    /// empty, contain a non-finite value, or two points lie too far apart
    /// for an `i64` distance.
    pub fn from_coordinates(xs: &[f64], ys: &[f64]) -> Result<Self, CvrpError> {
        if xs.len() != ys.len() {
            return Err(CvrpError::InvalidInput(format!(
                "{} x-coordinates but {} y-coordinates",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(CvrpError::InvalidInput(
                "at least one node is required".to_string(),
            ));
        }
        if let Some(i) = (0..xs.len()).find(|&i| !xs[i].is_finite() || !ys[i].is_finite()) {
            return Err(CvrpError::InvalidInput(format!(
                "node {i} has a non-finite coordinate ({}, {})",
                xs[i], ys[i]
            )));
        }

        let n = xs.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = truncated_euclidean(xs[i], ys[i], xs[j], ys[j]).ok_or_else(|| {
                    CvrpError::InvalidInput(format!(
                        "distance between nodes {i} and {j} does not fit an integer cost"
                    ))
                })?;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Euclidean distance between two points, truncated toward zero.
///
/// `None` when the distance is not representable as an `i64`.
fn truncated_euclidean(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<i64> {
    let dx = x1 - x2;
    let dy = y1 - y2;
    let d = (dx * dx + dy * dy).sqrt().trunc();
    (d.is_finite() && d < i64::MAX as f64).then_some(d as i64)
}
