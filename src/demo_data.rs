//! Built-in demonstration instance: 32 nodes, depot 0, five vehicles of
//! capacity 100.

use crate::models::ProblemData;

const X: [f64; 32] = [
    82.0, 96.0, 50.0, 49.0, 13.0, 29.0, 58.0, 84.0, 14.0, 2.0, 3.0, 5.0, 98.0, 84.0, 61.0, 1.0,
    88.0, 91.0, 19.0, 93.0, 50.0, 98.0, 5.0, 42.0, 61.0, 9.0, 80.0, 57.0, 23.0, 20.0, 85.0, 98.0,
];

const Y: [f64; 32] = [
    76.0, 44.0, 5.0, 8.0, 7.0, 89.0, 30.0, 39.0, 24.0, 39.0, 82.0, 10.0, 52.0, 25.0, 59.0, 65.0,
    51.0, 2.0, 32.0, 3.0, 93.0, 14.0, 42.0, 9.0, 62.0, 97.0, 55.0, 69.0, 15.0, 70.0, 60.0, 5.0,
];

const DEMANDS: [i64; 32] = [
    0, 19, 21, 6, 19, 7, 12, 16, 6, 16, 8, 14, 21, 16, 3, 22, 18, 19, 1, 24, 8, 12, 4, 8, 24, 24,
    2, 20, 15, 2, 14, 9,
];

const NUM_VEHICLES: usize = 5;
const CAPACITY: i64 = 100;

/// The demonstration problem.
pub fn demo_problem() -> ProblemData {
    ProblemData::with_uniform_capacity(
        X.to_vec(),
        Y.to_vec(),
        DEMANDS.to_vec(),
        NUM_VEHICLES,
        CAPACITY,
        0,
    )
}
