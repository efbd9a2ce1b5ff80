use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::solver::SearchParameters;

/// Wall-clock deadline plus an optional iteration cap.
///
/// A time limit too large to represent as an [`Instant`] means no deadline.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    started: Instant,
    deadline: Option<Instant>,
    time_limit: Duration,
    iteration_limit: Option<u64>,
}

impl SearchBudget {
    /// Starts the clock now.
    pub fn new(time_limit: Duration, iteration_limit: Option<u64>) -> Self {
        let started = Instant::now();
        Self {
            started,
            deadline: started.checked_add(time_limit),
            time_limit,
            iteration_limit,
        }
    }

    /// Starts the clock with the limits in `params`.
    pub fn from_params(params: &SearchParameters) -> Self {
        Self::new(params.time_limit, params.iteration_limit)
    }

    /// Whether the search must stop after `iteration` iterations.
    pub fn exhausted(&self, iteration: u64) -> bool {
        self.iteration_limit.is_some_and(|limit| iteration >= limit)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Fraction of the budget used, in `[0, 1]`.
    ///
    /// The larger of the elapsed-time and iteration fractions.
    pub fn progress(&self, iteration: u64) -> f64 {
        let by_time = if self.deadline.is_some() && !self.time_limit.is_zero() {
            self.elapsed().as_secs_f64() / self.time_limit.as_secs_f64()
        } else {
            0.0
        };
        let by_iterations = match self.iteration_limit {
            Some(0) => 1.0,
            Some(limit) => iteration as f64 / limit as f64,
            None => 0.0,
        };
        by_time.max(by_iterations).clamp(0.0, 1.0)
    }

    /// Time since the budget was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Search progress reporting.
///
/// With `log_search` on, events go out at `info`; otherwise at `debug`.
#[derive(Debug, Clone, Copy)]
pub struct SearchLog {
    enabled: bool,
}

impl SearchLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn from_params(params: &SearchParameters) -> Self {
        Self::new(params.log_search)
    }

    /// A first feasible solution was built.
    pub fn first_solution(&self, strategy: impl std::fmt::Display, cost: i64, elapsed: Duration) {
        if self.enabled {
            info!("First solution ({}) - Costs = {}, Took {:?}", strategy, cost, elapsed);
        } else {
            debug!("First solution ({}) - Costs = {}, Took {:?}", strategy, cost, elapsed);
        }
    }

    /// A new best solution was found.
    pub fn improved(&self, iteration: u64, cost: i64, elapsed: Duration) {
        if self.enabled {
            info!("Iteration {} - New best Costs = {}, Elapsed {:?}", iteration, cost, elapsed);
        } else {
            debug!("Iteration {} - New best Costs = {}, Elapsed {:?}", iteration, cost, elapsed);
        }
    }

    /// The search stopped.
    pub fn finished(&self, name: &str, iterations: u64, cost: i64, elapsed: Duration) {
        if self.enabled {
            info!(
                "{} finished after {} iterations - Costs = {}, Took {:?}",
                name, iterations, cost, elapsed
            );
        } else {
            debug!(
                "{} finished after {} iterations - Costs = {}, Took {:?}",
                name, iterations, cost, elapsed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_limit() {
        let budget = SearchBudget::new(Duration::from_secs(60), Some(10));
        assert!(!budget.exhausted(9));
        assert!(budget.exhausted(10));
        assert!((budget.progress(5) - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_zero_time_limit_is_exhausted() {
        let budget = SearchBudget::new(Duration::ZERO, None);
        assert!(budget.exhausted(0));
        assert_eq!(budget.progress(0), 0.0);
    }

    #[test]
    fn test_huge_time_limit_never_expires() {
        let budget = SearchBudget::new(Duration::MAX, None);
        assert!(!budget.exhausted(u64::MAX));
        assert_eq!(budget.progress(1_000), 0.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        let budget = SearchBudget::new(Duration::from_secs(60), Some(4));
        assert_eq!(budget.progress(100), 1.0);
        assert_eq!(SearchBudget::new(Duration::from_secs(60), Some(0)).progress(0), 1.0);
    }
}
