//! Capacity repair.
//!
//! Fallback for when the construction heuristics leave customers unplaced.
//!
//! # Algorithm
//!
//! 1. Best-fit decreasing: customers by decreasing demand, each onto the
//!    vehicle whose remaining capacity fits it most tightly. A customer that
//!    fits nowhere goes to the vehicle with the most room left.
//! 2. Overload descent: relocate or swap single customers between vehicles
//!    while that lowers the total overload `Σ max(0, load - capacity)`. At a
//!    local minimum with overload left, a random customer of an overloaded
//!    vehicle moves to a random other vehicle.
//! 3. Once nothing is overloaded, each vehicle's customers are sequenced
//!    nearest neighbour first from the depot.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::metaheuristic::SearchBudget;
use crate::solver::RoutingModel;

/// Looks for a capacity-feasible assignment within `budget`.
///
/// Returns one customer sequence per vehicle, or `None` when the budget runs
/// out first. Gives up immediately when the total demand exceeds the fleet's
/// capacity or a single customer fits no vehicle.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::constructive::repair;
/// use u_cvrp::metaheuristic::SearchBudget;
/// use u_cvrp::models::{ProblemData, ProblemInstance};
/// use u_cvrp::solver::RoutingModel;
///
/// let data = ProblemData::with_uniform_capacity(
///     vec![0.0, 1.0, 2.0, 3.0, 4.0],
///     vec![0.0; 5],
///     vec![0, 5, 4, 6, 5],
///     2,
///     10,
///     0,
/// );
/// let instance = ProblemInstance::from_data(&data).unwrap();
/// let model = RoutingModel::from_instance(&instance);
///
/// let budget = SearchBudget::new(Duration::from_secs(1), Some(100));
/// let routes = repair(&model, 0, &budget).unwrap();
/// assert!(routes.iter().all(|r| model.route_load(r) <= 10));
/// ```
pub fn repair(model: &RoutingModel<'_>, seed: u64, budget: &SearchBudget) -> Option<Vec<Vec<usize>>> {
    let vehicles = model.vehicle_count();
    let customers: Vec<usize> = model.customers().collect();

    let total_demand: i64 = customers.iter().map(|&c| model.demand(c)).sum();
    let total_capacity = (0..vehicles).fold(0i64, |acc, v| acc.saturating_add(model.capacity(v)));
    if total_demand > total_capacity || customers.iter().any(|&c| model.demand(c) > model.max_capacity()) {
        debug!("Fleet cannot carry the demand (demand {}, capacity {})", total_demand, total_capacity);
        return None;
    }

    let mut plan = Assignment::best_fit_decreasing(model, customers);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut iteration = 0;

    while plan.overload(model) > 0 {
        if budget.exhausted(iteration) {
            debug!("Repair stopped after {} iterations, overload {}", iteration, plan.overload(model));
            return None;
        }
        iteration += 1;
        if !plan.descend(model) {
            plan.perturb(model, &mut rng);
        }
    }

    debug!("Repair reached a feasible assignment after {} iterations", iteration);
    Some(
        plan.members
            .into_iter()
            .map(|members| sequence(model, members))
            .collect(),
    )
}

/// Unordered customers per vehicle with their loads.
#[derive(Debug, Clone)]
struct Assignment {
    members: Vec<Vec<usize>>,
    loads: Vec<i64>,
}

#[derive(Debug, Clone, Copy)]
enum Shift {
    Relocate { from: usize, pos: usize, to: usize },
    Swap { from: usize, pos: usize, to: usize, other: usize },
}

impl Assignment {
    fn best_fit_decreasing(model: &RoutingModel<'_>, mut customers: Vec<usize>) -> Self {
        let vehicles = model.vehicle_count();
        let mut plan = Self {
            members: vec![Vec::new(); vehicles],
            loads: vec![0; vehicles],
        };

        // Stable, so equal demands keep index order
        customers.sort_by_key(|&c| std::cmp::Reverse(model.demand(c)));
        for customer in customers {
            let demand = model.demand(customer);
            let room = |v: usize| model.capacity(v) - plan.loads[v];
            let vehicle = (0..vehicles)
                .filter(|&v| model.fits(v, plan.loads[v] + demand))
                .min_by_key(|&v| room(v))
                .or_else(|| (0..vehicles).max_by_key(|&v| room(v)))
                .unwrap_or(0);
            plan.members[vehicle].push(customer);
            plan.loads[vehicle] += demand;
        }
        plan
    }

    fn excess(model: &RoutingModel<'_>, vehicle: usize, load: i64) -> i64 {
        (load - model.capacity(vehicle)).max(0)
    }

    fn overload(&self, model: &RoutingModel<'_>) -> i64 {
        self.loads
            .iter()
            .enumerate()
            .map(|(v, &load)| Self::excess(model, v, load))
            .sum()
    }

    /// Applies the relocate or swap that lowers the overload most.
    /// Returns `false` at a local minimum.
    fn descend(&mut self, model: &RoutingModel<'_>) -> bool {
        let mut best: Option<(i64, Shift)> = None;
        let mut consider = |delta: i64, shift: Shift| {
            if delta < 0 && best.is_none_or(|(d, _)| delta < d) {
                best = Some((delta, shift));
            }
        };

        for from in 0..self.members.len() {
            let load_from = self.loads[from];
            if Self::excess(model, from, load_from) == 0 {
                continue;
            }
            for (pos, &customer) in self.members[from].iter().enumerate() {
                let demand = model.demand(customer);
                for to in (0..self.members.len()).filter(|&to| to != from) {
                    let load_to = self.loads[to];
                    let before = Self::excess(model, from, load_from) + Self::excess(model, to, load_to);
                    let after = |shift: i64| {
                        Self::excess(model, from, load_from - shift) + Self::excess(model, to, load_to + shift)
                    };

                    consider(after(demand) - before, Shift::Relocate { from, pos, to });
                    for (other, &swapped) in self.members[to].iter().enumerate() {
                        let shift = demand - model.demand(swapped);
                        consider(after(shift) - before, Shift::Swap { from, pos, to, other });
                    }
                }
            }
        }

        match best {
            Some((_, shift)) => {
                self.apply(model, shift);
                true
            }
            None => false,
        }
    }

    /// Moves a random customer off a random overloaded vehicle.
    fn perturb(&mut self, model: &RoutingModel<'_>, rng: &mut StdRng) {
        let vehicles = self.members.len();
        let overloaded: Vec<usize> = (0..vehicles)
            .filter(|&v| Self::excess(model, v, self.loads[v]) > 0 && !self.members[v].is_empty())
            .collect();
        if overloaded.is_empty() || vehicles < 2 {
            return;
        }

        let from = overloaded[rng.random_range(0..overloaded.len())];
        let pos = rng.random_range(0..self.members[from].len());
        let mut to = rng.random_range(0..vehicles - 1);
        if to >= from {
            to += 1;
        }
        self.apply(model, Shift::Relocate { from, pos, to });
    }

    fn apply(&mut self, model: &RoutingModel<'_>, shift: Shift) {
        match shift {
            Shift::Relocate { from, pos, to } => {
                let customer = self.members[from].swap_remove(pos);
                let demand = model.demand(customer);
                self.loads[from] -= demand;
                self.loads[to] += demand;
                self.members[to].push(customer);
            }
            Shift::Swap { from, pos, to, other } => {
                let a = self.members[from][pos];
                let b = self.members[to][other];
                let shift = model.demand(a) - model.demand(b);
                self.members[from][pos] = b;
                self.members[to][other] = a;
                self.loads[from] -= shift;
                self.loads[to] += shift;
            }
        }
    }
}

/// Orders `pending` by repeatedly visiting the nearest remaining customer.
fn sequence(model: &RoutingModel<'_>, mut pending: Vec<usize>) -> Vec<usize> {
    let mut route = Vec::with_capacity(pending.len());
    let mut current = model.depot();
    while let Some(pos) = (0..pending.len()).min_by_key(|&i| (model.arc_cost(current, pending[i]), pending[i])) {
        current = pending.swap_remove(pos);
        route.push(current);
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::instance;
    use std::time::Duration;

    fn assert_feasible(model: &RoutingModel<'_>, routes: &[Vec<usize>]) {
        assert_eq!(routes.len(), model.vehicle_count());
        for (v, route) in routes.iter().enumerate() {
            assert!(model.fits(v, model.route_load(route)), "vehicle {v}: {route:?}");
        }
        let mut served: Vec<usize> = routes.iter().flatten().copied().collect();
        served.sort_unstable();
        assert_eq!(served, model.customers().collect::<Vec<_>>());
    }

    #[test]
    fn test_best_fit_decreasing_packs_tight_fleet() {
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)],
            &[0, 5, 4, 6, 5],
            &[10, 10],
        );
        let model = RoutingModel::from_instance(&inst);
        let budget = SearchBudget::new(Duration::from_secs(5), Some(10));
        let routes = repair(&model, 0, &budget).expect("feasible");
        assert_feasible(&model, &routes);
    }

    #[test]
    fn test_swap_clears_overload_left_by_best_fit() {
        // Best fit puts 4 + 4 + 3 on the first vehicle; one swap balances it
        let inst = instance(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (5.0, 0.0), (6.0, 0.0)],
            &[0, 4, 4, 3, 3, 3, 3],
            &[10, 10],
        );
        let model = RoutingModel::from_instance(&inst);
        let plan = Assignment::best_fit_decreasing(&model, model.customers().collect());
        assert_eq!(plan.overload(&model), 1);

        let budget = SearchBudget::new(Duration::from_secs(5), Some(10));
        let routes = repair(&model, 0, &budget).expect("feasible");
        assert_feasible(&model, &routes);
    }

    #[test]
    fn test_sequence_nearest_first() {
        let inst = instance(&[(0.0, 0.0), (9.0, 0.0), (1.0, 0.0), (4.0, 0.0)], &[0, 1, 1, 1], &[10]);
        let model = RoutingModel::from_instance(&inst);
        assert_eq!(sequence(&model, vec![1, 2, 3]), vec![2, 3, 1]);
    }

    #[test]
    fn test_gives_up_on_undersized_fleet() {
        let inst = instance(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)], &[0, 10, 5], &[10]);
        let model = RoutingModel::from_instance(&inst);
        let budget = SearchBudget::new(Duration::MAX, None);
        assert!(repair(&model, 0, &budget).is_none());
    }

    #[test]
    fn test_budget_bounds_unsolvable_packing() {
        // Demand 18 fits 20 units of capacity, but no two customers share a vehicle
        let inst = instance(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], &[0, 6, 6, 6], &[10, 10]);
        let model = RoutingModel::from_instance(&inst);
        let budget = SearchBudget::new(Duration::from_secs(60), Some(25));
        assert!(repair(&model, 3, &budget).is_none());
    }
}
