use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    solver::{assignment::Assignment, problem::Problem, strategy::SearchStrategy},
};

/// A numeric identifier for a single variable in the constraint problem.
pub type VariableId = usize;
/// A numeric identifier for a single constraint in the constraint problem.
pub type ConstraintId = usize;

/// Holds performance statistics for a single constraint.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct PerConstraintStats {
    /// The number of times this constraint's predicate was evaluated.
    pub evaluations: u64,
    /// The number of values this constraint removed from live domains.
    pub prunings: u64,
    /// The total time spent evaluating this constraint, in microseconds.
    pub time_spent_micros: u64,
}

/// Holds statistics for the entire search process.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// The total number of nodes (search frames) visited in the search tree.
    pub nodes_visited: u64,
    /// The total number of times the search backtracked.
    pub backtracks: u64,
    /// A map from [`ConstraintId`] to the performance statistics for that constraint.
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The main engine for solving constraint satisfaction problems.
///
/// The `SolverEngine` is responsible for orchestrating the search process. It
/// takes a fully built [`Problem`] and finds a satisfying assignment by
/// delegating to a configurable [`SearchStrategy`].
pub struct SolverEngine<D> {
    strategy: Box<dyn SearchStrategy<D>>,
}

impl<D> SolverEngine<D> {
    /// Creates a new `SolverEngine` with the specified search strategy.
    ///
    /// The strategy defines the algorithm used to find a solution (e.g.,
    /// chronological backtracking or forward checking).
    pub fn new(strategy: Box<dyn SearchStrategy<D>>) -> Self {
        Self { strategy }
    }

    /// Attempts to solve the given constraint satisfaction problem.
    ///
    /// This method delegates the entire solving process to the
    /// [`SearchStrategy`] that was provided when the engine was created.
    ///
    /// # Arguments
    ///
    /// * `problem`: The fully built problem to solve.
    /// * `data`: Caller data handed verbatim to every predicate evaluation.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` if a complete solution is found.
    /// * `Ok((None, stats))` if the search space is exhausted, or if the
    ///   strategy's cancellation token was tripped mid-search.
    /// * `Err(error)` if an error occurs during the solving process.
    pub fn solve(&self, problem: &Problem<D>, data: &D) -> Result<(Option<Assignment>, SearchStats)> {
        self.strategy.solve(problem, data)
    }
}
