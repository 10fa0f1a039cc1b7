//! Reversible domain bookkeeping for the forward-checking solver.
//!
//! A [`ForwardCheckContext`] tracks, for every variable, which domain values
//! are still candidates (the live mask) and whether the variable has been
//! assigned by the current search. Pruning is recorded in a [`PruneLog`] so
//! it can be undone exactly when the search backtracks: after a frame's
//! [`PruneLog::undo_to`], the masks are bit-for-bit what they were when the
//! frame recorded its [`PruneLog::mark`].

use std::time::Instant;

use tracing::debug;

use crate::solver::{
    assignment::{Assignment, DomainValue},
    engine::{SearchStats, VariableId},
    problem::Problem,
};

/// Per-variable live-value masks plus assigned flags, owned by one search.
///
/// The masks for all variables live in a single flat buffer indexed through
/// a per-variable offset table, so creating a context is two allocations
/// regardless of the number of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardCheckContext {
    /// `offsets[v]..offsets[v + 1]` is variable `v`'s slice of `live`.
    offsets: Vec<usize>,
    live: Vec<bool>,
    assigned: Vec<bool>,
}

impl ForwardCheckContext {
    /// Creates a context for `problem` with every value live and every
    /// variable unassigned.
    pub fn new<D>(problem: &Problem<D>) -> Self {
        let num_variables = problem.num_variables();
        let mut offsets = Vec::with_capacity(num_variables + 1);
        let mut total = 0;
        offsets.push(0);
        for variable in 0..num_variables {
            total += problem.domain_size(variable);
            offsets.push(total);
        }
        Self {
            offsets,
            live: vec![true; total],
            assigned: vec![false; num_variables],
        }
    }

    pub fn num_variables(&self) -> usize {
        self.assigned.len()
    }

    /// The original domain size of `variable`.
    pub fn domain_size(&self, variable: VariableId) -> usize {
        self.offsets[variable + 1] - self.offsets[variable]
    }

    pub fn is_live(&self, variable: VariableId, value: DomainValue) -> bool {
        debug_assert!(value < self.domain_size(variable));
        self.live[self.offsets[variable] + value]
    }

    /// The number of values still live for `variable`.
    pub fn live_count(&self, variable: VariableId) -> usize {
        self.mask(variable).iter().filter(|&&bit| bit).count()
    }

    /// The live values of `variable`, ascending.
    pub fn live_values(&self, variable: VariableId) -> impl Iterator<Item = DomainValue> + '_ {
        self.mask(variable)
            .iter()
            .enumerate()
            .filter_map(|(value, &bit)| bit.then_some(value))
    }

    /// The smallest live value of `variable`, if any value is live.
    pub fn first_live(&self, variable: VariableId) -> Option<DomainValue> {
        self.live_values(variable).next()
    }

    /// Removes `value` from `variable`'s candidates.
    pub fn kill(&mut self, variable: VariableId, value: DomainValue) {
        debug_assert!(value < self.domain_size(variable));
        self.live[self.offsets[variable] + value] = false;
    }

    /// Reinstates `value` as a candidate for `variable`.
    pub fn revive(&mut self, variable: VariableId, value: DomainValue) {
        debug_assert!(value < self.domain_size(variable));
        self.live[self.offsets[variable] + value] = true;
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assigned[variable]
    }

    pub fn set_assigned(&mut self, variable: VariableId, flag: bool) {
        self.assigned[variable] = flag;
    }

    pub fn all_assigned(&self) -> bool {
        self.assigned.iter().all(|&flag| flag)
    }

    fn mask(&self, variable: VariableId) -> &[bool] {
        &self.live[self.offsets[variable]..self.offsets[variable + 1]]
    }

    /// Enforces the problem's unary constraints before search begins.
    ///
    /// For every unary constraint over a variable `x`, each value of `x` is
    /// probed against the predicate and killed on failure. A variable that a
    /// unary constraint collapses to exactly one candidate is flagged
    /// assigned and its value written into `assignment`, which is how
    /// pre-filled puzzle cells take effect immediately. The probes run with
    /// the caller's `data`, so unary predicates see the same data here as
    /// they will during search.
    ///
    /// These kills are permanent for the lifetime of the context and are
    /// deliberately not routed through any [`PruneLog`].
    pub fn seed_unary<D>(&mut self, problem: &Problem<D>, assignment: &mut Assignment, data: &D) {
        for constraint in problem.constraints() {
            if constraint.arity() != 1 {
                continue;
            }
            let variable = constraint.variable(0);
            if self.assigned[variable] {
                continue;
            }
            for value in 0..self.domain_size(variable) {
                if !self.is_live(variable, value) {
                    continue;
                }
                assignment.set(variable, value);
                if !constraint.holds(assignment, data) {
                    self.kill(variable, value);
                }
            }
            if self.live_count(variable) == 1 {
                let value = self.first_live(variable).unwrap();
                assignment.set(variable, value);
                self.assigned[variable] = true;
                debug!(variable, value, "unary constraint collapsed variable");
            }
        }
    }

    /// Prunes the neighbors of the just-assigned `variable`.
    ///
    /// Walks every binary constraint whose scope contains `variable` and one
    /// unassigned variable `y`, probes each live value of `y` against the
    /// predicate, and kills the failures, recording every kill in `log`.
    /// Only arity-2 constraints participate; higher-arity constraints are
    /// still enforced by the consistency oracle once their scopes fill.
    /// `assignment` positions belonging to unassigned variables are used as
    /// probe scratch.
    pub fn prune_neighbors<D>(
        &mut self,
        problem: &Problem<D>,
        assignment: &mut Assignment,
        data: &D,
        variable: VariableId,
        log: &mut PruneLog,
        stats: &mut SearchStats,
    ) {
        for (id, constraint) in problem.constraints().iter().enumerate() {
            if constraint.arity() != 2 {
                continue;
            }
            let scope = constraint.scope();
            let other = if scope[0] == variable {
                scope[1]
            } else if scope[1] == variable {
                scope[0]
            } else {
                continue;
            };
            if self.assigned[other] {
                continue;
            }
            let entry = stats.constraint_stats.entry(id).or_default();
            let start = Instant::now();
            for value in 0..self.domain_size(other) {
                if !self.is_live(other, value) {
                    continue;
                }
                assignment.set(other, value);
                entry.evaluations += 1;
                if !constraint.holds(assignment, data) {
                    self.kill(other, value);
                    log.record(other, value);
                    entry.prunings += 1;
                }
            }
            entry.time_spent_micros += start.elapsed().as_micros() as u64;
        }
    }
}

/// A position in a [`PruneLog`], taken on frame entry and undone to on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneMark(usize);

/// The record of every value killed by forward checking, shared by all
/// recursion frames of one search.
///
/// Each frame takes a [`mark`](PruneLog::mark) before pruning and undoes to
/// it on every non-success exit path, which restores the context's masks in
/// reverse kill order. One growable stack replaces a per-frame pair of
/// counts/values arrays while preserving the same stack discipline.
#[derive(Debug, Default)]
pub struct PruneLog {
    entries: Vec<(VariableId, DomainValue)>,
}

impl PruneLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current log position; kills recorded after this call are undone
    /// by `undo_to` with the returned mark.
    pub fn mark(&self) -> PruneMark {
        PruneMark(self.entries.len())
    }

    pub fn record(&mut self, variable: VariableId, value: DomainValue) {
        self.entries.push((variable, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Revives every kill recorded since `mark`, newest first, and truncates
    /// the log back to `mark`.
    pub fn undo_to(&mut self, mark: PruneMark, context: &mut ForwardCheckContext) {
        debug_assert!(mark.0 <= self.entries.len());
        while self.entries.len() > mark.0 {
            let (variable, value) = self.entries.pop().unwrap();
            context.revive(variable, value);
        }
    }
}
