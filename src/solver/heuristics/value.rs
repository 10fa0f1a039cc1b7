//! Heuristics that decide the order in which a variable's live values are
//! tried.

use crate::solver::{
    assignment::{Assignment, DomainValue},
    context::ForwardCheckContext,
    engine::VariableId,
    problem::Problem,
};

/// A trait for strategies that determine the order of values to try for a
/// variable.
///
/// An orderer may write speculative values into `assignment` positions that
/// belong to unassigned variables (those positions are scratch by contract),
/// but it must leave the context's live masks and assigned flags untouched.
pub trait ValueOrdering<D> {
    /// Returns `variable`'s live values in the order they should be tried.
    fn order(
        &self,
        problem: &Problem<D>,
        context: &ForwardCheckContext,
        assignment: &mut Assignment,
        data: &D,
        variable: VariableId,
    ) -> Vec<DomainValue>;
}

/// The identity orderer: live values in ascending order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AscendingValues;

impl<D> ValueOrdering<D> for AscendingValues {
    fn order(
        &self,
        _problem: &Problem<D>,
        context: &ForwardCheckContext,
        _assignment: &mut Assignment,
        _data: &D,
        variable: VariableId,
    ) -> Vec<DomainValue> {
        context.live_values(variable).collect()
    }
}

/// The Least Constraining Value orderer.
///
/// Each live value `u` of the variable is scored by the number of conflicts
/// it would inflict on the neighbors: for every binary constraint linking
/// the variable to an unassigned variable `y`, the score counts the live
/// values of `y` that the predicate rejects once `u` is written into the
/// snapshot. Values are returned in ascending score order; the sort is
/// stable and candidates are scored in ascending value order, so ties stay
/// ascending by value.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastConstrainingValue;

impl<D> ValueOrdering<D> for LeastConstrainingValue {
    fn order(
        &self,
        problem: &Problem<D>,
        context: &ForwardCheckContext,
        assignment: &mut Assignment,
        data: &D,
        variable: VariableId,
    ) -> Vec<DomainValue> {
        let candidates: Vec<DomainValue> = context.live_values(variable).collect();
        let mut scored: Vec<(usize, DomainValue)> = Vec::with_capacity(candidates.len());

        for &candidate in &candidates {
            assignment.set(variable, candidate);
            let mut conflicts = 0;
            for constraint in problem.constraints() {
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
                if context.is_assigned(other) {
                    continue;
                }
                for neighbor_value in context.live_values(other) {
                    assignment.set(other, neighbor_value);
                    if !constraint.holds(assignment, data) {
                        conflicts += 1;
                    }
                }
            }
            scored.push((conflicts, candidate));
        }

        // A stable sort on the score alone keeps equal-score values in their
        // ascending insertion order.
        scored.sort_by_key(|&(conflicts, _)| conflicts);
        scored.into_iter().map(|(_, value)| value).collect()
    }
}
