//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{context::ForwardCheckContext, engine::VariableId};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned variable the solver should branch on next, based on the
/// forward-check context's live masks and assigned flags.
pub trait VariableSelection {
    /// Selects the next variable to be assigned.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of the chosen variable, if any variable is still
    ///   unassigned.
    /// * `None` if every variable is already assigned.
    fn select(&self, context: &ForwardCheckContext) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable, ordered by
/// [`VariableId`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectFirst;

impl VariableSelection for SelectFirst {
    fn select(&self, context: &ForwardCheckContext) -> Option<VariableId> {
        (0..context.num_variables()).find(|&variable| !context.is_assigned(variable))
    }
}

/// A heuristic that selects the unassigned variable with the Minimum
/// Remaining Values in its live mask.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, which tends to prune the search space early. In case of a tie,
/// the variable with the lower [`VariableId`] is chosen to ensure
/// determinism.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn select(&self, context: &ForwardCheckContext) -> Option<VariableId> {
        (0..context.num_variables())
            .filter(|&variable| !context.is_assigned(variable))
            // Primary criterion: live count (ascending)
            // Secondary criterion: variable id (ascending, for tie-breaking)
            .min_by_key(|&variable| (context.live_count(variable), variable))
    }
}
