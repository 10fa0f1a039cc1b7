use tracing::debug;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        cancel::CancelToken,
        consistency,
        context::{ForwardCheckContext, PruneLog},
        engine::SearchStats,
        heuristics::{
            value::{LeastConstrainingValue, ValueOrdering},
            variable::{MinimumRemainingValues, VariableSelection},
        },
        problem::Problem,
    },
};

/// A type alias for a boxed [`SearchStrategy`].
pub type BoxedSearchStrategy<D> = Box<dyn SearchStrategy<D>>;

/// A trait for defining a search algorithm to be used by the
/// [`SolverEngine`](crate::solver::engine::SolverEngine).
///
/// This allows for modular and composable search behaviors: plain
/// chronological backtracking and forward checking ship with the crate, and
/// hosts may add their own.
pub trait SearchStrategy<D> {
    /// Attempts to find a satisfying assignment for `problem` under `data`.
    ///
    /// # Returns
    ///
    /// A [`Result`] containing a tuple of an `Option<Assignment>` (the first
    /// solution found, or `None` if the space was exhausted or the search
    /// was cancelled) and the [`SearchStats`] for the run.
    fn solve(&self, problem: &Problem<D>, data: &D) -> Result<(Option<Assignment>, SearchStats)>;
}

/// How one forward-checking frame (and ultimately the search) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Solved,
    Exhausted,
    Cancelled,
}

/// A [`SearchStrategy`] implementing plain chronological backtracking.
///
/// Variables are assigned in identifier order and values tried in ascending
/// order, with a frontier-based consistency check after every assignment.
/// No pruning is performed and cancellation is not polled; this is the
/// baseline the forward-checking strategy is measured against.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSearch;

impl BacktrackingSearch {
    pub fn new() -> Self {
        Self
    }

    /// Returns the strategy as a boxed trait object.
    pub fn boxed<D>() -> BoxedSearchStrategy<D> {
        Box::new(Self::new())
    }

    fn search<D>(
        &self,
        problem: &Problem<D>,
        assignment: &mut Assignment,
        data: &D,
        depth: usize,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;

        if depth == problem.num_variables() {
            return true;
        }

        for value in 0..problem.domain_size(depth) {
            assignment.set(depth, value);
            if consistency::satisfied_below(problem, assignment, data, depth + 1, stats)
                && self.search(problem, assignment, data, depth + 1, stats)
            {
                return true;
            }
            stats.backtracks += 1;
        }

        false
    }
}

impl<D> SearchStrategy<D> for BacktrackingSearch {
    fn solve(&self, problem: &Problem<D>, data: &D) -> Result<(Option<Assignment>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut assignment = Assignment::new(problem.num_variables());

        debug!(
            variables = problem.num_variables(),
            constraints = problem.num_constraints(),
            "starting backtracking search"
        );

        let solved = self.search(problem, &mut assignment, data, 0, &mut stats);
        if solved {
            debug!(nodes = stats.nodes_visited, "backtracking search solved");
            Ok((Some(assignment), stats))
        } else {
            debug!(nodes = stats.nodes_visited, "backtracking search exhausted");
            Ok((None, stats))
        }
    }
}

/// A [`SearchStrategy`] implementing forward checking.
///
/// On every assignment the strategy prunes the live masks of the assigned
/// variable's binary-constraint neighbors and undoes those prunes exactly
/// when it backtracks. Variable order comes from a [`VariableSelection`]
/// heuristic (Minimum Remaining Values unless overridden) and value order
/// from a [`ValueOrdering`] heuristic (Least Constraining Value unless
/// overridden). Unary constraints are enforced once, up front, which
/// collapses pre-assigned variables before the first frame.
///
/// The strategy polls its [`CancelToken`] at the top of every recursion
/// frame; a cancelled search unwinds, restoring the context as it goes, and
/// reports "no solution". Hosts distinguish cancellation from exhaustion by
/// checking their clone of the token.
pub struct ForwardCheckingSearch<D> {
    variable_heuristic: Box<dyn VariableSelection>,
    value_heuristic: Box<dyn ValueOrdering<D>>,
    cancel: CancelToken,
}

impl<D> Default for ForwardCheckingSearch<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ForwardCheckingSearch<D> {
    /// Creates the standard configuration: MRV variable selection and LCV
    /// value ordering, with a fresh cancellation token.
    pub fn new() -> Self {
        Self::with_heuristics(
            Box::new(MinimumRemainingValues),
            Box::new(LeastConstrainingValue),
        )
    }

    /// Creates a forward-checking strategy with explicit heuristics.
    pub fn with_heuristics(
        variable_heuristic: Box<dyn VariableSelection>,
        value_heuristic: Box<dyn ValueOrdering<D>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            cancel: CancelToken::new(),
        }
    }

    /// Replaces the cancellation token, so a host can keep a clone to trip.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    fn search(
        &self,
        problem: &Problem<D>,
        assignment: &mut Assignment,
        data: &D,
        context: &mut ForwardCheckContext,
        log: &mut PruneLog,
        stats: &mut SearchStats,
    ) -> Outcome {
        if self.cancel.is_cancelled() {
            return Outcome::Cancelled;
        }

        stats.nodes_visited += 1;

        if context.all_assigned() {
            return Outcome::Solved;
        }
        let Some(variable) = self.variable_heuristic.select(context) else {
            return Outcome::Solved;
        };

        let order = self
            .value_heuristic
            .order(problem, context, assignment, data, variable);

        for value in order {
            assignment.set(variable, value);
            context.set_assigned(variable, true);

            if !consistency::satisfied_assigned(problem, assignment, data, context, stats) {
                context.set_assigned(variable, false);
                stats.backtracks += 1;
                continue;
            }

            let mark = log.mark();
            context.prune_neighbors(problem, assignment, data, variable, log, stats);

            match self.search(problem, assignment, data, context, log, stats) {
                Outcome::Solved => return Outcome::Solved,
                Outcome::Cancelled => {
                    log.undo_to(mark, context);
                    context.set_assigned(variable, false);
                    return Outcome::Cancelled;
                }
                Outcome::Exhausted => {
                    log.undo_to(mark, context);
                    context.set_assigned(variable, false);
                    stats.backtracks += 1;
                }
            }
        }

        Outcome::Exhausted
    }
}

impl<D> SearchStrategy<D> for ForwardCheckingSearch<D> {
    fn solve(&self, problem: &Problem<D>, data: &D) -> Result<(Option<Assignment>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut assignment = Assignment::new(problem.num_variables());
        let mut context = ForwardCheckContext::new(problem);
        let mut log = PruneLog::new();

        debug!(
            variables = problem.num_variables(),
            constraints = problem.num_constraints(),
            "starting forward-checking search"
        );

        context.seed_unary(problem, &mut assignment, data);

        // Unary seeding can assign several variables at once; constraints
        // among them would otherwise never pass through a frame's check.
        if !consistency::satisfied_assigned(problem, &assignment, data, &context, &mut stats) {
            debug!("seeded assignment is already inconsistent");
            return Ok((None, stats));
        }

        match self.search(problem, &mut assignment, data, &mut context, &mut log, &mut stats) {
            Outcome::Solved => {
                debug!(nodes = stats.nodes_visited, "forward checking solved");
                Ok((Some(assignment), stats))
            }
            Outcome::Exhausted => {
                debug!(nodes = stats.nodes_visited, "forward checking exhausted");
                Ok((None, stats))
            }
            Outcome::Cancelled => {
                debug!(nodes = stats.nodes_visited, "forward checking cancelled");
                Ok((None, stats))
            }
        }
    }
}
