//! The consistency oracles shared by the search strategies.
//!
//! Both oracles sweep the installed constraints in installation order and
//! report the first violation. A constraint whose scope is not yet fully
//! assigned is skipped, not failed; the two oracles differ only in how
//! "fully assigned" is decided. The plain backtracking solver assigns
//! variables in identifier order, so a frontier index is enough. Forward
//! checking assigns variables in heuristic order, so the only correct test
//! is membership in the context's assigned set.

use std::time::Instant;

use tracing::trace;

use crate::solver::{
    assignment::Assignment, context::ForwardCheckContext, engine::SearchStats, problem::Problem,
};

/// Returns `true` iff every constraint whose scope lies entirely in
/// `[0, frontier)` is satisfied by `assignment` under `data`.
pub fn satisfied_below<D>(
    problem: &Problem<D>,
    assignment: &Assignment,
    data: &D,
    frontier: usize,
    stats: &mut SearchStats,
) -> bool {
    for (id, constraint) in problem.constraints().iter().enumerate() {
        if constraint.scope().iter().any(|&v| v >= frontier) {
            continue;
        }
        let entry = stats.constraint_stats.entry(id).or_default();
        let start = Instant::now();
        entry.evaluations += 1;
        let ok = constraint.holds(assignment, data);
        entry.time_spent_micros += start.elapsed().as_micros() as u64;
        if !ok {
            trace!(constraint = id, "frontier consistency check failed");
            return false;
        }
    }
    true
}

/// Returns `true` iff every constraint whose scope variables all carry the
/// context's `assigned` flag is satisfied by `assignment` under `data`.
pub fn satisfied_assigned<D>(
    problem: &Problem<D>,
    assignment: &Assignment,
    data: &D,
    context: &ForwardCheckContext,
    stats: &mut SearchStats,
) -> bool {
    for (id, constraint) in problem.constraints().iter().enumerate() {
        if !constraint.scope().iter().all(|&v| context.is_assigned(v)) {
            continue;
        }
        let entry = stats.constraint_stats.entry(id).or_default();
        let start = Instant::now();
        entry.evaluations += 1;
        let ok = constraint.holds(assignment, data);
        entry.time_spent_micros += start.elapsed().as_micros() as u64;
        if !ok {
            trace!(constraint = id, "assigned-scope consistency check failed");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::solver::{
        assignment::Assignment,
        constraints::not_equal::NotEqual,
        context::ForwardCheckContext,
        engine::SearchStats,
        problem::Problem,
    };

    use super::{satisfied_assigned, satisfied_below};

    fn two_variable_problem() -> Problem<()> {
        let mut builder = Problem::builder(2);
        builder.set_uniform_domains(2);
        builder.install(NotEqual::constraint(0, 1)).unwrap();
        builder.build()
    }

    #[test]
    fn frontier_skips_constraints_reaching_past_it() {
        let problem = two_variable_problem();
        let mut stats = SearchStats::default();
        let mut assignment = Assignment::new(2);
        assignment.set(0, 1);
        // Position 1 is scratch and equals position 0, but the constraint
        // reaches variable 1 >= frontier, so it is skipped rather than failed.
        assignment.set(1, 1);

        assert!(satisfied_below(&problem, &assignment, &(), 1, &mut stats));
        assert!(!satisfied_below(&problem, &assignment, &(), 2, &mut stats));
    }

    #[test]
    fn assigned_oracle_keys_on_context_flags_not_order() {
        let problem = two_variable_problem();
        let mut stats = SearchStats::default();
        let mut context = ForwardCheckContext::new(&problem);
        let mut assignment = Assignment::new(2);

        // Variable 1 assigned before variable 0: a frontier test would get
        // this wrong, the membership test does not.
        assignment.set(1, 0);
        context.set_assigned(1, true);
        assert!(satisfied_assigned(
            &problem,
            &assignment,
            &(),
            &context,
            &mut stats
        ));

        assignment.set(0, 0);
        context.set_assigned(0, true);
        assert!(!satisfied_assigned(
            &problem,
            &assignment,
            &(),
            &context,
            &mut stats
        ));

        assignment.set(0, 1);
        assert!(satisfied_assigned(
            &problem,
            &assignment,
            &(),
            &context,
            &mut stats
        ));
    }

    #[test]
    fn evaluation_counts_are_recorded_per_constraint() {
        let problem = two_variable_problem();
        let mut stats = SearchStats::default();
        let mut assignment = Assignment::new(2);
        assignment.set(0, 0);
        assignment.set(1, 1);

        assert!(satisfied_below(&problem, &assignment, &(), 2, &mut stats));
        assert!(satisfied_below(&problem, &assignment, &(), 2, &mut stats));
        assert_eq!(stats.constraint_stats[&0].evaluations, 2);
    }
}
