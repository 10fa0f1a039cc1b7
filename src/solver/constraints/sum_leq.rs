use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, Predicate},
    engine::VariableId,
};

/// Enforces `?a + ?b <= bound` for a bound fixed at model-build time.
///
/// When the bound has to come from caller data instead, use a closure
/// predicate; see the crate examples.
#[derive(Debug, Clone, Copy)]
pub struct SumLeq {
    pub bound: usize,
}

impl<D> Predicate<D> for SumLeq {
    fn holds(&self, scope: &[VariableId], assignment: &Assignment, _data: &D) -> bool {
        assignment.get(scope[0]) + assignment.get(scope[1]) <= self.bound
    }
}

impl SumLeq {
    pub fn constraint<D>(a: VariableId, b: VariableId, bound: usize) -> Constraint<D> {
        Constraint::new(vec![a, b], SumLeq { bound }).with_name("sum_leq", "?a + ?b <= bound")
    }
}

#[cfg(test)]
mod tests {
    use super::SumLeq;
    use crate::solver::assignment::Assignment;

    #[test]
    fn bounds_the_pair_sum() {
        let constraint = SumLeq::constraint::<()>(0, 1, 2);
        let mut assignment = Assignment::new(2);
        assignment.set(0, 1);
        assignment.set(1, 1);
        assert!(constraint.holds(&assignment, &()));
        assignment.set(1, 2);
        assert!(!constraint.holds(&assignment, &()));
    }
}
