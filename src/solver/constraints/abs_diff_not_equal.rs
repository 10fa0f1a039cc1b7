use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, Predicate},
    engine::VariableId,
};

/// Enforces `|?a - ?b| != distance`.
///
/// The classic use is n-queens, where two columns `distance` apart must not
/// hold queens on the same diagonal.
#[derive(Debug, Clone, Copy)]
pub struct AbsDiffNotEqual {
    pub distance: usize,
}

impl<D> Predicate<D> for AbsDiffNotEqual {
    fn holds(&self, scope: &[VariableId], assignment: &Assignment, _data: &D) -> bool {
        let a = assignment.get(scope[0]);
        let b = assignment.get(scope[1]);
        a.abs_diff(b) != self.distance
    }
}

impl AbsDiffNotEqual {
    pub fn constraint<D>(a: VariableId, b: VariableId, distance: usize) -> Constraint<D> {
        Constraint::new(vec![a, b], AbsDiffNotEqual { distance })
            .with_name("abs_diff_not_equal", "|?a - ?b| != distance")
    }
}

#[cfg(test)]
mod tests {
    use super::AbsDiffNotEqual;
    use crate::solver::assignment::Assignment;

    #[test]
    fn rejects_the_forbidden_distance() {
        let constraint = AbsDiffNotEqual::constraint::<()>(0, 1, 2);
        let mut assignment = Assignment::new(2);
        assignment.set(0, 3);
        assignment.set(1, 1);
        assert!(!constraint.holds(&assignment, &()));
        assignment.set(1, 2);
        assert!(constraint.holds(&assignment, &()));
    }
}
