use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, Predicate},
    engine::VariableId,
};

/// Enforces `?a != ?b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEqual;

impl<D> Predicate<D> for NotEqual {
    fn holds(&self, scope: &[VariableId], assignment: &Assignment, _data: &D) -> bool {
        assignment.get(scope[0]) != assignment.get(scope[1])
    }
}

impl NotEqual {
    pub fn constraint<D>(a: VariableId, b: VariableId) -> Constraint<D> {
        Constraint::new(vec![a, b], NotEqual).with_name("not_equal", "?a != ?b")
    }
}
