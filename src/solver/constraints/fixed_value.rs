use crate::solver::{
    assignment::{Assignment, DomainValue},
    constraint::{Constraint, Predicate},
    engine::VariableId,
};

/// A unary constraint pinning a variable to one value.
///
/// Installed for pre-filled cells, these are what the forward-checking
/// solver's unary seeding pass collapses before the search starts.
#[derive(Debug, Clone, Copy)]
pub struct FixedValue {
    pub value: DomainValue,
}

impl<D> Predicate<D> for FixedValue {
    fn holds(&self, scope: &[VariableId], assignment: &Assignment, _data: &D) -> bool {
        assignment.get(scope[0]) == self.value
    }
}

impl FixedValue {
    pub fn constraint<D>(variable: VariableId, value: DomainValue) -> Constraint<D> {
        Constraint::new(vec![variable], FixedValue { value })
            .with_name("fixed_value", "?x == value")
    }
}

#[cfg(test)]
mod tests {
    use super::FixedValue;
    use crate::solver::assignment::Assignment;

    #[test]
    fn pins_a_single_value() {
        let constraint = FixedValue::constraint::<()>(1, 3);
        let mut assignment = Assignment::new(2);
        assert!(!constraint.holds(&assignment, &()));
        assignment.set(1, 3);
        assert!(constraint.holds(&assignment, &()));
    }
}
