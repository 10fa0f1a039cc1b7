use crate::solver::{constraint::Constraint, constraints::not_equal::NotEqual, engine::VariableId};

/// Expands "all of `variables` take distinct values" into pairwise
/// [`NotEqual`] constraints.
///
/// The pairwise form keeps every constraint binary, which is what lets
/// forward checking prune through the group; an n-ary predicate would only
/// be checked once its whole scope was assigned.
pub fn all_different<D>(variables: &[VariableId]) -> Vec<Constraint<D>> {
    let mut constraints = Vec::with_capacity(variables.len() * (variables.len().saturating_sub(1)) / 2);
    for (index, &a) in variables.iter().enumerate() {
        for &b in &variables[index + 1..] {
            constraints.push(NotEqual::constraint(a, b));
        }
    }
    constraints
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::all_different;

    #[test]
    fn expands_to_every_unordered_pair() {
        let constraints = all_different::<()>(&[1, 3, 5]);
        let scopes: Vec<_> = constraints.iter().map(|c| c.scope().to_vec()).collect();
        assert_eq!(scopes, vec![vec![1, 3], vec![1, 5], vec![3, 5]]);
    }

    #[test]
    fn single_variable_needs_no_constraints() {
        assert!(all_different::<()>(&[7]).is_empty());
    }
}
