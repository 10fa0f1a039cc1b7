use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::Constraint,
        engine::{ConstraintId, VariableId},
    },
};

/// An immutable description of a constraint satisfaction problem.
///
/// A problem is a fixed set of variables `0..N`, a domain size per variable
/// (variable `i` may take the values `[0, domain_size(i))`), and an ordered
/// collection of installed [`Constraint`]s. Problems are produced by
/// [`ProblemBuilder`] and never change once built, which is what makes a
/// search free to share them read-only. Dropping the problem drops every
/// installed constraint with it.
#[derive(Debug)]
pub struct Problem<D> {
    domain_sizes: Vec<usize>,
    constraints: Vec<Constraint<D>>,
}

impl<D> Problem<D> {
    /// Starts building a problem with `num_variables` variables, all with
    /// empty domains until [`ProblemBuilder::set_domain`] is called.
    pub fn builder(num_variables: usize) -> ProblemBuilder<D> {
        ProblemBuilder::new(num_variables)
    }

    pub fn num_variables(&self) -> usize {
        self.domain_sizes.len()
    }

    pub fn domain_size(&self, variable: VariableId) -> usize {
        self.domain_sizes[variable]
    }

    /// The sum of all domain sizes, used to size packed per-value buffers.
    pub fn total_domain_size(&self) -> usize {
        self.domain_sizes.iter().sum()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint<D> {
        &self.constraints[id]
    }

    pub fn constraints(&self) -> &[Constraint<D>] {
        &self.constraints
    }
}

/// Accumulates variables, domain sizes, and constraints, validating as it
/// goes, and freezes them into a [`Problem`].
#[derive(Debug)]
pub struct ProblemBuilder<D> {
    domain_sizes: Vec<usize>,
    constraints: Vec<Constraint<D>>,
}

impl<D> ProblemBuilder<D> {
    pub fn new(num_variables: usize) -> Self {
        Self {
            domain_sizes: vec![0; num_variables],
            constraints: Vec::new(),
        }
    }

    /// Sets the domain of `variable` to the values `[0, size)`.
    pub fn set_domain(&mut self, variable: VariableId, size: usize) -> Result<()> {
        if variable >= self.domain_sizes.len() {
            return Err(SolverError::VariableOutOfBounds {
                variable,
                limit: self.domain_sizes.len(),
            }
            .into());
        }
        self.domain_sizes[variable] = size;
        Ok(())
    }

    /// Sets every variable's domain to the values `[0, size)`.
    pub fn set_uniform_domains(&mut self, size: usize) {
        self.domain_sizes.fill(size);
    }

    /// Installs a constraint, taking ownership of it.
    ///
    /// Every scope entry must name a variable of this problem and the scope
    /// must be non-empty; a constraint that fails validation is rejected
    /// whole and the builder is left unchanged.
    pub fn install(&mut self, constraint: Constraint<D>) -> Result<ConstraintId> {
        if constraint.arity() == 0 {
            return Err(SolverError::EmptyScope {
                name: constraint.descriptor().name.clone(),
            }
            .into());
        }
        let limit = self.domain_sizes.len();
        for (position, &variable) in constraint.scope().iter().enumerate() {
            if variable >= limit {
                return Err(SolverError::ScopeOutOfBounds {
                    name: constraint.descriptor().name.clone(),
                    position,
                    variable,
                    limit,
                }
                .into());
            }
        }
        self.constraints.push(constraint);
        Ok(self.constraints.len() - 1)
    }

    /// Installs every constraint of an iterator, stopping at the first
    /// rejection.
    pub fn install_all(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint<D>>,
    ) -> Result<()> {
        for constraint in constraints {
            self.install(constraint)?;
        }
        Ok(())
    }

    pub fn build(self) -> Problem<D> {
        Problem {
            domain_sizes: self.domain_sizes,
            constraints: self.constraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::{Error, SolverError},
        solver::{constraint::Constraint, constraints::not_equal::NotEqual, problem::Problem},
    };

    fn inner(error: Error) -> SolverError {
        let Error::Inner { inner, .. } = error;
        *inner
    }

    #[test]
    fn builder_freezes_domains_and_constraints() {
        let mut builder = Problem::<()>::builder(3);
        builder.set_domain(0, 2).unwrap();
        builder.set_domain(1, 4).unwrap();
        let id = builder.install(NotEqual::constraint(0, 1)).unwrap();
        let problem = builder.build();

        assert_eq!(id, 0);
        assert_eq!(problem.num_variables(), 3);
        assert_eq!(problem.domain_size(0), 2);
        assert_eq!(problem.domain_size(1), 4);
        assert_eq!(problem.domain_size(2), 0);
        assert_eq!(problem.total_domain_size(), 6);
        assert_eq!(problem.num_constraints(), 1);
        assert_eq!(problem.constraint(0).scope(), &[0, 1]);
    }

    #[test]
    fn rejects_domain_for_unknown_variable() {
        let mut builder = Problem::<()>::builder(2);
        let error = builder.set_domain(2, 5).unwrap_err();
        assert!(matches!(
            inner(error),
            SolverError::VariableOutOfBounds {
                variable: 2,
                limit: 2
            }
        ));
    }

    #[test]
    fn rejects_scope_outside_the_problem() {
        let mut builder = Problem::<()>::builder(2);
        builder.set_uniform_domains(2);
        let error = builder.install(NotEqual::constraint(0, 7)).unwrap_err();
        assert!(matches!(
            inner(error),
            SolverError::ScopeOutOfBounds {
                position: 1,
                variable: 7,
                limit: 2,
                ..
            }
        ));
        let problem = builder.build();
        assert_eq!(problem.num_constraints(), 0);
    }

    #[test]
    fn rejects_empty_scope() {
        let mut builder = Problem::<()>::builder(1);
        builder.set_domain(0, 1).unwrap();
        let empty: Constraint<()> =
            Constraint::new(vec![], |_: &[usize], _: &crate::Assignment, _: &()| true);
        let error = builder.install(empty).unwrap_err();
        assert!(matches!(inner(error), SolverError::EmptyScope { .. }));
    }
}
