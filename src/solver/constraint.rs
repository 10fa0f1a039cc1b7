use crate::solver::{assignment::Assignment, engine::VariableId};

/// A human-readable label for a constraint, used when rendering statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

impl Default for ConstraintDescriptor {
    fn default() -> Self {
        Self {
            name: "predicate".to_string(),
            description: String::new(),
        }
    }
}

/// The verdict-producing half of a constraint.
///
/// A predicate is handed the constraint's scope, the current assignment
/// snapshot, and the caller data that was passed to the solver. It must be
/// pure with respect to variables outside the scope: the snapshot positions
/// it does not own may hold arbitrary scratch values, and the same call may
/// be repeated with different scratch contents. Predicates must not mutate
/// anything and must not call back into the solver. Returning `false` means
/// "violated"; a predicate that needs to reject pathological input does so
/// by returning `false`.
pub trait Predicate<D> {
    fn holds(&self, scope: &[VariableId], assignment: &Assignment, data: &D) -> bool;
}

impl<D, F> Predicate<D> for F
where
    F: Fn(&[VariableId], &Assignment, &D) -> bool,
{
    fn holds(&self, scope: &[VariableId], assignment: &Assignment, data: &D) -> bool {
        self(scope, assignment, data)
    }
}

/// A single constraint: an ordered variable scope plus a [`Predicate`].
///
/// The scope may be edited up until the constraint is installed into a
/// [`Problem`](crate::solver::problem::Problem); installation freezes it.
/// Duplicate scope entries are permitted, though most models keep them
/// unique.
pub struct Constraint<D> {
    scope: Vec<VariableId>,
    predicate: Box<dyn Predicate<D>>,
    descriptor: ConstraintDescriptor,
}

impl<D> Constraint<D> {
    pub fn new(scope: Vec<VariableId>, predicate: impl Predicate<D> + 'static) -> Self {
        Self {
            scope,
            predicate: Box::new(predicate),
            descriptor: ConstraintDescriptor::default(),
        }
    }

    /// Attaches a descriptor used by [`stats`](crate::solver::stats) rendering.
    pub fn with_name(mut self, name: &str, description: &str) -> Self {
        self.descriptor = ConstraintDescriptor {
            name: name.to_string(),
            description: description.to_string(),
        };
        self
    }

    /// The number of variables in the scope.
    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    /// The scope entry at `position`.
    pub fn variable(&self, position: usize) -> VariableId {
        self.scope[position]
    }

    /// Rewrites the scope entry at `position`. Only callable before the
    /// constraint is installed, since installation takes ownership.
    pub fn set_variable(&mut self, position: usize, variable: VariableId) {
        self.scope[position] = variable;
    }

    pub fn descriptor(&self) -> &ConstraintDescriptor {
        &self.descriptor
    }

    /// Evaluates the predicate against `assignment` under `data`.
    pub fn holds(&self, assignment: &Assignment, data: &D) -> bool {
        self.predicate.holds(&self.scope, assignment, data)
    }
}

impl<D> std::fmt::Debug for Constraint<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.descriptor.name)
            .field("scope", &self.scope)
            .finish()
    }
}
