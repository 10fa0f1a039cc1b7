//! Nodus is a solver for finite-domain constraint satisfaction problems
//! (CSPs).
//!
//! A problem is a set of variables `0..N`, each with a dense integer domain
//! `[0, d)`, and a list of constraints, each of which is an ordered variable
//! scope plus a caller-supplied [`Predicate`]. The crate ships two search
//! strategies behind one engine:
//!
//! - **[`BacktrackingSearch`]**: chronological depth-first search in
//!   identifier order, with a consistency check after every assignment.
//! - **[`ForwardCheckingSearch`]**: on every assignment, values that would
//!   violate a binary constraint are pruned from the neighbors' live
//!   domains (and restored on backtrack), with Minimum Remaining Values
//!   variable selection and Least Constraining Value ordering.
//!
//! Predicates receive an opaque caller-data reference on every call, so a
//! model's parameters can live outside the problem description. Forward
//! checking also honors a cooperative [`CancelToken`] that a host may trip
//! from another thread.
//!
//! # Example: a pinned pair
//!
//! Solve `?a != ?b` over the domain `{0, 1, 2}` where a unary constraint
//! pins `?b` to `0`:
//!
//! ```
//! use nodus::{
//!     constraints::{fixed_value::FixedValue, not_equal::NotEqual},
//!     ForwardCheckingSearch, Problem, SolverEngine,
//! };
//!
//! let mut builder = Problem::builder(2);
//! builder.set_uniform_domains(3);
//! builder.install(NotEqual::constraint(0, 1))?;
//! builder.install(FixedValue::constraint(1, 0))?;
//! let problem = builder.build();
//!
//! let engine = SolverEngine::new(Box::new(ForwardCheckingSearch::new()));
//! let (solution, stats) = engine.solve(&problem, &())?;
//!
//! let solution = solution.expect("the problem is satisfiable");
//! assert_eq!(solution.get(1), 0);
//! assert_ne!(solution.get(0), 0);
//! assert!(stats.nodes_visited > 0);
//! # Ok::<(), nodus::error::Error>(())
//! ```
//!
//! # Example: caller data in a predicate
//!
//! Constraints whose parameters are not known at model-build time read them
//! from the data argument instead:
//!
//! ```
//! use nodus::{Assignment, BacktrackingSearch, Constraint, Problem, SolverEngine};
//!
//! let mut builder = Problem::builder(2);
//! builder.set_uniform_domains(3);
//! builder.install(Constraint::new(
//!     vec![0, 1],
//!     |scope: &[usize], a: &Assignment, max: &usize| a.get(scope[0]) + a.get(scope[1]) <= *max,
//! ))?;
//! let problem = builder.build();
//!
//! let engine = SolverEngine::new(Box::new(BacktrackingSearch::new()));
//! let (solution, _) = engine.solve(&problem, &3)?;
//! assert_eq!(solution.unwrap().values(), &[0, 0]);
//! # Ok::<(), nodus::error::Error>(())
//! ```

pub mod error;
pub mod examples;
pub mod solver;

pub use solver::{
    assignment::{Assignment, DomainValue},
    cancel::CancelToken,
    constraint::{Constraint, ConstraintDescriptor, Predicate},
    constraints,
    context::{ForwardCheckContext, PruneLog, PruneMark},
    engine::{ConstraintId, PerConstraintStats, SearchStats, SolverEngine, VariableId},
    heuristics,
    problem::{Problem, ProblemBuilder},
    strategy::{BacktrackingSearch, BoxedSearchStrategy, ForwardCheckingSearch, SearchStrategy},
};
