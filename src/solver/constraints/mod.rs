//! A standard library of predicates for common constraint shapes.
//!
//! Each module provides a predicate type plus a `constraint` convenience
//! that wraps it with its scope and a descriptor. All of them work over the
//! dense integer domains of a [`Problem`](crate::solver::problem::Problem);
//! anything data-dependent is better expressed as a closure predicate.

pub mod abs_diff_not_equal;
pub mod all_different;
pub mod equal;
pub mod fixed_value;
pub mod not_equal;
pub mod sum_leq;
