//! Ready-made problem models used by the integration tests and benches.
//!
//! These are callers of the builder API, not part of the solver core; they
//! double as worked examples of how to model a puzzle.

pub mod queens;
pub mod sudoku;
