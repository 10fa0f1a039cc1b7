use std::backtrace::Backtrace;

use crate::solver::engine::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("constraint `{name}` has an empty scope")]
    EmptyScope { name: String },
    #[error(
        "constraint `{name}` references variable {variable} at scope position {position}, \
         but the problem has only {limit} variables"
    )]
    ScopeOutOfBounds {
        name: String,
        position: usize,
        variable: VariableId,
        limit: usize,
    },
    #[error("variable {variable} is out of bounds for a problem with {limit} variables")]
    VariableOutOfBounds { variable: VariableId, limit: usize },
    #[error("{0}")]
    Custom(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
