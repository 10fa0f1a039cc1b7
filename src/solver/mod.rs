pub mod assignment;
pub mod cancel;
pub mod consistency;
pub mod constraint;
pub mod constraints;
pub mod context;
pub mod engine;
pub mod heuristics;
pub mod problem;
pub mod stats;
pub mod strategy;
