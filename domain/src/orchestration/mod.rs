//! Orchestration concepts: modes, phases, verbosity, and result types

pub mod mode;
pub mod phase;
pub mod value_objects;
pub mod verbosity;
