//! Core value objects shared across the domain

pub mod model;
pub mod prompt;
