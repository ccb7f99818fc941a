//! Agent roles

pub mod role;
