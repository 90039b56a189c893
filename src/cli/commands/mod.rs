//! Command implementations

pub mod patterns;
pub mod scan;
