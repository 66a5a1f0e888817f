//! Command implementations

pub mod simple;

pub use simple::{SimpleSummary, run_simple, run_simple_with};
