//! Solver implementations for mixed-integer linear programming.
//!
//! Implements the `port::MilpSolver` trait with concrete backends.

mod highs;

pub use highs::HighsSolver;
