//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points adapters implement to plug external
//! systems into the application.
//!
//! # Available Ports
//!
//! - [`MilpSolver`] - Mixed-integer linear programming backend

mod solver;

pub use solver::{MilpOutcome, MilpProblem, MilpSolver, SolveBudget};
