//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`fixtures`] — Canned leagues and ledgers: small leagues, lopsided
//!   and finished seasons.
//! - [`solver`] — Mock [`MilpSolver`](crate::port::MilpSolver)
//!   implementations: `ScriptedSolver`, `AssignmentSolver`.

pub mod fixtures;
pub mod solver;
