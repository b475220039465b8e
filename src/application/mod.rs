//! Application services (use cases).
//!
//! These services turn a league, a ledger and a desired ranking into an
//! integer-programming model, run it through a solver port, and check
//! what comes back.

pub mod feasibility;
pub mod model;
pub mod verify;

pub use feasibility::{FeasibilityService, Outcome};
pub use model::{ModelOptions, ModelTuning, StandingsModel};
