//! Infrastructure configuration modules.

pub mod league;
pub mod logging;
pub mod settings;
pub mod solver;
pub mod tuning;

pub use settings::Config;
