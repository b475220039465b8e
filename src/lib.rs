//! Pennant - Can the season still end the way you want?
//!
//! Given the results already played in a league season and a desired
//! final ranking, this crate decides whether some completion of the
//! season produces that ranking, and if so returns one such completion.
//!
//! # Architecture
//!
//! The question is encoded as a mixed-integer linear program:
//!
//! - **`domain`** - League shape, result ledgers, rankings, standings, and
//!   the solver-agnostic constraint vocabulary
//! - **`port`** - The [`MilpSolver`](port::MilpSolver) capability
//! - **`application::model`** - Builds the program: season accounting,
//!   linearized win rates, ranking indicators, and target pins
//! - **`application`** - The feasibility use case and the exact re-check
//!   of every reported completion
//! - **`adapter::solver`** - HiGHS via good_lp
//! - **`adapter::inbound::cli`** - The `pennant` command line
//!
//! # Modules
//!
//! - [`domain`] - Pure league data and validation
//! - [`port`] - Solver trait and problem container
//! - [`application`] - Model builder and feasibility service
//! - [`adapter`] - Solver backend and CLI
//! - [`infrastructure`] - TOML configuration, logging, wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pennant::adapter::solver::HighsSolver;
//! use pennant::application::{FeasibilityService, ModelOptions};
//! use pennant::domain::{DesiredRanking, League, Ledger};
//! use pennant::port::SolveBudget;
//!
//! let league = League::default();
//! let service = FeasibilityService::new(
//!     Arc::new(HighsSolver::new()),
//!     league,
//!     ModelOptions::default(),
//!     SolveBudget::default(),
//! );
//! let ranking = DesiredRanking::from_indices(&[0, 2, 1], &league)?;
//! let outcome = service.check(&Ledger::empty(league.teams()), &ranking)?;
//! println!("{outcome}");
//! # Ok::<(), pennant::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
