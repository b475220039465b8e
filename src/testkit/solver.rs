//! Mock [`MilpSolver`] implementations for testing.
//!
//! - [`ScriptedSolver`] — Pops pre-loaded outcomes in order.
//!   Best for: outcome mapping, re-check failures, backend errors.
//!
//! - [`AssignmentSolver`] — Answers every model with a fixed completed
//!   ledger, translated into the model's variables.
//!   Best for: exercising extraction and the exact re-check without a
//!   real backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::port::{MilpOutcome, MilpProblem, MilpSolver, SolveBudget};

// ---------------------------------------------------------------------------
// ScriptedSolver
// ---------------------------------------------------------------------------

/// A mock solver returning scripted results.
///
/// Each call to `solve()` pops the next result from the queue and returns
/// the fallback outcome ([`MilpOutcome::Unknown`] by default) once the
/// queue is exhausted.
pub struct ScriptedSolver {
    results: Mutex<VecDeque<Result<MilpOutcome>>>,
    fallback: MilpOutcome,
    calls: Arc<AtomicU32>,
}

impl ScriptedSolver {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            fallback: MilpOutcome::Unknown,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_results(self, results: Vec<Result<MilpOutcome>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            ..self
        }
    }

    /// Always answer with `outcome`.
    pub fn always(outcome: MilpOutcome) -> Self {
        Self {
            fallback: outcome,
            ..Self::new()
        }
    }

    /// A solver whose backend fails on the first call.
    pub fn failing(message: &str) -> Self {
        Self::new().with_results(vec![Err(Error::Solver(message.to_string()))])
    }

    /// Shared call counter.
    pub fn calls(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }
}

impl Default for ScriptedSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for ScriptedSolver {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn solve(&self, _problem: &MilpProblem, _budget: &SolveBudget) -> Result<MilpOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut results = match self.results.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        results
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

// ---------------------------------------------------------------------------
// AssignmentSolver
// ---------------------------------------------------------------------------

/// A mock solver that "finds" a fixed set of variable values.
///
/// Values are matched to variables by name, so the same script works for
/// any model declaring those names. Unnamed variables are zero.
pub struct AssignmentSolver {
    values: Vec<(String, Decimal)>,
}

impl AssignmentSolver {
    pub fn new(values: Vec<(String, Decimal)>) -> Self {
        Self { values }
    }
}

impl MilpSolver for AssignmentSolver {
    fn name(&self) -> &'static str {
        "assignment"
    }

    fn solve(&self, problem: &MilpProblem, _budget: &SolveBudget) -> Result<MilpOutcome> {
        let values = problem
            .variables()
            .iter()
            .map(|def| {
                self.values
                    .iter()
                    .find(|(name, _)| *name == def.name)
                    .map_or(Decimal::ZERO, |(_, value)| *value)
            })
            .collect();
        Ok(MilpOutcome::Feasible(values))
    }
}
