//! The boundary between the scheduling core and the combinatorial search engine.
mod pumpkin;

use std::time::Duration;

pub use pumpkin::PumpkinEngine;

use crate::model::Assignment;
use crate::model::Model;

/// The answer of a [`SearchEngine`] to a [`Model`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The assignment satisfies every constraint and minimises the objective.
    Optimal(Assignment),
    /// The assignment satisfies every constraint, but the engine ran out of time before proving
    /// that it is optimal.
    Feasible(Assignment),
    /// No assignment satisfies every constraint.
    Infeasible,
    /// The engine ran out of time before finding a satisfying assignment.
    Unknown,
}

/// A search engine which can minimise the objective of a [`Model`].
pub trait SearchEngine {
    /// Searches for an assignment which satisfies every constraint of `model` and minimises its
    /// objective, giving up after `time_budget`.
    ///
    /// The assignment of a returned [`Verdict::Optimal`] or [`Verdict::Feasible`] contains a
    /// value for every variable of `model`.
    fn solve(&mut self, model: &Model, time_budget: Duration) -> Verdict;
}
