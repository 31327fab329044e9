//! Solver capability traits.
//!
//! An enumeration never talks to a concrete solver library. It depends on the
//! capability set below, so any engine that can check satisfiability, hand out
//! a model, accept new constraints and build the few boolean expressions a
//! blocking constraint needs is substitutable.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;

/// Outcome of a satisfiability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The constraint set has at least one satisfying assignment.
    Sat,
    /// The constraint set has no satisfying assignment.
    Unsat,
    /// The engine gave up without deciding.
    Unknown,
}

impl Verdict {
    /// Returns true for [`Verdict::Sat`].
    pub fn is_sat(self) -> bool {
        matches!(self, Verdict::Sat)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Sat => write!(f, "sat"),
            Verdict::Unsat => write!(f, "unsat"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// A satisfying assignment produced by a solver.
///
/// A model is an immutable snapshot: it stays valid after the solver that
/// produced it receives new constraints.
///
/// # Type Parameters
/// * `V` - The solver's symbolic variable handle
pub trait Model<V> {
    /// The value expression assigned to a variable.
    type Value;

    /// Looks up the value this model assigns to `var`.
    ///
    /// # Errors
    ///
    /// Returns [`SatStreamError::UnknownVariable`](crate::SatStreamError::UnknownVariable)
    /// if the variable was not known to the solver when the model was produced.
    fn value_of(&self, var: &V) -> Result<Self::Value>;
}

/// An incremental constraint solver.
///
/// The constraint set only ever grows: [`assert`](Self::assert) is permanent.
/// [`model`](Self::model) is valid only directly after a [`check`](Self::check)
/// that returned [`Verdict::Sat`].
///
/// The expression builders (`neq`, `or`, `bool_false`) are exactly what a
/// blocking constraint needs: "at least one variable differs from its value in
/// this model" is a disjunction of inequalities, and the disjunction over zero
/// terms is `false`.
///
/// Neither the solver nor its [`check`](Self::check) future needs to be `Send`;
/// backends may hold `Rc` contexts.
#[async_trait(?Send)]
pub trait IncrementalSolver {
    /// Symbolic variable handle.
    type Var;

    /// Value expression a model assigns to a variable.
    type Value;

    /// Boolean expression accepted by [`assert`](Self::assert).
    type Expr;

    /// Model type produced after a `Sat` verdict.
    type Model: Model<Self::Var, Value = Self::Value>;

    /// Checks satisfiability of the current constraint set.
    ///
    /// This is the slow operation and may suspend.
    async fn check(&mut self) -> Result<Verdict>;

    /// Returns the model found by the last check.
    ///
    /// # Errors
    ///
    /// Returns [`SatStreamError::ModelUnavailable`](crate::SatStreamError::ModelUnavailable)
    /// when the last check was not `Sat`.
    fn model(&self) -> Result<Self::Model>;

    /// Permanently adds a constraint.
    fn assert(&mut self, constraint: Self::Expr) -> Result<()>;

    /// Builds `var != value`.
    fn neq(&self, var: &Self::Var, value: &Self::Value) -> Self::Expr;

    /// Builds `lhs || rhs`.
    fn or(&self, lhs: Self::Expr, rhs: Self::Expr) -> Self::Expr;

    /// Builds the constant `false`.
    fn bool_false(&self) -> Self::Expr;
}
