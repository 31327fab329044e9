//! Term language of the finite-domain solver.

use std::fmt;
use std::ops::{Add, Mul, Not};

use satstream_core::{Result, SatStreamError};

/// Handle to an integer variable declared on a
/// [`FiniteDomainSolver`](super::FiniteDomainSolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntVar {
    index: usize,
}

impl IntVar {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    /// Position of this variable in declaration order.
    pub fn index(self) -> usize {
        self.index
    }

    /// The variable as a term.
    pub fn term(self) -> Term {
        Term::Var(self)
    }
}

/// An integer or boolean expression over [`IntVar`]s.
///
/// Arithmetic uses the `+` and `*` operators, negation uses `!`.
///
/// # Example
///
/// ```
/// use satstream_test::finite_domain::{FiniteDomainSolver, Term};
///
/// let mut solver = FiniteDomainSolver::new();
/// let x = solver.int_var("x", -5..=5);
///
/// // x * x == 4
/// let square = (x.term() * x.term()).equals(Term::int(4));
/// assert_eq!(square.to_string(), "((x0 * x0) == 4)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// Integer variable.
    Var(IntVar),
    /// Integer constant.
    Int(i64),
    /// Boolean constant.
    Bool(bool),
    /// Checked integer sum.
    Add(Box<Term>, Box<Term>),
    /// Checked integer product.
    Mul(Box<Term>, Box<Term>),
    /// Integer equality.
    Eq(Box<Term>, Box<Term>),
    /// Integer inequality.
    Neq(Box<Term>, Box<Term>),
    /// Strict integer comparison.
    Lt(Box<Term>, Box<Term>),
    /// Non-strict integer comparison.
    Le(Box<Term>, Box<Term>),
    /// Boolean conjunction.
    And(Box<Term>, Box<Term>),
    /// Boolean disjunction.
    Or(Box<Term>, Box<Term>),
    /// Boolean negation.
    Not(Box<Term>),
}

impl Term {
    /// Integer constant.
    pub fn int(value: i64) -> Self {
        Term::Int(value)
    }

    /// Boolean constant.
    pub fn bool(value: bool) -> Self {
        Term::Bool(value)
    }

    /// `self == rhs`.
    pub fn equals(self, rhs: Term) -> Self {
        Term::Eq(Box::new(self), Box::new(rhs))
    }

    /// `self != rhs`.
    pub fn not_equals(self, rhs: Term) -> Self {
        Term::Neq(Box::new(self), Box::new(rhs))
    }

    /// `self < rhs`.
    pub fn lt(self, rhs: Term) -> Self {
        Term::Lt(Box::new(self), Box::new(rhs))
    }

    /// `self <= rhs`.
    pub fn le(self, rhs: Term) -> Self {
        Term::Le(Box::new(self), Box::new(rhs))
    }

    /// `self && rhs`.
    pub fn and(self, rhs: Term) -> Self {
        Term::And(Box::new(self), Box::new(rhs))
    }

    /// `self || rhs`.
    pub fn or(self, rhs: Term) -> Self {
        Term::Or(Box::new(self), Box::new(rhs))
    }

    /// Evaluates an integer term under `values`, indexed by variable.
    pub fn eval_int(&self, values: &[i64]) -> Result<i64> {
        match self {
            Term::Var(var) => values
                .get(var.index())
                .copied()
                .ok_or_else(|| SatStreamError::UnknownVariable(var.to_string())),
            Term::Int(value) => Ok(*value),
            Term::Add(lhs, rhs) => lhs
                .eval_int(values)?
                .checked_add(rhs.eval_int(values)?)
                .ok_or_else(|| SatStreamError::Backend(format!("overflow in {self}"))),
            Term::Mul(lhs, rhs) => lhs
                .eval_int(values)?
                .checked_mul(rhs.eval_int(values)?)
                .ok_or_else(|| SatStreamError::Backend(format!("overflow in {self}"))),
            _ => Err(SatStreamError::Backend(format!(
                "expected integer term, found {self}"
            ))),
        }
    }

    /// Evaluates a boolean term under `values`, indexed by variable.
    pub fn eval_bool(&self, values: &[i64]) -> Result<bool> {
        match self {
            Term::Bool(value) => Ok(*value),
            Term::Eq(lhs, rhs) => Ok(lhs.eval_int(values)? == rhs.eval_int(values)?),
            Term::Neq(lhs, rhs) => Ok(lhs.eval_int(values)? != rhs.eval_int(values)?),
            Term::Lt(lhs, rhs) => Ok(lhs.eval_int(values)? < rhs.eval_int(values)?),
            Term::Le(lhs, rhs) => Ok(lhs.eval_int(values)? <= rhs.eval_int(values)?),
            Term::And(lhs, rhs) => Ok(lhs.eval_bool(values)? && rhs.eval_bool(values)?),
            Term::Or(lhs, rhs) => Ok(lhs.eval_bool(values)? || rhs.eval_bool(values)?),
            Term::Not(inner) => Ok(!inner.eval_bool(values)?),
            _ => Err(SatStreamError::Backend(format!(
                "expected boolean term, found {self}"
            ))),
        }
    }
}

impl Add for Term {
    type Output = Term;

    fn add(self, rhs: Term) -> Term {
        Term::Add(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        Term::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Not for Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::Not(Box::new(self))
    }
}

impl From<IntVar> for Term {
    fn from(var: IntVar) -> Self {
        Term::Var(var)
    }
}

impl fmt::Display for IntVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.index)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{var}"),
            Term::Int(value) => write!(f, "{value}"),
            Term::Bool(value) => write!(f, "{value}"),
            Term::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Term::Mul(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Term::Eq(lhs, rhs) => write!(f, "({lhs} == {rhs})"),
            Term::Neq(lhs, rhs) => write!(f, "({lhs} != {rhs})"),
            Term::Lt(lhs, rhs) => write!(f, "({lhs} < {rhs})"),
            Term::Le(lhs, rhs) => write!(f, "({lhs} <= {rhs})"),
            Term::And(lhs, rhs) => write!(f, "({lhs} && {rhs})"),
            Term::Or(lhs, rhs) => write!(f, "({lhs} || {rhs})"),
            Term::Not(inner) => write!(f, "!{inner}"),
        }
    }
}
