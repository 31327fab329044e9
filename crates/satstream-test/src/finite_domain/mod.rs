//! Brute-force incremental solver over bounded integer variables.
//!
//! [`FiniteDomainSolver`] implements [`IncrementalSolver`] by exhaustive
//! search: each check walks every assignment in lexicographic order of the
//! declared domains and stops at the first one satisfying all asserted
//! constraints. That makes the solution order deterministic, which keeps the
//! enumeration tests exact.
//!
//! The solver counts its calls and can inject failures so tests can observe
//! exactly which solver operations an enumeration performed.
//!
//! # Example
//!
//! ```
//! use satstream_core::{IncrementalSolver, Model, Verdict};
//! use satstream_test::finite_domain::{FiniteDomainSolver, Term};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut solver = FiniteDomainSolver::new();
//! let x = solver.int_var("x", 0..=9);
//! solver.assert(x.term().equals(Term::int(7))).unwrap();
//!
//! assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
//! assert_eq!(solver.model().unwrap().value_of(&x).unwrap(), 7);
//! # });
//! ```

mod term;

use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use satstream_core::{IncrementalSolver, Model, Result, SatStreamError, Verdict};

pub use term::{IntVar, Term};

/// A satisfying assignment found by [`FiniteDomainSolver`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<i64>,
}

impl Assignment {
    /// Values indexed by variable declaration order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl Model<IntVar> for Assignment {
    type Value = i64;

    fn value_of(&self, var: &IntVar) -> Result<i64> {
        self.values
            .get(var.index())
            .copied()
            .ok_or_else(|| SatStreamError::UnknownVariable(var.to_string()))
    }
}

#[derive(Debug, Default)]
struct Faults {
    check_at: Option<usize>,
    unknown_at: Option<usize>,
    assert_at: Option<usize>,
    model: bool,
}

/// Exhaustive-search solver over bounded integers.
#[derive(Debug, Default)]
pub struct FiniteDomainSolver {
    names: Vec<String>,
    domains: Vec<RangeInclusive<i64>>,
    constraints: Vec<Term>,
    last_model: Option<Assignment>,
    check_count: usize,
    assertion_count: usize,
    check_delay: Option<Duration>,
    faults: Faults,
}

impl FiniteDomainSolver {
    /// Creates a solver with no variables and no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an integer variable ranging over `domain`.
    pub fn int_var(&mut self, name: impl Into<String>, domain: RangeInclusive<i64>) -> IntVar {
        self.names.push(name.into());
        self.domains.push(domain);
        IntVar::new(self.domains.len() - 1)
    }

    /// Name given to `var` at declaration.
    pub fn name(&self, var: IntVar) -> Option<&str> {
        self.names.get(var.index()).map(String::as_str)
    }

    /// Constraints asserted so far, in order.
    pub fn constraints(&self) -> &[Term] {
        &self.constraints
    }

    /// Number of `check` calls, including failed ones.
    pub fn check_count(&self) -> usize {
        self.check_count
    }

    /// Number of `assert` calls, including failed ones.
    pub fn assertion_count(&self) -> usize {
        self.assertion_count
    }

    /// Makes every check sleep for `delay` before searching.
    pub fn with_check_delay(mut self, delay: Duration) -> Self {
        self.check_delay = Some(delay);
        self
    }

    /// Makes the `n`-th check (1-based) fail.
    pub fn fail_check_at(&mut self, n: usize) {
        self.faults.check_at = Some(n);
    }

    /// Makes the `n`-th check (1-based) give up with [`Verdict::Unknown`].
    pub fn unknown_at(&mut self, n: usize) {
        self.faults.unknown_at = Some(n);
    }

    /// Makes the `n`-th assert (1-based) fail without adding the constraint.
    pub fn fail_assert_at(&mut self, n: usize) {
        self.faults.assert_at = Some(n);
    }

    /// Makes every model retrieval fail.
    pub fn fail_model(&mut self) {
        self.faults.model = true;
    }

    fn search(&self) -> Result<Option<Assignment>> {
        if self.domains.iter().any(|domain| domain.is_empty()) {
            return Ok(None);
        }
        let mut values: Vec<i64> = self.domains.iter().map(|domain| *domain.start()).collect();
        loop {
            if self.satisfies(&values)? {
                return Ok(Some(Assignment { values }));
            }
            if !self.advance(&mut values) {
                return Ok(None);
            }
        }
    }

    fn satisfies(&self, values: &[i64]) -> Result<bool> {
        for constraint in &self.constraints {
            if !constraint.eval_bool(values)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // Odometer step; the last variable moves fastest.
    fn advance(&self, values: &mut [i64]) -> bool {
        for (value, domain) in values.iter_mut().zip(&self.domains).rev() {
            if *value < *domain.end() {
                *value += 1;
                return true;
            }
            *value = *domain.start();
        }
        false
    }
}

#[async_trait(?Send)]
impl IncrementalSolver for FiniteDomainSolver {
    type Var = IntVar;
    type Value = i64;
    type Expr = Term;
    type Model = Assignment;

    async fn check(&mut self) -> Result<Verdict> {
        self.check_count += 1;
        self.last_model = None;
        match self.check_delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }
        if self.faults.check_at == Some(self.check_count) {
            return Err(SatStreamError::Backend(format!(
                "injected failure in check #{}",
                self.check_count
            )));
        }
        if self.faults.unknown_at == Some(self.check_count) {
            return Ok(Verdict::Unknown);
        }
        self.last_model = self.search()?;
        Ok(if self.last_model.is_some() {
            Verdict::Sat
        } else {
            Verdict::Unsat
        })
    }

    fn model(&self) -> Result<Assignment> {
        if self.faults.model {
            return Err(SatStreamError::Backend("injected failure in model".to_string()));
        }
        self.last_model.clone().ok_or(SatStreamError::ModelUnavailable)
    }

    fn assert(&mut self, constraint: Term) -> Result<()> {
        self.assertion_count += 1;
        if self.faults.assert_at == Some(self.assertion_count) {
            return Err(SatStreamError::Backend(format!(
                "injected failure in assert #{}",
                self.assertion_count
            )));
        }
        self.constraints.push(constraint);
        self.last_model = None;
        Ok(())
    }

    fn neq(&self, var: &IntVar, value: &i64) -> Term {
        var.term().not_equals(Term::int(*value))
    }

    fn or(&self, lhs: Term, rhs: Term) -> Term {
        lhs.or(rhs)
    }

    fn bool_false(&self) -> Term {
        Term::bool(false)
    }
}

#[cfg(test)]
mod tests;
