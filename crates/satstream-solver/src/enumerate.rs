//! Model enumeration loop.

use std::time::Duration;

use async_stream::try_stream;
use futures::Stream;
use satstream_core::{IncrementalSolver, Result, SatStreamError, Verdict};
use tracing::{debug, trace, warn};

use crate::blocking::blocking_constraint;

/// Knobs of the enumeration loop that [`Enumerator`](crate::Enumerator) sets.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LoopOptions {
    pub(crate) check_timeout: Option<Duration>,
    pub(crate) reject_empty_variables: bool,
}

/// Lazily enumerates the models of `solver` that differ on `variables`.
///
/// Each iteration checks satisfiability, yields the model on `sat`, and
/// before the next check asserts a constraint excluding every model that
/// agrees with the yielded one on all of `variables`. The stream ends on
/// `unsat` (or `unknown`).
///
/// If there could be infinitely many solutions, the stream never ends.
/// Bound it with [`take`](satstream_stream::take), which stops without an
/// extra solver call.
///
/// The solver is borrowed for as long as the stream lives. Blocking
/// constraints stay asserted after the stream is dropped; the constraint for
/// the last yielded model is only asserted if the stream is polled again.
///
/// With an empty `variables` list the blocking constraint is `false`: the
/// solver becomes unsatisfiable after the first model and the stream ends.
/// Supply at least one variable for a meaningful enumeration.
///
/// # Errors
///
/// A failed `check`, `model`, `assert` or value lookup is yielded as the last
/// item. No model is yielded and no constraint is asserted for the failed
/// iteration.
///
/// # Example
///
/// ```
/// use futures::{future, StreamExt};
/// use satstream_core::{IncrementalSolver, Model};
/// use satstream_solver::enumerate_solutions;
/// use satstream_stream::map;
/// use satstream_test::finite_domain::{FiniteDomainSolver, Term};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut solver = FiniteDomainSolver::new();
/// let x = solver.int_var("x", -10..=10);
/// solver.assert((x.term() * x.term()).equals(Term::int(4))).unwrap();
///
/// let vars = [x];
/// let mut roots: Vec<i64> = map(enumerate_solutions(&mut solver, &vars), |model| {
///     future::ready(model.and_then(|m| m.value_of(&x)).unwrap())
/// })
/// .collect()
/// .await;
/// roots.sort();
/// assert_eq!(roots, vec![-2, 2]);
/// # });
/// ```
pub fn enumerate_solutions<'a, S>(
    solver: &'a mut S,
    variables: &'a [S::Var],
) -> impl Stream<Item = Result<S::Model>> + 'a
where
    S: IncrementalSolver + 'a,
{
    solutions(solver, variables, LoopOptions::default())
}

pub(crate) fn solutions<'a, S>(
    solver: &'a mut S,
    variables: &'a [S::Var],
    options: LoopOptions,
) -> impl Stream<Item = Result<S::Model>> + 'a
where
    S: IncrementalSolver + 'a,
{
    try_stream! {
        debug!(event = "enumeration_start", variable_count = variables.len());
        if variables.is_empty() {
            if options.reject_empty_variables {
                Err::<(), _>(SatStreamError::NoVariables).inspect_err(log_failure)?;
            }
            warn!(
                event = "empty_variables",
                "no variables of interest; at most one model will be enumerated"
            );
        }

        let mut pending: Option<S::Expr> = None;
        let mut found = 0usize;
        loop {
            if let Some(block) = pending.take() {
                solver.assert(block).inspect_err(log_failure)?;
                trace!(event = "blocking_constraint_asserted", after_solution = found);
            }

            match check(&mut *solver, options.check_timeout)
                .await
                .inspect_err(log_failure)?
            {
                Verdict::Sat => {}
                Verdict::Unsat => {
                    debug!(event = "enumeration_exhausted", solutions = found);
                    break;
                }
                Verdict::Unknown => {
                    warn!(
                        event = "enumeration_incomplete",
                        solutions = found,
                        "solver returned unknown; remaining solutions were not enumerated"
                    );
                    break;
                }
            }

            let model = solver.model().inspect_err(log_failure)?;
            let block =
                blocking_constraint(&*solver, &model, variables).inspect_err(log_failure)?;
            pending = Some(block);
            found += 1;
            trace!(event = "solution_found", index = found);
            yield model;
        }
    }
}

async fn check<S>(solver: &mut S, limit: Option<Duration>) -> Result<Verdict>
where
    S: IncrementalSolver,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, solver.check())
            .await
            .map_err(|_| SatStreamError::Timeout(limit))?,
        None => solver.check().await,
    }
}

fn log_failure(error: &SatStreamError) {
    debug!(event = "enumeration_failed", error = %error);
}
