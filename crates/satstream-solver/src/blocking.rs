//! Blocking constraint construction.

use satstream_core::{IncrementalSolver, Model, Result};

/// Builds the constraint excluding `model` on `variables`.
///
/// The result is the disjunction of `var != model[var]` over every variable,
/// folded left from `false`: `((false || x != 1) || y != 2)`. Any model that
/// agrees with `model` on all of `variables` violates it.
///
/// An empty variable list yields exactly `false`.
///
/// # Errors
///
/// Propagates the first failed [`Model::value_of`] lookup.
pub fn blocking_constraint<S>(
    solver: &S,
    model: &S::Model,
    variables: &[S::Var],
) -> Result<S::Expr>
where
    S: IncrementalSolver,
{
    variables.iter().try_fold(solver.bool_false(), |acc, var| {
        let value = model.value_of(var)?;
        Ok(solver.or(acc, solver.neq(var, &value)))
    })
}
