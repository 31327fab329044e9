//! Configured enumeration.

use std::path::Path;

use futures::Stream;
use satstream_config::{ConfigError, EnumerationConfig};
use satstream_core::{IncrementalSolver, Result};
use satstream_stream::take;

use crate::enumerate::{solutions, LoopOptions};

/// Runs enumerations according to an [`EnumerationConfig`].
///
/// - `solution_limit` caps the stream with [`take`], so the solver is checked
///   exactly once per model consumed.
/// - `check_timeout_ms` puts a deadline on every check; an expired deadline is
///   yielded as [`SatStreamError::Timeout`](satstream_core::SatStreamError::Timeout).
/// - `reject_empty_variables` turns an empty variable list into
///   [`SatStreamError::NoVariables`](satstream_core::SatStreamError::NoVariables)
///   before the solver is touched.
///
/// Checks with a deadline need a Tokio runtime with the time driver enabled.
///
/// # Example
///
/// ```
/// use futures::StreamExt;
/// use satstream_config::EnumerationConfig;
/// use satstream_core::IncrementalSolver;
/// use satstream_solver::Enumerator;
/// use satstream_test::finite_domain::{FiniteDomainSolver, Term};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut solver = FiniteDomainSolver::new();
/// let x = solver.int_var("x", 0..=1000);
/// solver.assert(Term::int(10).lt(x.term())).unwrap();
///
/// let enumerator = Enumerator::new(EnumerationConfig::new().with_solution_limit(3));
/// let vars = [x];
/// let models: Vec<_> = enumerator.enumerate(&mut solver, &vars).collect().await;
///
/// assert_eq!(models.len(), 3);
/// assert_eq!(solver.check_count(), 3);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enumerator {
    config: EnumerationConfig,
}

impl Enumerator {
    /// Creates an enumerator with the given configuration.
    pub fn new(config: EnumerationConfig) -> Self {
        Self { config }
    }

    /// Creates an enumerator from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        EnumerationConfig::load(path).map(Self::new)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Lazily enumerates the models of `solver` that differ on `variables`.
    ///
    /// Same contract as [`enumerate_solutions`](crate::enumerate_solutions),
    /// with the configured limit, deadline and empty-list policy applied.
    pub fn enumerate<'a, S>(
        &self,
        solver: &'a mut S,
        variables: &'a [S::Var],
    ) -> impl Stream<Item = Result<S::Model>> + 'a
    where
        S: IncrementalSolver + 'a,
    {
        let options = LoopOptions {
            check_timeout: self.config.check_timeout(),
            reject_empty_variables: self.config.reject_empty_variables,
        };
        let limit = self.config.solution_limit.unwrap_or(usize::MAX);
        take(solutions(solver, variables, options), limit)
    }
}
