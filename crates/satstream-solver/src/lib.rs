//! satstream Solution Enumerator
//!
//! This crate turns an [`IncrementalSolver`](satstream_core::IncrementalSolver)
//! into a lazy stream of pairwise-distinct models:
//! - [`enumerate_solutions`]: check, yield the model, block it, repeat
//! - [`blocking_constraint`]: the "some variable differs" formula
//! - [`Enumerator`]: enumeration driven by an
//!   [`EnumerationConfig`](satstream_config::EnumerationConfig)
//!
//! Logging levels:
//! - **DEBUG**: enumeration start, exhaustion, failures
//! - **TRACE**: each model found and each blocking constraint asserted
//! - **WARN**: empty variable list, `unknown` verdicts

mod blocking;
mod enumerate;
mod enumerator;


pub use blocking::blocking_constraint;
pub use enumerate::enumerate_solutions;
pub use enumerator::Enumerator;
