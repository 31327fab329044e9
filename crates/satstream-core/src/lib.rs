//! satstream Core - Error type and solver capability traits
//!
//! This crate provides the fundamental abstractions shared by the
//! satstream crates:
//! - [`SatStreamError`] and the [`Result`] alias
//! - [`IncrementalSolver`]: the capability set an enumeration needs from a
//!   satisfiability engine
//! - [`Model`]: a satisfying assignment handed out after a `Sat` verdict

pub mod error;
pub mod solver;

pub use error::{Result, SatStreamError};
pub use solver::{IncrementalSolver, Model, Verdict};
