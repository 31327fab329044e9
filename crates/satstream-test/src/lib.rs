//! Shared test fixtures for satstream crates.
//!
//! This crate provides a reference solver and instrumented streams for
//! testing. It depends only on `satstream-core` so the stream and solver
//! crates can both use it as a dev-dependency.
//!
//! - [`finite_domain`] - Brute-force incremental solver over bounded integers
//! - [`streams`] - Streams that count, fail, or refuse to be polled
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! satstream-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use satstream_test::finite_domain::{FiniteDomainSolver, Term};
//! use satstream_test::streams::{counting, poisoned};
//! ```

pub mod finite_domain;
pub mod streams;

// Re-export commonly used types at crate root for convenience
pub use finite_domain::{Assignment, FiniteDomainSolver, IntVar, Term};
pub use streams::{counting, failing, from_values, poisoned};
