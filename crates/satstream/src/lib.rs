//! satstream - Lazy asynchronous enumeration of solver models
//!
//! Turn an incremental constraint solver into a stream of distinct models
//! and shape that stream with lazy combinators.
//!
//! # Example
//!
//! ```rust
//! use satstream::prelude::*;
//! use futures::{future, stream, StreamExt};
//!
//! # futures::executor::block_on(async {
//! let firsts: Vec<i32> = stream::iter(1..)
//!     .lazy_filter(|n| future::ready(n % 7 == 0))
//!     .lazy_take(2)
//!     .collect()
//!     .await;
//! assert_eq!(firsts, vec![7, 14]);
//! # });
//! ```

// Solver capability traits and errors
pub use satstream_core::{IncrementalSolver, Model, Result, SatStreamError, Verdict};

// Configuration
pub use satstream_config::{ConfigError, EnumerationConfig};

// Stream combinators
pub use satstream_stream::{filter, map, take, try_filter, try_map, LazyStreamExt};

// Enumeration
pub use satstream_solver::{blocking_constraint, enumerate_solutions, Enumerator};

// The stream trait every combinator consumes and produces
pub use futures::Stream;

pub mod prelude {
    pub use super::{enumerate_solutions, Enumerator, EnumerationConfig};
    pub use super::{filter, map, take, try_filter, try_map, LazyStreamExt};
    pub use super::{IncrementalSolver, Model, SatStreamError, Verdict};
}
