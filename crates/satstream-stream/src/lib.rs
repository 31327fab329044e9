//! Lazy asynchronous stream combinators.
//!
//! Each combinator consumes one [`Stream`](futures::Stream) and returns another.
//! Nothing runs until the returned stream is polled, and each poll of the
//! output drives at most one poll of the input at a time.
//!
//! # Overview
//!
//! - [`filter`]: keep elements whose (possibly suspending) predicate holds
//! - [`map`]: transform every element with a (possibly suspending) mapper
//! - [`take`]: the first `count` elements, with no pull beyond them
//! - [`try_filter`] / [`try_map`]: the same over `Result` streams, ending
//!   after the first error
//! - [`LazyStreamExt`]: the combinators as methods
//!
//! # Example
//!
//! ```
//! use futures::{future, stream, StreamExt};
//! use satstream_stream::{filter, map, take};
//!
//! # futures::executor::block_on(async {
//! let evens = filter(stream::iter(1..=10), |n| future::ready(n % 2 == 0));
//! let squares = map(evens, |n| future::ready(n * n));
//! let first: Vec<i32> = take(squares, 3).collect().await;
//!
//! assert_eq!(first, vec![4, 16, 36]);
//! # });
//! ```
//!
//! # Cancellation
//!
//! Dropping an output stream drops its input and any pending predicate or
//! mapper future. No element is produced that the consumer did not ask for.

mod ext;
mod filter;
mod map;
mod take;

#[cfg(test)]
mod tests;

pub use ext::LazyStreamExt;
pub use filter::{filter, try_filter};
pub use map::{map, try_map};
pub use take::take;
