//! Instrumented stream fixtures.
//!
//! # Example
//!
//! ```
//! use futures::StreamExt;
//! use satstream_test::streams::counting;
//! use std::sync::atomic::Ordering;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let (stream, produced) = counting(10);
//! let first: Vec<usize> = stream.take(2).collect().await;
//! assert_eq!(first, vec![0, 1]);
//! assert_eq!(produced.load(Ordering::SeqCst), 2);
//! # });
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::Poll;

use async_stream::stream;
use futures::future;
use futures::stream::{self, Stream, StreamExt};
use satstream_core::{Result, SatStreamError};

/// Finite stream over `values` that suspends once before every item.
pub fn from_values<T>(values: impl IntoIterator<Item = T>) -> impl Stream<Item = T> {
    let values: Vec<T> = values.into_iter().collect();
    stream! {
        for value in values {
            tokio::task::yield_now().await;
            yield value;
        }
    }
}

/// Stream of `0..len` that counts its production steps.
///
/// The counter is incremented right before each item is yielded, so after a
/// consumer stops pulling it equals the number of items actually produced.
pub fn counting(len: usize) -> (impl Stream<Item = usize>, Arc<AtomicUsize>) {
    let produced = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&produced);
    let stream = stream! {
        for i in 0..len {
            counter.fetch_add(1, Ordering::SeqCst);
            yield i;
        }
    };
    (stream, produced)
}

/// Stream whose first production step panics.
pub fn poisoned<T>() -> impl Stream<Item = T> {
    stream::poll_fn(|_| -> Poll<Option<T>> { panic!("should not be consumed") })
}

/// Stream that yields one upstream error and panics if pulled again.
pub fn failing<T>(message: &str) -> impl Stream<Item = Result<T>> {
    let error = SatStreamError::Upstream(message.to_string());
    stream::once(future::ready(Err(error))).chain(poisoned())
}
