//! Method-call form of the combinators.

use std::future::Future;

use futures::Stream;

use crate::{filter, map, take, try_filter, try_map};

/// Extension trait exposing the lazy combinators as methods on any [`Stream`].
///
/// Each method delegates to the free function of the same name.
///
/// # Example
///
/// ```
/// use futures::{future, stream, StreamExt};
/// use satstream_stream::LazyStreamExt;
///
/// # futures::executor::block_on(async {
/// let labels: Vec<String> = stream::iter(1..)
///     .lazy_filter(|n| future::ready(n % 3 == 0))
///     .lazy_map(|n| future::ready(format!("#{n}")))
///     .lazy_take(2)
///     .collect()
///     .await;
/// assert_eq!(labels, vec!["#3", "#6"]);
/// # });
/// ```
pub trait LazyStreamExt: Stream + Sized {
    /// See [`filter`](crate::filter).
    fn lazy_filter<F, Fut>(self, predicate: F) -> impl Stream<Item = Self::Item>
    where
        F: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        filter(self, predicate)
    }

    /// See [`map`](crate::map).
    fn lazy_map<U, F, Fut>(self, mapper: F) -> impl Stream<Item = U>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = U>,
    {
        map(self, mapper)
    }

    /// See [`take`](crate::take).
    fn lazy_take(self, count: usize) -> impl Stream<Item = Self::Item> {
        take(self, count)
    }

    /// See [`try_filter`](crate::try_filter).
    fn lazy_try_filter<T, E, F, Fut>(self, predicate: F) -> impl Stream<Item = Result<T, E>>
    where
        Self: Stream<Item = Result<T, E>>,
        F: FnMut(&T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        try_filter(self, predicate)
    }

    /// See [`try_map`](crate::try_map).
    fn lazy_try_map<T, U, E, F, Fut>(self, mapper: F) -> impl Stream<Item = Result<U, E>>
    where
        Self: Stream<Item = Result<T, E>>,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        try_map(self, mapper)
    }
}

impl<St: Stream> LazyStreamExt for St {}
