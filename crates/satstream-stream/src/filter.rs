//! Predicate filtering.

use std::future::Future;
use std::pin::pin;

use async_stream::{stream, try_stream};
use futures::{Stream, StreamExt};

/// Yields the elements of `stream` for which `predicate` resolves to `true`.
///
/// The predicate is awaited for each element before the next element is
/// pulled. Rejected elements are dropped.
///
/// # Example
///
/// ```
/// use futures::{future, stream, StreamExt};
/// use satstream_stream::filter;
///
/// # futures::executor::block_on(async {
/// let odd: Vec<u32> = filter(stream::iter(0..6), |n| future::ready(n % 2 == 1))
///     .collect()
///     .await;
/// assert_eq!(odd, vec![1, 3, 5]);
/// # });
/// ```
pub fn filter<St, F, Fut>(stream: St, mut predicate: F) -> impl Stream<Item = St::Item>
where
    St: Stream,
    F: FnMut(&St::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    stream! {
        let mut input = pin!(stream);
        while let Some(item) = input.next().await {
            if predicate(&item).await {
                yield item;
            }
        }
    }
}

/// Fallible [`filter`] over a stream of results.
///
/// An `Err` from the input or from the predicate is yielded and ends the
/// output; the input is not pulled again.
pub fn try_filter<St, T, E, F, Fut>(
    stream: St,
    mut predicate: F,
) -> impl Stream<Item = Result<T, E>>
where
    St: Stream<Item = Result<T, E>>,
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    try_stream! {
        let mut input = pin!(stream);
        while let Some(item) = input.next().await {
            let item = item?;
            if predicate(&item).await? {
                yield item;
            }
        }
    }
}
