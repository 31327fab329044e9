//! Element mapping.

use std::future::Future;
use std::pin::pin;

use async_stream::{stream, try_stream};
use futures::{Stream, StreamExt};

/// Yields `mapper(item)` for every element of `stream`, in order.
pub fn map<St, U, F, Fut>(stream: St, mut mapper: F) -> impl Stream<Item = U>
where
    St: Stream,
    F: FnMut(St::Item) -> Fut,
    Fut: Future<Output = U>,
{
    stream! {
        let mut input = pin!(stream);
        while let Some(item) = input.next().await {
            yield mapper(item).await;
        }
    }
}

/// Fallible [`map`] over a stream of results.
///
/// An `Err` from the input or from the mapper is yielded and ends the output;
/// the input is not pulled again.
pub fn try_map<St, T, U, E, F, Fut>(stream: St, mut mapper: F) -> impl Stream<Item = Result<U, E>>
where
    St: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    try_stream! {
        let mut input = pin!(stream);
        while let Some(item) = input.next().await {
            yield mapper(item?).await?;
        }
    }
}
