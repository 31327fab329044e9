//! Bounded prefix.

use std::pin::pin;

use async_stream::stream;
use futures::{Stream, StreamExt};

/// Yields the first `count` elements of `stream`, then ends.
///
/// With `count == 0` the input is dropped without ever being polled. After the
/// `count`-th element the output ends on the next poll without pulling the
/// input again, so wrapping an effectful producer in `take(_, k)` runs exactly
/// `k` production steps.
///
/// # Example
///
/// ```
/// use futures::{stream, StreamExt};
/// use satstream_stream::take;
///
/// # futures::executor::block_on(async {
/// let all: Vec<i32> = take(stream::iter(vec![1, 2, 3]), 5).collect().await;
/// assert_eq!(all, vec![1, 2, 3]);
/// # });
/// ```
pub fn take<St>(stream: St, count: usize) -> impl Stream<Item = St::Item>
where
    St: Stream,
{
    stream! {
        if count == 0 {
            return;
        }
        let mut input = pin!(stream);
        let mut taken = 0;
        while let Some(item) = input.next().await {
            yield item;
            taken += 1;
            if taken == count {
                break;
            }
        }
    }
}
