//! Tests for the lazy combinators.

use std::cell::RefCell;
use std::pin::pin;
use std::sync::atomic::Ordering;

use futures::{future, stream, StreamExt};
use satstream_core::SatStreamError;
use satstream_test::streams::{counting, failing, from_values, poisoned};

use super::*;

#[tokio::test]
async fn test_filter() {
    let results: Vec<i32> = filter(from_values([1, 2, 3, 4, 5]), |n| future::ready(n % 2 == 0))
        .collect()
        .await;
    assert_eq!(results, vec![2, 4]);
}

#[tokio::test]
async fn test_filter_with_suspending_predicate() {
    let results: Vec<i32> = filter(from_values([5, 1, 4, 2]), |n| {
        let keep = *n > 2;
        async move {
            tokio::task::yield_now().await;
            keep
        }
    })
    .collect()
    .await;
    assert_eq!(results, vec![5, 4]);
}

#[tokio::test]
async fn test_filter_discards_only_failing_elements() {
    let seen = RefCell::new(Vec::new());
    let kept: Vec<i32> = filter(stream::iter(1..=6), |n| {
        seen.borrow_mut().push(*n);
        future::ready(n % 3 != 0)
    })
    .collect()
    .await;

    assert_eq!(kept, vec![1, 2, 4, 5]);
    let rejected: Vec<i32> = seen
        .into_inner()
        .into_iter()
        .filter(|n| !kept.contains(n))
        .collect();
    assert_eq!(rejected, vec![3, 6]);
}

#[tokio::test]
async fn test_map() {
    let results: Vec<i32> = map(from_values([1, 2, 3]), |n| future::ready(n * n))
        .collect()
        .await;
    assert_eq!(results, vec![1, 4, 9]);
}

#[tokio::test]
async fn test_map_changes_type_and_preserves_order() {
    let results: Vec<String> = map(from_values(["c", "a", "b"]), |s| async move {
        tokio::task::yield_now().await;
        s.to_uppercase()
    })
    .collect()
    .await;
    assert_eq!(results, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_take() {
    let results: Vec<i32> = take(from_values([1, 2, 3, 4, 5]), 3).collect().await;
    assert_eq!(results, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_take_zero_consumes_nothing() {
    let results: Vec<i32> = take(poisoned::<i32>(), 0).collect().await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_take_zero_is_already_complete() {
    let (source, produced) = counting(3);
    let mut limited = pin!(take(source, 0));

    assert_eq!(limited.next().await, None);
    assert_eq!(limited.next().await, None);
    assert_eq!(produced.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_take_larger_than_stream_yields_all() {
    let results: Vec<i32> = take(from_values([1, 2, 3]), 5).collect().await;
    assert_eq!(results, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_take_does_not_consume_more_than_needed() {
    let (source, produced) = counting(10);
    let results: Vec<usize> = take(source, 4).collect().await;

    assert_eq!(results, vec![0, 1, 2, 3]);
    assert_eq!(produced.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_take_exact_length_ends_without_extra_pull() {
    let source = from_values([1, 2]).chain(poisoned());
    let results: Vec<i32> = take(source, 2).collect().await;
    assert_eq!(results, vec![1, 2]);
}

#[tokio::test]
async fn test_abandoned_stream_stops_producing() {
    let (source, produced) = counting(10);
    {
        let mut mapped = pin!(map(source, |n| future::ready(n + 1)));
        assert_eq!(mapped.next().await, Some(1));
        assert_eq!(mapped.next().await, Some(2));
    }
    assert_eq!(produced.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_combinators_compose_lazily() {
    let (source, produced) = counting(100);
    let results: Vec<usize> = take(
        map(filter(source, |n| future::ready(n % 2 == 1)), |n| {
            future::ready(n * 10)
        }),
        3,
    )
    .collect()
    .await;

    assert_eq!(results, vec![10, 30, 50]);
    // 0..=5 pulled: the sixth element is the third odd one.
    assert_eq!(produced.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn test_try_filter_passes_values() {
    let input = from_values(vec![Ok(1), Ok(2), Ok(3)]);
    let results: Vec<Result<i32, SatStreamError>> =
        try_filter(input, |n| future::ready(Ok(*n != 2))).collect().await;
    assert_eq!(results, vec![Ok(1), Ok(3)]);
}

#[tokio::test]
async fn test_try_filter_upstream_error_ends_stream() {
    let input = from_values(vec![Ok(1)]).chain(failing("upstream broke"));
    let results: Vec<Result<i32, SatStreamError>> =
        try_filter(input, |_| future::ready(Ok(true))).collect().await;

    assert_eq!(
        results,
        vec![
            Ok(1),
            Err(SatStreamError::Upstream("upstream broke".to_string()))
        ]
    );
}

#[tokio::test]
async fn test_try_filter_predicate_error_ends_stream() {
    let (source, produced) = counting(10);
    let input = source.map(Ok::<usize, SatStreamError>);
    let results: Vec<Result<usize, SatStreamError>> = try_filter(input, |n| {
        future::ready(if *n == 2 {
            Err(SatStreamError::Upstream("predicate failed".to_string()))
        } else {
            Ok(true)
        })
    })
    .collect()
    .await;

    assert_eq!(results.len(), 3);
    assert!(results[2].is_err());
    assert_eq!(produced.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_try_map_mapper_error_ends_stream() {
    let input = from_values(vec![Ok(1), Ok(2), Ok(3)]);
    let results: Vec<Result<i32, SatStreamError>> = try_map(input, |n| {
        future::ready(if n == 2 {
            Err(SatStreamError::Upstream("mapper failed".to_string()))
        } else {
            Ok(n * 100)
        })
    })
    .collect()
    .await;

    assert_eq!(
        results,
        vec![
            Ok(100),
            Err(SatStreamError::Upstream("mapper failed".to_string()))
        ]
    );
}

#[tokio::test]
async fn test_try_map_upstream_error_is_not_pulled_past() {
    let results: Vec<Result<i32, SatStreamError>> =
        try_map(failing::<i32>("first"), |n| future::ready(Ok(n)))
            .collect()
            .await;
    assert_eq!(
        results,
        vec![Err(SatStreamError::Upstream("first".to_string()))]
    );
}

#[tokio::test]
async fn test_extension_methods() {
    let (source, produced) = counting(10);
    let results: Vec<usize> = source
        .lazy_filter(|n| future::ready(*n > 3))
        .lazy_map(|n| future::ready(n - 3))
        .lazy_take(2)
        .collect()
        .await;

    assert_eq!(results, vec![1, 2]);
    assert_eq!(produced.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn test_try_extension_methods() {
    let results: Vec<Result<i32, SatStreamError>> = from_values(vec![Ok(1), Ok(2), Ok(3)])
        .lazy_try_filter(|n| future::ready(Ok(n % 2 == 1)))
        .lazy_try_map(|n| future::ready(Ok(-n)))
        .collect()
        .await;
    assert_eq!(results, vec![Ok(-1), Ok(-3)]);
}
