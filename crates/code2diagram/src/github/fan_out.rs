use std::{future::Future, panic, sync::Arc};

use tokio::{sync::Semaphore, task::JoinSet};

/// Runs `task` over every item with at most `limit` futures in flight.
///
/// Outputs are returned in input order. Tasks are expected to capture their
/// own failures in `Output`; a panicking task is resumed on the caller.
/// A `limit` of zero is treated as one.
///
/// Must be called from within a Tokio runtime.
pub async fn fan_out<T, F, Fut>(items: Vec<T>, limit: usize, task: F) -> Vec<Fut::Output>
where
    F: Fn(T) -> Fut,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let mut set = JoinSet::new();
    let len = items.len();

    for (idx, item) in items.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let fut = task(item);
        set.spawn(async move {
            // The semaphore is never closed, so acquiring cannot fail.
            let _permit = semaphore.acquire_owned().await.ok();
            (idx, fut.await)
        });
    }

    let mut slots: Vec<Option<Fut::Output>> = (0..len).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, output)) => slots[idx] = Some(output),
            Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
            Err(err) => unreachable!("fan-out task cancelled: {err}"),
        }
    }

    slots.into_iter().flatten().collect()
}
