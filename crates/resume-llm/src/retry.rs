//! Client-owned retry policy for completion calls.

use std::future::Future;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use resume_core::error::{ResumeError, ResumeResult};
use tracing::warn;

/// Run `call` and retry it up to `max_retries` times on transient failures
/// (network errors, HTTP 429, HTTP 5xx) with exponential backoff.
pub(crate) async fn with_retries<T, F, Fut>(
    provider: &str,
    max_retries: usize,
    call: F,
) -> ResumeResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ResumeResult<T>>,
{
    call.retry(
        ExponentialBuilder::default()
            .with_max_times(max_retries)
            .with_min_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(60)),
    )
    .when(ResumeError::is_transient)
    .notify(|err, dur| {
        warn!(
            provider,
            retry_after = ?err.retry_after(),
            "Call failed, retrying in {:?}: {}",
            dur,
            err
        );
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_transient_errors_retry_until_budget() {
        let counter = AtomicUsize::new(0);
        let attempts = &counter;
        let result: ResumeResult<()> = with_retries("test", 3, || async move {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(ResumeError::from_http_status(503, "unavailable"))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 4, "one call plus three retries");
    }

    #[tokio::test(start_paused = true)]
    async fn test_permanent_errors_do_not_retry() {
        let counter = AtomicUsize::new(0);
        let attempts = &counter;
        let result: ResumeResult<()> = with_retries("test", 3, || async move {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(ResumeError::from_http_status(400, "bad request"))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failure() {
        let counter = AtomicUsize::new(0);
        let attempts = &counter;
        let result = with_retries("test", 3, || async move {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ResumeError::from_http_status(429, "slow down"))
            } else {
                Ok("done")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
