//! `Poller` — drives a poll state machine from a fetch closure and a timer.
//!
//! The scheduler is deliberately decoupled from derivation: the poller only
//! knows how to issue the fetch, gate stale completions, and apply events to
//! the shared [`PollState`].

use crate::error::SdkError;
use crate::poll::{PollEvent, PollState};

use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Boxed fetch future, as produced by the fetch closure on every cycle.
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, SdkError>> + Send>>;

type FetchFn<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;

/// Periodic fetcher for one pipeline.
///
/// Completions are last-write-wins by issue order: each `refetch` takes a
/// sequence number, and a completion whose sequence is no longer current is
/// dropped instead of overwriting newer data.
pub struct Poller<T> {
    state: Arc<RwLock<PollState<T>>>,
    seq: Arc<AtomicU64>,
    fetch: FetchFn<T>,
    interval: Duration,
}

impl<T> Clone for Poller<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            seq: self.seq.clone(),
            fetch: self.fetch.clone(),
            interval: self.interval,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Poller<T> {
    pub fn new<F, Fut>(interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        Self {
            state: Arc::new(RwLock::new(PollState::new())),
            seq: Arc::new(AtomicU64::new(0)),
            fetch: Arc::new(move || Box::pin(fetch()) as FetchFuture<T>),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current state snapshot.
    pub async fn state(&self) -> PollState<T> {
        self.state.read().await.clone()
    }

    pub async fn data(&self) -> Option<T> {
        self.state.read().await.data.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_updated
    }

    /// Run one fetch cycle.
    ///
    /// Idempotent and re-entrant: calling while a fetch is in flight simply
    /// issues a newer fetch, and the older completion is dropped when it
    /// finally resolves.
    pub async fn refetch(&self) {
        let issue = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.apply(PollEvent::Started);

        let result = (self.fetch)().await;

        if self.seq.load(Ordering::SeqCst) != issue {
            tracing::debug!(issue, "dropping stale poll completion");
            return;
        }

        let event = match result {
            Ok(data) => PollEvent::Succeeded {
                data,
                at: Utc::now(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "poll fetch failed");
                PollEvent::Failed {
                    message: e.to_string(),
                }
            }
        };
        self.state.write().await.apply(event);
    }

    /// Fetch immediately, then on every interval tick, until dropped.
    ///
    /// A zero interval fetches once and returns — there is no zero-period
    /// timer to wedge on.
    pub async fn run(&self) {
        self.refetch().await;
        if self.interval.is_zero() {
            return;
        }
        loop {
            futures_timer::Delay::new(self.interval).await;
            self.refetch().await;
        }
    }

    /// Spawn `run` as a background task. The loop is aborted when the
    /// returned handle drops, so the timer's lifetime is tied to its owner.
    #[cfg(feature = "native")]
    pub fn spawn(&self) -> PollHandle {
        let poller = self.clone();
        PollHandle {
            handle: tokio::task::spawn(async move { poller.run().await }),
        }
    }
}

/// Owner handle for a spawned poll loop.
#[cfg(feature = "native")]
pub struct PollHandle {
    handle: tokio::task::JoinHandle<()>,
}

#[cfg(feature = "native")]
impl PollHandle {
    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(feature = "native")]
impl Drop for PollHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::poll::PollStatus;
    use std::sync::atomic::AtomicU32;

    #[tokio::test]
    async fn test_refetch_success_populates_state() {
        let poller = Poller::new(Duration::from_secs(300), || async { Ok(41_u32) });
        assert_eq!(poller.state().await.status, PollStatus::Idle);

        poller.refetch().await;
        let state = poller.state().await;
        assert_eq!(state.status, PollStatus::Ready);
        assert_eq!(state.data, Some(41));
        assert!(state.error.is_none());
        assert!(state.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_refetch_failure_stores_message() {
        let poller: Poller<u32> = Poller::new(Duration::from_secs(300), || async {
            Err(SdkError::Http(HttpError::Timeout))
        });
        poller.refetch().await;
        let state = poller.state().await;
        assert_eq!(state.status, PollStatus::Failed);
        assert!(state.error.as_deref().unwrap().contains("Timeout"));
        assert!(state.data.is_none());
    }

    #[tokio::test]
    async fn test_failure_then_retry_clears_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let poller = Poller::new(Duration::from_secs(300), move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(SdkError::Other("failed to fetch data".into()))
                } else {
                    Ok(99_u32)
                }
            }
        });

        poller.refetch().await;
        assert_eq!(poller.state().await.status, PollStatus::Failed);

        poller.refetch().await;
        let state = poller.state().await;
        assert_eq!(state.status, PollStatus::Ready);
        assert_eq!(state.data, Some(99));
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_stale_completion_is_dropped() {
        // First issue resolves slowly with 1, second quickly with 2. The
        // slow completion must not overwrite the newer result.
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let poller = Poller::new(Duration::from_secs(300), move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n == 1 {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                } else {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
                Ok(n)
            }
        });

        let slow = poller.clone();
        let first = tokio::spawn(async move { slow.refetch().await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        poller.refetch().await;
        first.await.unwrap();

        assert_eq!(poller.data().await, Some(2));
    }

    #[tokio::test]
    async fn test_zero_interval_runs_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let poller = Poller::new(Duration::ZERO, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(0_u32) }
        });

        // Must terminate on its own rather than spin or panic.
        tokio::time::timeout(Duration::from_secs(1), poller.run())
            .await
            .expect("zero-interval run should return after one fetch");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_ticks_on_interval() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let poller = Poller::new(Duration::from_millis(25), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(0_u32) }
        });

        let _ = tokio::time::timeout(Duration::from_millis(120), poller.run()).await;
        assert!(calls.load(Ordering::SeqCst) >= 2);
    }
}
