//! Rate-limited FIFO request scheduler.
//!
//! [`RateLimitedScheduler`] owns an unbounded FIFO queue of opaque async
//! tasks, a single drain loop, and the two quota windows from
//! [`crate::core::quota`]. Callers hand in a task and get back a future for
//! that task's own outcome; the scheduler decides *when* the task runs, never
//! *what* it produces.
//!
//! Execution is strictly serialized: the drain loop does not start a task
//! until the previous one's call has completed. The upstream limits are on
//! total request count, not concurrency, and serialization keeps the window
//! counters exact without any read-modify-write races.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::config::RateLimitConfig;
use crate::core::quota::RateWindows;

/// Abstraction for spawning the drain loop on a runtime.
pub trait Spawn {
    /// Spawn an async task onto the runtime.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// A queued task, type-erased: runs the caller's operation and delivers the
/// outcome through its captured oneshot sender.
type Job = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send + 'static>;

struct Shared {
    queue: Mutex<VecDeque<Job>>,
    windows: Mutex<RateWindows>,
    draining: AtomicBool,
    poll_interval: Duration,
}

/// FIFO scheduler that keeps outbound request volume under two fixed-window
/// caps.
///
/// Cloning is cheap and clones share the same queue and quota state, so one
/// instance can be handed to every call site that needs throttled access.
///
/// # Example
///
/// ```rust,ignore
/// use riftline::config::RateLimitConfig;
/// use riftline::core::RateLimitedScheduler;
/// use riftline::runtime::TokioSpawner;
///
/// let scheduler = RateLimitedScheduler::new(&RateLimitConfig::default(), TokioSpawner::current());
/// let body = scheduler.enqueue(|| async { fetch_something().await }).await?;
/// ```
pub struct RateLimitedScheduler<S> {
    shared: Arc<Shared>,
    spawner: S,
}

impl<S: Clone> Clone for RateLimitedScheduler<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            spawner: self.spawner.clone(),
        }
    }
}

impl<S> RateLimitedScheduler<S> {
    /// Create a scheduler from validated limits and a spawner.
    #[must_use]
    pub fn new(limits: &RateLimitConfig, spawner: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                queue: Mutex::new(VecDeque::new()),
                windows: Mutex::new(RateWindows::new(
                    limits.burst_limit,
                    limits.burst_window(),
                    limits.sustained_limit,
                    limits.sustained_window(),
                )),
                draining: AtomicBool::new(false),
                poll_interval: limits.poll_interval(),
            }),
            spawner,
        }
    }

    /// Number of tasks waiting in the queue (excludes a task currently
    /// executing).
    #[must_use]
    pub fn queue_depth(&self) -> usize {
        self.shared.queue.lock().len()
    }
}

impl<S: Spawn> RateLimitedScheduler<S> {
    /// Append a task to the queue tail and return a future for its outcome.
    ///
    /// The queue position is fixed at call time, before the returned future
    /// is first polled, so concurrent callers need no coordination: start
    /// order equals `enqueue` call order. The task runs exactly once; its
    /// success or failure is delivered verbatim and never affects any other
    /// queued task. Dropping the returned future does not cancel the task.
    pub fn enqueue<T, F, Fut>(&self, task: F) -> QueuedRequest<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let job: Job = Box::new(move || {
            Box::pin(async move {
                let outcome = task().await;
                // The caller may have stopped waiting; the attempt was still
                // made upstream, so the quota charge stands either way.
                let _ = tx.send(outcome);
            })
        });

        let depth = {
            let mut queue = self.shared.queue.lock();
            queue.push_back(job);
            queue.len()
        };
        tracing::debug!(depth, "request queued");

        if !self.shared.draining.swap(true, Ordering::AcqRel) {
            self.spawner.spawn(drain_loop(Arc::clone(&self.shared)));
        }

        QueuedRequest { rx }
    }
}

/// The single drain loop: pops and runs tasks while both quota windows have
/// headroom, sleeping a fixed poll interval when they do not, and exiting
/// once the queue empties so a later `enqueue` can restart it.
async fn drain_loop(shared: Arc<Shared>) {
    loop {
        if shared.queue.lock().is_empty() {
            shared.draining.store(false, Ordering::Release);
            // An enqueue may have raced the shutdown: if new work arrived and
            // no other loop claimed the guard, keep going instead of exiting.
            if shared.queue.lock().is_empty() || shared.draining.swap(true, Ordering::AcqRel) {
                tracing::debug!("queue drained, loop idle");
                return;
            }
            continue;
        }

        let admitted = {
            let mut windows = shared.windows.lock();
            windows.roll(Instant::now());
            windows.has_headroom()
        };
        if !admitted {
            tracing::trace!("quota exhausted, throttled");
            tokio::time::sleep(shared.poll_interval).await;
            continue;
        }

        // Only this loop pops, so the non-empty check above still holds.
        let Some(job) = shared.queue.lock().pop_front() else {
            continue;
        };
        shared.windows.lock().record();
        job().await;
    }
}

/// Future for a task's outcome, returned by
/// [`RateLimitedScheduler::enqueue`].
pub struct QueuedRequest<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Future for QueuedRequest<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // Every accepted task is eventually executed and its sender used;
            // a closed channel means the scheduler broke that invariant.
            Poll::Ready(Err(_)) => unreachable!("queued task dropped without being run"),
            Poll::Pending => Poll::Pending,
        }
    }
}
