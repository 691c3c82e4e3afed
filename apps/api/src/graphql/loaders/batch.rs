//! Per-execution batch loader
//!
//! A [`BatchLoader`] collects the parent keys requested by field resolvers
//! during one GraphQL execution and turns them into a single bulk fetch per
//! batch window.
//!
//! # Scheduling
//!
//! [`BatchLoader::load`] registers its key synchronously and never suspends.
//! The returned [`LoadFuture`] does not dispatch on its first poll: it wakes
//! itself and yields, so every sibling resolver polled in the same pass of the
//! execution task gets to register its key first. The first future polled a
//! second time while its window is still open dispatches the whole window.
//! There is no timer and no size threshold.
//!
//! The bulk fetch runs on a spawned tokio task and fans results out through
//! oneshot channels, so waiters observe either the group for their key
//! (empty if the fetcher omitted it) or the window's shared failure.
//!
//! # Scope
//!
//! One loader lives for exactly one execution. Cancelling it, or dropping the
//! last handle and every outstanding future, aborts in-flight fetches and
//! resolves everything still waiting with [`LoadError::Cancelled`].

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::future::Future;
use std::hash::Hash;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

/// Bulk backend operation behind a [`BatchLoader`]
///
/// `fetch` receives the deduplicated keys of one window in registration
/// order. It may omit keys that have no children.
pub trait BatchFetch: Send + Sync + 'static {
    type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;
    type Value: Clone + Send + Sync + 'static;
    type Error: Clone + Display + Send + Sync + 'static;

    fn fetch(
        &self,
        keys: &[Self::Key],
    ) -> impl Future<Output = Result<HashMap<Self::Key, Vec<Self::Value>>, Self::Error>> + Send;
}

/// Failure observed by a waiting [`LoadFuture`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError<E> {
    /// The bulk fetch for the key's window failed
    #[error("batch fetch failed: {0}")]
    Fetch(E),

    /// The owning execution was cancelled before the window completed
    #[error("batch load cancelled")]
    Cancelled,
}

/// Outcome of loading one key
pub type LoadResult<F> = Result<Vec<<F as BatchFetch>::Value>, LoadError<<F as BatchFetch>::Error>>;

type Slot<F> = Shared<BoxFuture<'static, LoadResult<F>>>;
type Pending<F> = (<F as BatchFetch>::Key, oneshot::Sender<LoadResult<F>>);

struct CacheEntry<F: BatchFetch> {
    slot: Slot<F>,
    window: u64,
}

struct LoaderState<F: BatchFetch> {
    cache: HashMap<F::Key, CacheEntry<F>>,
    window: Vec<Pending<F>>,
    window_id: u64,
    in_flight: Vec<AbortHandle>,
    cancelled: bool,
}

impl<F: BatchFetch> LoaderState<F> {
    fn is_open(&self, window: u64) -> bool {
        self.window_id == window && !self.window.is_empty()
    }

    fn cancel(&mut self) {
        self.cancelled = true;
        // Dropping the senders resolves their receivers as cancelled
        self.window.clear();
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}

impl<F: BatchFetch> Drop for LoaderState<F> {
    fn drop(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}

struct Inner<F: BatchFetch> {
    fetcher: Arc<F>,
    state: Mutex<LoaderState<F>>,
}

impl<F: BatchFetch> Inner<F> {
    fn lock(&self) -> MutexGuard<'_, LoaderState<F>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn dispatch(&self, state: &mut LoaderState<F>) {
        let batch = std::mem::take(&mut state.window);
        let window = state.window_id;
        state.window_id += 1;

        if batch.is_empty() {
            return;
        }

        state.in_flight.retain(|handle| !handle.is_finished());
        tracing::debug!(window, keys = batch.len(), "Dispatching batch window");

        let task = tokio::spawn(run_batch(Arc::clone(&self.fetcher), batch));
        state.in_flight.push(task.abort_handle());
    }
}

async fn run_batch<F: BatchFetch>(fetcher: Arc<F>, batch: Vec<Pending<F>>) {
    let (keys, senders): (Vec<_>, Vec<_>) = batch.into_iter().unzip();

    match fetcher.fetch(&keys).await {
        Ok(mut groups) => {
            for (key, sender) in keys.into_iter().zip(senders) {
                let group = groups.remove(&key).unwrap_or_default();
                // The waiter may already be gone
                let _ = sender.send(Ok(group));
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, keys = keys.len(), "Batch fetch failed");
            for sender in senders {
                let _ = sender.send(Err(LoadError::Fetch(err.clone())));
            }
        }
    }
}

/// Execution-scoped cache and batch window over a [`BatchFetch`]
pub struct BatchLoader<F: BatchFetch> {
    inner: Arc<Inner<F>>,
}

impl<F: BatchFetch> Clone for BatchLoader<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: BatchFetch> BatchLoader<F> {
    /// Create a loader with an empty cache and no open window
    pub fn new(fetcher: F) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher: Arc::new(fetcher),
                state: Mutex::new(LoaderState {
                    cache: HashMap::new(),
                    window: Vec::new(),
                    window_id: 0,
                    in_flight: Vec::new(),
                    cancelled: false,
                }),
            }),
        }
    }

    /// Request the children of `key`
    ///
    /// A key already cached or pending in this loader returns a future over
    /// the same slot; nothing new is registered.
    pub fn load(&self, key: F::Key) -> LoadFuture<F> {
        let mut guard = self.inner.lock();
        let state = &mut *guard;

        let (slot, window) = match state.cache.get(&key) {
            Some(entry) => (entry.slot.clone(), entry.window),
            None => {
                let (sender, receiver) = oneshot::channel();
                let slot: Slot<F> = receiver
                    .map(|received| received.unwrap_or(Err(LoadError::Cancelled)))
                    .boxed()
                    .shared();
                let window = state.window_id;

                if state.cancelled {
                    drop(sender);
                } else {
                    state.window.push((key.clone(), sender));
                }
                state.cache.insert(
                    key,
                    CacheEntry {
                        slot: slot.clone(),
                        window,
                    },
                );
                (slot, window)
            }
        };
        drop(guard);

        LoadFuture {
            inner: Arc::clone(&self.inner),
            slot,
            window,
            observed: false,
        }
    }

    /// Resolve every outstanding future with [`LoadError::Cancelled`]
    ///
    /// In-flight fetches are aborted and later calls to [`load`](Self::load)
    /// resolve as cancelled without reaching the fetcher.
    pub fn cancel(&self) {
        let mut state = self.inner.lock();
        let pending = state.window.len();
        let in_flight = state.in_flight.len();
        state.cancel();
        tracing::debug!(pending, in_flight, "Batch loader cancelled");
    }

    /// Guard that cancels this loader when dropped
    ///
    /// Held by the code driving an execution, so an abandoned execution
    /// (e.g. a dropped request future) cancels its loader even while
    /// resolvers still hold handles.
    pub fn cancel_on_drop(&self) -> CancelOnDrop<F> {
        CancelOnDrop {
            loader: self.clone(),
        }
    }
}

/// Returned by [`BatchLoader::cancel_on_drop`]
#[must_use = "the loader is cancelled as soon as the guard is dropped"]
pub struct CancelOnDrop<F: BatchFetch> {
    loader: BatchLoader<F>,
}

impl<F: BatchFetch> Drop for CancelOnDrop<F> {
    fn drop(&mut self) {
        self.loader.cancel();
    }
}

/// Future returned by [`BatchLoader::load`]
#[must_use = "futures do nothing unless polled"]
pub struct LoadFuture<F: BatchFetch> {
    inner: Arc<Inner<F>>,
    slot: Slot<F>,
    window: u64,
    observed: bool,
}

impl<F: BatchFetch> Future for LoadFuture<F> {
    type Output = LoadResult<F>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        if let Poll::Ready(result) = this.slot.poll_unpin(cx) {
            return Poll::Ready(result);
        }

        let mut state = this.inner.lock();
        if state.is_open(this.window) {
            if this.observed {
                this.inner.dispatch(&mut state);
            } else {
                // Yield once so siblings in this pass can join the window
                this.observed = true;
                cx.waker().wake_by_ref();
            }
        }

        Poll::Pending
    }
}
