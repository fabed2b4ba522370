//! Trailing-edge debouncer
//!
//! Each `push` restarts the quiet period; the sink only sees the last value
//! pushed once no new value arrived for the whole delay. Timers run on the
//! tokio runtime that was current when the debouncer was created, or the one
//! current at `push`. Without any runtime there is nothing to wait on and
//! values are delivered immediately.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Sink<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    sink: Sink<T>,
    runtime: Option<Handle>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, sink: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            sink: Arc::new(sink),
            runtime: Handle::try_current().ok(),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing any value still waiting
    pub fn push(&self, value: T) {
        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            tracing::debug!("No tokio runtime, delivering debounced value immediately");
            self.cancel();
            (self.sink)(value);
            return;
        };

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            sink(value);
        }));
    }

    /// Drop the waiting value, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }

    /// True while a value is waiting for its delay to elapse
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
