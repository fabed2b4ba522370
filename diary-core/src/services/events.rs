//! Change notifications
//!
//! Services publish a `ChangeEvent` after every successful write so views
//! holding derived state (the diary list, a detail page's retrospects) can
//! re-read storage. Listeners are registered explicitly and removed with
//! the id returned at subscription.

use std::sync::{Arc, Mutex, PoisonError};

/// What changed in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    DiaryCreated(u64),
    DiaryUpdated(u64),
    DiaryDeleted(u64),
    RetrospectCreated { id: u64, diary_id: u64 },
}

impl ChangeEvent {
    /// True for events that alter the diary collection
    pub fn touches_diaries(&self) -> bool {
        !matches!(self, ChangeEvent::RetrospectCreated { .. })
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Subscriber registry shared by the services of one application root
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listeners: Arc<Mutex<Listeners>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is called for every event until unsubscribed
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.next_id += 1;
        let id = SubscriptionId(listeners.next_id);
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Deliver an event to every listener in subscription order
    pub fn notify(&self, event: ChangeEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while being called
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!("Notifying {} listeners of {:?}", snapshot.len(), event);

        for listener in snapshot {
            listener(&event);
        }
    }
}
