//! The in-memory holder of the logged-in identity.
//!
//! One `SessionState` is created per application (or per test) and handed to
//! every client and view that needs it; there is no process-wide instance.
//! The login flag is derived from the identity slot, so it can never disagree
//! with it.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use futures::stream::{self, Stream};
use tokio::sync::watch;

use crate::models::identity::Identity;

type Observer = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: AtomicU64,
    callbacks: Mutex<BTreeMap<u64, Observer>>,
}

impl Observers {
    /// Calls every registered observer. The lock is released first so an
    /// observer may log in, log out, subscribe or unsubscribe.
    fn notify(&self, logged: bool) {
        let snapshot: Vec<Observer> = self
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for callback in snapshot {
            callback(logged);
        }
    }
}

/// Holds the current identity and publishes the login flag.
pub struct SessionState {
    identity: watch::Sender<Option<Identity>>,
    observers: Arc<Observers>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Creates an anonymous holder.
    pub fn new() -> Self {
        let (identity, _) = watch::channel(None);
        Self {
            identity,
            observers: Arc::new(Observers::default()),
        }
    }

    /// Stores `identity` and notifies every observer with `true`.
    pub fn log_in(&self, identity: Identity) {
        tracing::info!("🔐 Logged in as user {}", identity.id);
        self.identity.send_replace(Some(identity));
        self.observers.notify(true);
    }

    /// Clears the identity and notifies every observer with `false`.
    pub fn log_out(&self) {
        if let Some(previous) = self.identity.send_replace(None) {
            tracing::info!("👋 Logged out user {}", previous.id);
        }
        self.observers.notify(false);
    }

    pub fn is_logged(&self) -> bool {
        self.identity.borrow().is_some()
    }

    /// Returns a copy of the stored identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// Whether the stored identity has the admin flag. `false` when anonymous.
    pub fn is_admin(&self) -> bool {
        self.identity.borrow().as_ref().is_some_and(|identity| identity.admin)
    }

    /// A stream of the login flag.
    ///
    /// Yields the current flag as soon as it is polled, then once per change.
    /// Changes that happen between two polls are coalesced into the latest value.
    /// Each call returns an independent stream; the stream ends when the
    /// holder is dropped.
    pub fn is_logged_stream(&self) -> impl Stream<Item = bool> + Send + use<> {
        let receiver = self.identity.subscribe();
        stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first && receiver.changed().await.is_err() {
                return None;
            }
            let logged = receiver.borrow_and_update().is_some();
            Some((logged, (receiver, false)))
        })
    }

    /// Registers a synchronous observer of the login flag.
    ///
    /// `observer` is called right away with the current flag, then on every
    /// `log_in`/`log_out`, on the calling thread, before that call returns.
    /// It may call back into the holder; a change made from inside an
    /// observer is delivered to every observer before the outer call returns.
    /// The observer stays registered until the returned `Subscription` is dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        observer(self.is_logged());

        let id = self.observers.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(observer));

        Subscription {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }
}

/// Keeps an observer registered with a [`SessionState`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the observer"]
pub struct Subscription {
    id: u64,
    observers: Weak<Observers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            observers
                .callbacks
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.id);
        }
    }
}
