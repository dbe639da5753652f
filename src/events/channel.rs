//! Generic synchronous publish/subscribe channel.

use crate::error::Result;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::trace;

use super::types::ListenerId;

/// Callback registered on a channel.
///
/// Listeners return a `Result` so a fault can propagate to the publisher;
/// the channel itself never swallows errors.
pub type Listener<E> = Arc<dyn Fn(&E) -> Result<()> + Send + Sync>;

/// Removal half of a channel, type-erased so handles stay non-generic.
trait Revoke: Send + Sync {
    /// Remove the registration with this id, if it is still live.
    fn revoke(&self, id: ListenerId) -> bool;
}

struct ChannelInner<E: 'static> {
    /// Registrations in subscription order.
    listeners: RwLock<Vec<(ListenerId, Listener<E>)>>,

    /// Counter for registration ids.
    next_id: AtomicU64,
}

impl<E: 'static> Revoke for ChannelInner<E> {
    fn revoke(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }
}

/// A synchronous publish/subscribe channel for one event type.
///
/// Listeners are invoked in subscription order. `publish` iterates over a
/// snapshot of the current registrations, so a listener that subscribes
/// or unsubscribes during delivery affects subsequent publishes only.
pub struct EventChannel<E: 'static> {
    inner: Arc<ChannelInner<E>>,
}

impl<E: 'static> EventChannel<E> {
    /// Create a channel with no listeners.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Register a listener.
    ///
    /// Returns a handle that revokes exactly this registration.
    /// Subscribing the same callback more than once produces independent
    /// registrations with independent handles.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&E) -> Result<()> + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        self.inner.listeners.write().push((id, Arc::new(listener)));
        trace!(listener = %id, "listener subscribed");

        let weak: Weak<ChannelInner<E>> = Arc::downgrade(&self.inner);
        let channel: Weak<dyn Revoke> = weak;
        SubscriptionHandle { id, channel }
    }

    /// Deliver `event` to every listener registered at the start of the
    /// call, in subscription order.
    ///
    /// The first listener error aborts the remaining invocations for this
    /// publish and propagates to the caller. Registrations changed by a
    /// listener mid-delivery take effect from the next publish.
    pub fn publish(&self, event: &E) -> Result<()> {
        // Snapshot under the read lock, then release it before invoking
        // anything: listeners may reentrantly subscribe or unsubscribe.
        let snapshot: Vec<Listener<E>> = self
            .inner
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(event)?;
        }
        Ok(())
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().len()
    }
}

impl<E: 'static> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one listener registration.
///
/// Holds only the registration id and a weak reference to the channel:
/// dropping the handle does not unsubscribe, and unsubscribing after the
/// channel is gone is a no-op.
pub struct SubscriptionHandle {
    id: ListenerId,
    channel: Weak<dyn Revoke>,
}

impl SubscriptionHandle {
    /// Id of the registration this handle controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the registration.
    ///
    /// Idempotent: a second call finds nothing to remove and never
    /// touches any other registration.
    pub fn unsubscribe(&self) {
        if let Some(channel) = self.channel.upgrade() {
            if channel.revoke(self.id) {
                trace!(listener = %self.id, "listener unsubscribed");
            }
        }
    }
}
