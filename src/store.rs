//! Observable in-memory record store.

use crate::error::Result;
use crate::events::{AfterSet, BeforeSet, EventChannel, SubscriptionHandle};
use crate::types::Record;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

/// In-memory record store with before/after write notifications.
///
/// Holds the canonical identifier-to-record mapping plus two event
/// channels bracketing every write: the before-channel fires ahead of
/// the mutation with the old and new value, the after-channel fires once
/// the mutation has been applied.
///
/// At most one record is stored per identifier; writing an identifier
/// that already exists replaces the previous record (last write wins).
pub struct MemoryStore<T: Record> {
    /// Canonical mapping from identifier to record.
    records: RwLock<HashMap<String, T>>,

    /// Fires before each write, with old and new value.
    before_set: EventChannel<BeforeSet<T>>,

    /// Fires after each write, with the value written.
    after_set: EventChannel<AfterSet<T>>,
}

impl<T: Record> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            before_set: EventChannel::new(),
            after_set: EventChannel::new(),
        }
    }

    /// Look up a record by identifier.
    ///
    /// A miss yields `None`, never an error.
    pub fn get(&self, id: &str) -> Option<T> {
        self.records.read().get(id).cloned()
    }

    /// Write `record` under its identifier, replacing any existing entry.
    ///
    /// Publishes a [`BeforeSet`] event, applies the write, then publishes
    /// an [`AfterSet`] event. A before-listener error aborts the `set`
    /// with the mapping left unmodified; an after-listener error
    /// propagates, but the write has already been applied.
    pub fn set(&self, record: T) -> Result<()> {
        let previous = self.get(record.id());
        self.before_set.publish(&BeforeSet {
            value: previous,
            new_value: record.clone(),
        })?;

        self.records
            .write()
            .insert(record.id().to_string(), record.clone());
        trace!(id = record.id(), "record written");

        self.after_set.publish(&AfterSet { value: record })
    }

    /// Subscribe to events fired before each write.
    pub fn on_before_set<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&BeforeSet<T>) -> Result<()> + Send + Sync + 'static,
    {
        self.before_set.subscribe(listener)
    }

    /// Subscribe to events fired after each write.
    pub fn on_after_set<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&AfterSet<T>) -> Result<()> + Send + Sync + 'static,
    {
        self.after_set.subscribe(listener)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
