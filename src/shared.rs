//! Process-wide shared store instances.

use crate::store::MemoryStore;
use crate::types::Record;
use std::sync::{Arc, OnceLock};

/// One-time-initialized holder for a process-wide [`MemoryStore`].
///
/// Applications that want a single shared store declare one of these at
/// their composition root, typically in a `static`:
///
/// ```
/// use beacon_store::{Record, SharedStore};
///
/// #[derive(Clone)]
/// struct Employee {
///     id: String,
/// }
///
/// impl Record for Employee {
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
///
/// static EMPLOYEES: SharedStore<Employee> = SharedStore::new();
///
/// let store = EMPLOYEES.get();
/// assert!(store.is_empty());
/// ```
///
/// The inner store is created on the first `get` and lives for the
/// process lifetime; it is never reset. Tests that need isolation should
/// construct their own `SharedStore` (or a plain [`MemoryStore`]) rather
/// than reuse a global holder.
pub struct SharedStore<T: Record> {
    cell: OnceLock<Arc<MemoryStore<T>>>,
}

impl<T: Record> SharedStore<T> {
    /// Create an empty holder. The inner store is not built until
    /// [`get`](Self::get) is first called.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The shared store, created on first access.
    ///
    /// Every call returns a handle to the same instance.
    pub fn get(&self) -> Arc<MemoryStore<T>> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(MemoryStore::new())))
    }

    /// Whether the inner store has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: Record> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
