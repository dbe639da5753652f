//! # Beacon Store
//!
//! An observable in-memory record store: a mapping from string identifier
//! to record, instrumented with event channels that fire before and after
//! every write.
//!
//! ## Core Concepts
//!
//! - **Records**: uniquely identified items; last write wins
//! - **Event Channels**: synchronous publish/subscribe with ordered delivery
//! - **Before/After Events**: notifications bracketing every write
//! - **Shared Stores**: lazily created, process-wide instances
//!
//! ## Example
//!
//! ```
//! use beacon_store::{MemoryStore, Record};
//!
//! #[derive(Clone)]
//! struct Employee {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Record for Employee {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! # fn main() -> beacon_store::Result<()> {
//! let store: MemoryStore<Employee> = MemoryStore::new();
//!
//! let handle = store.on_after_set(|event| {
//!     println!("wrote record {}", event.value.id);
//!     Ok(())
//! });
//!
//! store.set(Employee {
//!     id: "1".into(),
//!     name: "John Doe".into(),
//! })?;
//!
//! assert_eq!(store.get("1").map(|e| e.name), Some("John Doe".to_string()));
//!
//! handle.unsubscribe();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod shared;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use events::{AfterSet, BeforeSet, EventChannel, Listener, ListenerId, SubscriptionHandle};
pub use logging::{logger_for, DeployMode, DevelopmentLogger, Logger, ProductionLogger};
pub use shared::SharedStore;
pub use store::MemoryStore;
pub use types::Record;
