//! Synchronous publish/subscribe channels for store events.
//!
//! This module provides the event primitive the store is built on:
//! - Ordered, synchronous delivery to every current listener
//! - Unsubscribe handles that revoke exactly one registration
//! - Snapshot iteration, so listeners may subscribe or unsubscribe
//!   mid-publish without affecting the delivery in progress
//!
//! # Example
//!
//! ```ignore
//! let channel: EventChannel<String> = EventChannel::new();
//!
//! let handle = channel.subscribe(|event: &String| {
//!     println!("got: {event}");
//!     Ok(())
//! });
//!
//! channel.publish(&"hello".to_string())?;
//!
//! handle.unsubscribe();
//! ```

mod channel;
mod types;

pub use channel::{EventChannel, Listener, SubscriptionHandle};
pub use types::{AfterSet, BeforeSet, ListenerId};
