//! Event types emitted around store mutations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for one listener registration.
///
/// Registrations are tracked by id, not by callback identity: the same
/// callback subscribed twice yields two distinct ids, and revoking one
/// never touches the other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Published on the before-channel ahead of each write.
///
/// Ephemeral: built for one publish and not retained by the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeforeSet<T> {
    /// Record currently stored under the target identifier, if any.
    pub value: Option<T>,

    /// Record about to be written.
    pub new_value: T,
}

/// Published on the after-channel once a write has been applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AfterSet<T> {
    /// The record that was just written.
    pub value: T,
}
