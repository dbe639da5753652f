//! Core types for the observable store.

/// A uniquely identified data item.
///
/// The store is generic over record shape; the only requirement is a
/// stable string identifier. Records sharing an identifier occupy the
/// same slot, and a later write replaces the earlier one.
///
/// `Clone` is required because the store hands out owned copies (from
/// `get` and inside event payloads) rather than references into its
/// internal mapping.
pub trait Record: Clone + Send + Sync + 'static {
    /// Stable identifier for this record.
    fn id(&self) -> &str;
}
