//! Entity trait: identity + continuity across state changes.

use serde::Serialize;

use crate::id::RecordId;

/// Minimal interface shared by every persisted record type.
///
/// A fresh entity has no id; the persistence gateway assigns one on first
/// save. `NAME` is the canonical display name used in the not-found
/// error envelope (e.g. `Article with id 7 not found`).
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Canonical display name of the entity type.
    const NAME: &'static str;

    /// Returns the assigned identifier, if any.
    fn id(&self) -> Option<RecordId>;

    /// Records the identifier assigned by the persistence gateway.
    fn set_id(&mut self, id: RecordId);
}
