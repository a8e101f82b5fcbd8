//! The photo record — the one entity this crate persists.
//!
//! Records are serialized as a JSON array under a single key-value slot (see
//! [`gallery`](crate::gallery)). The wire format keeps the historical
//! PascalCase field names (`Id`, `Name`, `Path`, `Filepath`) so galleries
//! written by earlier builds load unchanged.

use serde::{Deserialize, Serialize};

/// Persisted metadata for one saved image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhotoRecord {
    /// Unique within the list. Assigned at insert time; earlier builds wrote
    /// a constant `1` here, which loads fine — nothing reads the field back.
    pub id: i64,
    /// Generated filename, `<millisecond-epoch>.jpg`.
    pub name: String,
    /// Display URI the UI layer can load directly, derived at write time.
    pub path: String,
    /// Absolute on-device path to the stored file.
    pub filepath: String,
}

/// Next free id for a new record: one past the largest id in the list.
///
/// Ids of deleted records may be reused once the maximum is deleted; they
/// only need to be unique within the current list.
pub fn next_id(photos: &[PhotoRecord]) -> i64 {
    photos.iter().map(|p| p.id).max().unwrap_or(0) + 1
}
