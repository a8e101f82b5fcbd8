//! Filename generation for saved photos.
//!
//! Saved files are named `<millisecond-epoch>.jpg` — `1734532199483.jpg` —
//! so names sort chronologically and never collide with user-visible titles.
//! There is deliberately no collision guard: two saves within the same
//! millisecond would overwrite, which is acceptable for a single user tapping
//! through one screen.

use chrono::{DateTime, Utc};

/// Generate a filename from an explicit instant.
pub fn timestamp_file_name(at: DateTime<Utc>) -> String {
    format!("{}.jpg", at.timestamp_millis())
}

/// Generate a filename for "now". What the save flow actually calls.
pub fn new_file_name() -> String {
    timestamp_file_name(Utc::now())
}
