//! CLI output formatting for gallery listings and operation results.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for a photo is its positional index and filename — the position is what
//! the `delete` command takes — with storage paths and capture time shown as
//! secondary context via indented lines.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Photos (2)
//! 001 1787702400000.jpg
//!     Taken: 2026-08-26 00:00:00 UTC
//!     Stored: /data/1787702400000.jpg
//! 002 5.jpg
//!     Stored: /data/5.jpg
//! ```
//!
//! The `Taken:` line is derived from the millisecond-epoch filename and is
//! omitted for photos whose names don't parse (e.g. files imported from
//! elsewhere).
//!
//! ## Add / Delete
//!
//! ```text
//! Added 1787702400000.jpg
//!     Stored: /data/1787702400000.jpg
//! ```
//!
//! ```text
//! Deleted 1787702400000.jpg
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. User-facing notifications
//! (the toast channel) are *not* formatted here; they go through
//! [`Notifier`](crate::host::Notifier).

use crate::gallery::AddOutcome;
use crate::record::PhotoRecord;
use chrono::{DateTime, Utc};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Capture time recovered from a millisecond-epoch filename, if the name
/// has that shape.
fn taken_at(name: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = name.strip_suffix(".jpg")?.parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}

// ============================================================================
// Listing
// ============================================================================

/// Format the photo list, newest first, one indexed entry per photo.
pub fn format_gallery(photos: &[PhotoRecord]) -> Vec<String> {
    if photos.is_empty() {
        return vec!["No photos saved.".to_string()];
    }

    let mut lines = Vec::new();
    lines.push(format!("Photos ({})", photos.len()));
    for (i, photo) in photos.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), photo.name));
        if let Some(at) = taken_at(&photo.name) {
            lines.push(format!("    Taken: {}", at.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        lines.push(format!("    Stored: {}", photo.filepath));
    }
    lines
}

/// Print the photo list to stdout.
pub fn print_gallery(photos: &[PhotoRecord]) {
    for line in format_gallery(photos) {
        println!("{}", line);
    }
}

// ============================================================================
// Operation results
// ============================================================================

/// Format the result of an add attempt.
///
/// A failed move produces a single status line — the error text itself has
/// already been surfaced through the notifier.
pub fn format_add_outcome(outcome: &AddOutcome) -> Vec<String> {
    match outcome {
        AddOutcome::Added(record) => vec![
            format!("Added {}", record.name),
            format!("    Stored: {}", record.filepath),
        ],
        AddOutcome::Cancelled => vec!["Cancelled, nothing added.".to_string()],
        AddOutcome::MoveFailed(_) => vec!["Add failed, nothing stored.".to_string()],
    }
}

/// Print an add result to stdout.
pub fn print_add_outcome(outcome: &AddOutcome) {
    for line in format_add_outcome(outcome) {
        println!("{}", line);
    }
}

/// Format the result of a delete.
pub fn format_delete_outcome(removed: &PhotoRecord) -> Vec<String> {
    vec![format!("Deleted {}", removed.name)]
}

/// Print a delete result to stdout.
pub fn print_delete_outcome(removed: &PhotoRecord) {
    for line in format_delete_outcome(removed) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
