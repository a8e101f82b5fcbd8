//! # Filmroll
//!
//! The headless core of a local-first photo gallery: capture or pick an
//! image, crop it, move it into the app's private data directory, and keep
//! an ordered, persisted list of what's saved — with listing and delete.
//! The UI on top (a mobile screen, this crate's CLI, anything else) stays a
//! thin shell; every behavior lives here.
//!
//! # Architecture: One Flow, Seven Seams
//!
//! A [`gallery::Gallery`] owns the photo list and drives the single workflow
//! through narrow traits, one per host capability:
//!
//! ```text
//! select_image ─► SourcePicker ─► Camera ─► Cropper
//!                                              │
//!                         PathResolver ◄── split dir/name
//!                                              │
//!                              FileMover ── move into data dir
//!                                              │
//!                        KeyValueStore ◄── persist JSON list
//!                                              │
//!                             Notifier ◄── user-facing messages
//! ```
//!
//! The seams exist for two reasons:
//!
//! - **Portability**: the same orchestration runs against a mobile runtime's
//!   plugins, a desktop filesystem, or anything that can implement seven
//!   small traits. The [`host::desktop`] adapters plus the CLI in `main.rs`
//!   are one such embedding.
//! - **Testability**: every step of the flow — including the interactive
//!   ones — can be scripted and inspected, so tests assert "nothing
//!   happened" on cancellation instead of inferring it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | The orchestrator — owns the list, drives acquisition, deletion, persistence |
//! | [`host`] | Capability traits and their desktop implementations |
//! | [`record`] | The persisted photo record and its wire format |
//! | [`paths`] | Pure dir/name splitting of acquired image URIs |
//! | [`naming`] | Millisecond-epoch filename generation |
//! | [`config`] | `config.toml` loading and validation (camera knobs, path style) |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Wire-Compatible Persistence
//!
//! The list persists as a JSON array under the key `"photos"` with PascalCase
//! field names (`Id`, `Name`, `Path`, `Filepath`). That is the blob layout
//! galleries have always been stored in, so existing installations load
//! unchanged. Rust code uses snake_case fields with a serde rename.
//!
//! ## Cancellation Is Not an Error
//!
//! The picker, camera, and crop steps all put UI in front of the user, and
//! backing out of any of them is routine. Those steps return
//! [`host::CaptureOutcome`] / [`host::SourceChoice`] values with an explicit
//! `Cancelled` variant, and the gallery folds them into
//! [`gallery::AddOutcome::Cancelled`]. Errors ([`gallery::GalleryError`])
//! are reserved for failures: hardware unavailable, malformed stored JSON,
//! a file that won't move.
//!
//! ## Optimistic Deletion
//!
//! `delete_image` updates and persists the list *before* removing the file,
//! so a deleted photo never reappears in a listing even if the process dies
//! mid-delete. The cost is a possible orphaned file when removal fails;
//! that failure is surfaced with the orphan's name rather than rolled back.
//!
//! ## Path Style Is Configuration
//!
//! Hosts disagree about what the crop step returns: most hand back a plain
//! `file://` URI, some return an indirect URI that needs a native resolution
//! call and carries a `?query` suffix. That difference is a configured
//! strategy ([`config::PathStyle`]) applied at one point in the flow, not a
//! platform conditional scattered through it.

pub mod config;
pub mod gallery;
pub mod host;
pub mod naming;
pub mod output;
pub mod paths;
pub mod record;

#[cfg(test)]
pub(crate) mod test_helpers;
