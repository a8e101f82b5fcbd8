//! Host-runtime capability seams.
//!
//! Everything the gallery needs from the device it runs on sits behind a
//! narrow trait, one per capability:
//!
//! | Seam | Trait | Production shape |
//! |---|---|---|
//! | Key-value storage | [`KeyValueStore`] | app-local preference store |
//! | File moves/removes | [`FileMover`] | host filesystem plugin |
//! | Still capture | [`Camera`] | camera / photo-library picker UI |
//! | Interactive crop | [`Cropper`] | crop UI |
//! | Source choice | [`SourcePicker`] | action-sheet dialog |
//! | Path translation | [`PathResolver`] | webview file addressing |
//! | User notification | [`Notifier`] | toast |
//!
//! The [`desktop`] module implements every seam against a plain filesystem
//! and terminal so the whole flow runs without a device; tests script the
//! interactive seams with the mocks in `camera::tests`.

pub mod camera;
pub mod desktop;
pub mod files;
pub mod notify;
pub mod resolve;
pub mod store;

pub use camera::{
    Camera, CaptureOptions, CaptureOutcome, CropOptions, Cropper, Encoding, ImageSource, Quality,
    SourceChoice, SourcePicker,
};
pub use desktop::{FileCamera, PassthroughCropper, PresetPicker};
pub use files::{FileMover, StdFiles};
pub use notify::{Notifier, TermNotifier};
pub use resolve::{FileUriResolver, PathResolver};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;
use thiserror::Error;

/// Error from a host capability call.
///
/// Hosts report either a filesystem-level failure or an opaque message from
/// the underlying platform plugin.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("host call failed: {0}")]
    Failed(String),
}

/// One handle per capability the gallery consumes.
///
/// Shared handles (`Arc`) so embedders and tests can keep a reference to an
/// adapter — to script it or inspect what it recorded — after handing it to
/// the gallery.
pub struct Host {
    pub store: Arc<dyn KeyValueStore>,
    pub files: Arc<dyn FileMover>,
    pub camera: Arc<dyn Camera>,
    pub cropper: Arc<dyn Cropper>,
    pub picker: Arc<dyn SourcePicker>,
    pub resolver: Arc<dyn PathResolver>,
    pub notifier: Arc<dyn Notifier>,
}
