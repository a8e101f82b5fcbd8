//! Shared test fixtures for the filmroll test suite.
//!
//! Provides a [`Harness`] that wires a [`Gallery`] to in-memory, scriptable
//! implementations of every host seam, plus record fixtures. Tests keep the
//! harness around after building a gallery so they can script the interactive
//! seams and inspect what the gallery did to each one.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::{Harness, photo};
//!
//! let h = Harness::new();
//! h.seed(&[photo(1, "a.jpg")]);
//! h.script_capture(CaptureOutcome::Image("file:///cache/b.jpg".into()));
//! h.script_crop(CaptureOutcome::Image("file:///cache/b.jpg".into()));
//!
//! let mut gallery = h.gallery();
//! gallery.load_saved().unwrap();
//! gallery.take_picture(ImageSource::Camera).unwrap();
//!
//! assert_eq!(h.files.moves().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use crate::config::GalleryConfig;
use crate::gallery::{Gallery, STORAGE_KEY};
use crate::host::camera::tests::{ScriptedCamera, ScriptedCropper};
use crate::host::notify::tests::RecordingNotifier;
use crate::host::{
    CaptureOutcome, FileMover, Host, HostError, KeyValueStore, MemoryStore, PathResolver,
    PresetPicker, SourceChoice,
};
use crate::record::PhotoRecord;

// =========================================================================
// Record fixtures
// =========================================================================

/// A record shaped the way the gallery itself would build it for a file
/// named `name` in the `/data/` directory.
pub fn photo(id: i64, name: &str) -> PhotoRecord {
    PhotoRecord {
        id,
        name: name.to_string(),
        path: format!("display:///data/{name}"),
        filepath: format!("/data/{name}"),
    }
}

// =========================================================================
// Seam fakes
// =========================================================================

/// One recorded `move_file` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub src_dir: String,
    pub src_name: String,
    pub dst_dir: String,
    pub dst_name: String,
}

/// File mover that records every call and never touches a filesystem.
/// Either operation can be scripted to fail with a given message.
#[derive(Debug, Default)]
pub struct FakeFiles {
    moves: Mutex<Vec<MoveRequest>>,
    removes: Mutex<Vec<(String, String)>>,
    move_error: Mutex<Option<String>>,
    remove_error: Mutex<Option<String>>,
}

impl FakeFiles {
    pub fn moves(&self) -> Vec<MoveRequest> {
        self.moves.lock().unwrap().clone()
    }

    pub fn removes(&self) -> Vec<(String, String)> {
        self.removes.lock().unwrap().clone()
    }

    /// Make every subsequent `move_file` fail with `message`.
    pub fn fail_moves(&self, message: &str) {
        *self.move_error.lock().unwrap() = Some(message.to_string());
    }

    /// Make every subsequent `remove_file` fail with `message`.
    pub fn fail_removes(&self, message: &str) {
        *self.remove_error.lock().unwrap() = Some(message.to_string());
    }
}

impl FileMover for FakeFiles {
    fn move_file(
        &self,
        src_dir: &str,
        src_name: &str,
        dst_dir: &str,
        dst_name: &str,
    ) -> Result<(), HostError> {
        self.moves.lock().unwrap().push(MoveRequest {
            src_dir: src_dir.to_string(),
            src_name: src_name.to_string(),
            dst_dir: dst_dir.to_string(),
            dst_name: dst_name.to_string(),
        });
        match self.move_error.lock().unwrap().as_ref() {
            Some(message) => Err(HostError::Failed(message.clone())),
            None => Ok(()),
        }
    }

    fn remove_file(&self, dir: &str, name: &str) -> Result<(), HostError> {
        self.removes
            .lock()
            .unwrap()
            .push((dir.to_string(), name.to_string()));
        match self.remove_error.lock().unwrap().as_ref() {
            Some(message) => Err(HostError::Failed(message.clone())),
            None => Ok(()),
        }
    }
}

/// Resolver with predictable output: display URIs gain a `display://`
/// prefix, and native resolution returns a scripted path (identity when
/// nothing is scripted).
#[derive(Debug, Default)]
pub struct StaticResolver {
    native: Mutex<Option<String>>,
}

impl StaticResolver {
    pub fn set_native(&self, path: &str) {
        *self.native.lock().unwrap() = Some(path.to_string());
    }
}

impl PathResolver for StaticResolver {
    fn to_display_uri(&self, filepath: &str) -> String {
        format!("display://{filepath}")
    }

    fn resolve_native(&self, uri: &str) -> Result<String, HostError> {
        match self.native.lock().unwrap().as_ref() {
            Some(path) => Ok(path.clone()),
            None => Ok(uri.to_string()),
        }
    }
}

// =========================================================================
// Harness
// =========================================================================

/// Every seam fake plus the knobs a gallery is built from.
///
/// `choice` and `config` are plain fields; set them before calling
/// [`gallery`](Self::gallery). The seam handles are shared, so scripting and
/// inspection keep working after the gallery is built.
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub files: Arc<FakeFiles>,
    pub camera: Arc<ScriptedCamera>,
    pub cropper: Arc<ScriptedCropper>,
    pub notifier: Arc<RecordingNotifier>,
    pub resolver: Arc<StaticResolver>,
    pub choice: SourceChoice,
    pub config: GalleryConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            files: Arc::new(FakeFiles::default()),
            camera: Arc::new(ScriptedCamera::default()),
            cropper: Arc::new(ScriptedCropper::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            resolver: Arc::new(StaticResolver::default()),
            choice: SourceChoice::Library,
            config: GalleryConfig::default(),
        }
    }

    /// A gallery over `/data/` wired to this harness's fakes.
    pub fn gallery(&self) -> Gallery {
        self.gallery_at("/data/")
    }

    pub fn gallery_at(&self, data_dir: &str) -> Gallery {
        Gallery::new(
            data_dir,
            self.config.clone(),
            Host {
                store: self.store.clone(),
                files: self.files.clone(),
                camera: self.camera.clone(),
                cropper: self.cropper.clone(),
                picker: Arc::new(PresetPicker(self.choice)),
                resolver: self.resolver.clone(),
                notifier: self.notifier.clone(),
            },
        )
    }

    /// Pre-populate storage with `records` serialized the way the gallery
    /// persists them.
    pub fn seed(&self, records: &[PhotoRecord]) {
        self.seed_raw(&serde_json::to_string(records).unwrap());
    }

    /// Pre-populate storage with a raw blob (e.g. malformed JSON).
    pub fn seed_raw(&self, blob: &str) {
        self.store.set(STORAGE_KEY, blob).unwrap();
    }

    /// The currently persisted blob, if any write has happened.
    pub fn stored_blob(&self) -> Option<String> {
        self.store.get(STORAGE_KEY).unwrap()
    }

    /// Queue the next capture outcome. Multiple calls queue in FIFO order.
    pub fn script_capture(&self, outcome: CaptureOutcome) {
        self.camera.outcomes.lock().unwrap().insert(0, Ok(outcome));
    }

    pub fn script_capture_failure(&self, message: &str) {
        self.camera
            .outcomes
            .lock()
            .unwrap()
            .insert(0, Err(HostError::Failed(message.to_string())));
    }

    /// Queue the next crop outcome. Multiple calls queue in FIFO order.
    pub fn script_crop(&self, outcome: CaptureOutcome) {
        self.cropper.outcomes.lock().unwrap().insert(0, Ok(outcome));
    }

    pub fn script_crop_failure(&self, message: &str) {
        self.cropper
            .outcomes
            .lock()
            .unwrap()
            .insert(0, Err(HostError::Failed(message.to_string())));
    }
}
