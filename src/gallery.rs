//! Gallery orchestration: the single workflow this crate exists for.
//!
//! A [`Gallery`] owns the in-memory photo list and its persisted mirror, and
//! drives every step of acquiring, storing, listing, and deleting a photo
//! through the seams in [`crate::host`]:
//!
//! ```text
//! select_image()
//!   └── picker ─── cancel ──────────────────────────► AddOutcome::Cancelled
//!         │
//! take_picture(source)
//!   └── camera ── cancel ──► Cancelled
//!         │
//!       crop ──── cancel ──► Cancelled
//!         │
//!       split dir/name (PathStyle from config)
//!         │
//!       move into data dir ── failure ──► notify + AddOutcome::MoveFailed
//!         │
//!       insert record at front ──► persist ──► AddOutcome::Added(record)
//! ```
//!
//! # Persistence contract
//!
//! The list is mirrored as a JSON array under the key [`STORAGE_KEY`] in the
//! host's key-value store. Every mutation writes the full snapshot
//! synchronously; there are no partial updates. An absent key means a fresh
//! install (empty list); a present value is the complete current state.
//!
//! # Deletion is optimistic
//!
//! `delete_image` removes the record from the list and persists *before*
//! removing the file, so the gallery never shows an entry whose deletion was
//! requested. If the file removal then fails, the list is not rolled back —
//! the error reports the orphaned file and the caller decides what to do
//! about it.

use crate::config::{GalleryConfig, PathStyle};
use crate::host::{
    CaptureOptions, CaptureOutcome, CropOptions, Encoding, Host, HostError, ImageSource, Quality,
    SourceChoice,
};
use crate::record::{self, PhotoRecord};
use crate::{naming, paths};
use thiserror::Error;

/// Key-value slot holding the serialized photo list. Embedders that supply
/// their own [`KeyValueStore`](crate::host::KeyValueStore) see the list as a
/// JSON array under this key.
pub const STORAGE_KEY: &str = "photos";

/// Notification shown after a photo and its file are fully deleted.
const DELETE_NOTICE: &str = "Image deleted successfully.";

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Storage error: {0}")]
    Storage(HostError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Image acquisition failed: {0}")]
    Acquisition(HostError),
    #[error("Crop failed: {0}")]
    Crop(HostError),
    #[error("Native path resolution failed: {0}")]
    PathResolution(HostError),
    /// The list was already updated and persisted when the file removal
    /// failed; `name` identifies the orphaned file left in the data dir.
    #[error("Photo list updated, but removing file '{name}' failed: {source}")]
    FileRemove { name: String, source: HostError },
    #[error("No photo at position {position} (list has {len})")]
    NoSuchPhoto { position: usize, len: usize },
}

/// How an add attempt ended.
///
/// Cancellation and a failed move are ordinary outcomes, not errors: the
/// user backing out of the picker, camera, or crop leaves no trace, and a
/// move failure has already been reported through the notifier with the
/// list left untouched. Host-level failures earlier in the chain surface as
/// [`GalleryError`] instead.
#[derive(Debug)]
pub enum AddOutcome {
    /// The photo was stored and is now the front of the list.
    Added(PhotoRecord),
    /// The user backed out; nothing changed.
    Cancelled,
    /// Moving the image into the data dir failed; the list is unchanged and
    /// the error text was shown to the user.
    MoveFailed(HostError),
}

/// Authoritative owner of the photo list and the flow around it.
///
/// All mutation goes through `&mut self`, so at most one operation is in
/// flight at a time per gallery value.
pub struct Gallery {
    photos: Vec<PhotoRecord>,
    /// Application-private data directory, always with a trailing `/` so
    /// filepaths concatenate as `dir + name`.
    data_dir: String,
    config: GalleryConfig,
    host: Host,
}

impl Gallery {
    /// A gallery over `data_dir` with an empty in-memory list; call
    /// [`load_saved`](Self::load_saved) to populate it from storage.
    pub fn new(data_dir: impl Into<String>, config: GalleryConfig, host: Host) -> Self {
        let mut data_dir = data_dir.into();
        if !data_dir.ends_with('/') {
            data_dir.push('/');
        }
        Self {
            photos: Vec::new(),
            data_dir,
            config,
            host,
        }
    }

    /// The current list, newest first.
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// An absent key yields an empty list (first run). A malformed blob is a
    /// [`GalleryError::Json`] and leaves the in-memory list untouched.
    /// Repeated calls without intervening mutation are idempotent reads.
    pub fn load_saved(&mut self) -> Result<(), GalleryError> {
        self.photos = match self.store_get()? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Ask the user where the image should come from, then acquire it.
    ///
    /// Cancelling the dialog is a no-op: `Ok(AddOutcome::Cancelled)` with no
    /// side effects.
    pub fn select_image(&mut self) -> Result<AddOutcome, GalleryError> {
        let choice = self
            .host
            .picker
            .choose_source()
            .map_err(GalleryError::Acquisition)?;
        match choice {
            SourceChoice::Library => self.take_picture(ImageSource::Library),
            SourceChoice::Camera => self.take_picture(ImageSource::Camera),
            SourceChoice::Cancelled => Ok(AddOutcome::Cancelled),
        }
    }

    /// Capture from `source`, crop, and store the result.
    ///
    /// The capture asks for a JPEG file URI at the configured quality, not
    /// saved to the shared album, with orientation correction per config.
    /// Cancelling either interactive step ends the attempt with
    /// [`AddOutcome::Cancelled`] and no side effects.
    pub fn take_picture(&mut self, source: ImageSource) -> Result<AddOutcome, GalleryError> {
        let quality = Quality::new(self.config.camera.quality);
        let options = CaptureOptions {
            quality,
            source,
            save_to_album: self.config.camera.save_to_album,
            correct_orientation: self.config.camera.correct_orientation,
            encoding: Encoding::Jpeg,
        };

        let uri = match self
            .host
            .camera
            .capture(&options)
            .map_err(GalleryError::Acquisition)?
        {
            CaptureOutcome::Image(uri) => uri,
            CaptureOutcome::Cancelled => return Ok(AddOutcome::Cancelled),
        };

        let cropped = match self
            .host
            .cropper
            .crop(&uri, &CropOptions { quality })
            .map_err(GalleryError::Crop)?
        {
            CaptureOutcome::Image(uri) => uri,
            CaptureOutcome::Cancelled => return Ok(AddOutcome::Cancelled),
        };

        let location = self.source_location(&cropped)?;
        self.copy_file_to_local_dir(location)
    }

    /// Remove the photo at `position` from the list, persist, then remove
    /// its file. Returns the removed record.
    ///
    /// The persisted list is updated before the file removal (see module
    /// docs); a removal failure surfaces as [`GalleryError::FileRemove`]
    /// without rolling the list back.
    pub fn delete_image(&mut self, position: usize) -> Result<PhotoRecord, GalleryError> {
        if position >= self.photos.len() {
            return Err(GalleryError::NoSuchPhoto {
                position,
                len: self.photos.len(),
            });
        }
        let removed = self.photos.remove(position);
        self.persist()?;

        self.host
            .files
            .remove_file(paths::parent_dir(&removed.filepath), &removed.name)
            .map_err(|source| GalleryError::FileRemove {
                name: removed.name.clone(),
                source,
            })?;

        self.host.notifier.notify(DELETE_NOTICE);
        Ok(removed)
    }

    /// Display URI for an optional stored filepath; `None` renders as the
    /// empty string.
    pub fn path_for_image(&self, filepath: Option<&str>) -> String {
        match filepath {
            Some(filepath) => self.host.resolver.to_display_uri(filepath),
            None => String::new(),
        }
    }

    /// Split an acquired image URI into the dir/name pair the file move
    /// needs, per the configured [`PathStyle`].
    fn source_location(&self, uri: &str) -> Result<paths::SourceLocation, GalleryError> {
        match self.config.paths.style {
            PathStyle::Direct => Ok(paths::split_source_uri(uri)),
            PathStyle::NativeResolve => {
                let native = self
                    .host
                    .resolver
                    .resolve_native(uri)
                    .map_err(GalleryError::PathResolution)?;
                Ok(paths::split_resolved(uri, &native))
            }
        }
    }

    /// Move the acquired file into the data dir under a fresh generated
    /// name, then record it.
    ///
    /// A move failure is reported to the user with the raw error text and
    /// ends the attempt with the list untouched and nothing persisted.
    fn copy_file_to_local_dir(
        &mut self,
        location: paths::SourceLocation,
    ) -> Result<AddOutcome, GalleryError> {
        let name = naming::new_file_name();
        match self
            .host
            .files
            .move_file(&location.dir, &location.name, &self.data_dir, &name)
        {
            Ok(()) => {
                let record = self.update_stored_images(name)?;
                Ok(AddOutcome::Added(record))
            }
            Err(error) => {
                self.host.notifier.notify(&error.to_string());
                Ok(AddOutcome::MoveFailed(error))
            }
        }
    }

    /// Build the record for a freshly stored file, insert it at the front,
    /// and persist the full list.
    fn update_stored_images(&mut self, name: String) -> Result<PhotoRecord, GalleryError> {
        let filepath = format!("{}{}", self.data_dir, name);
        let record = PhotoRecord {
            id: record::next_id(&self.photos),
            path: self.host.resolver.to_display_uri(&filepath),
            filepath,
            name,
        };
        self.photos.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Write the full list snapshot to storage.
    fn persist(&self) -> Result<(), GalleryError> {
        let blob = serde_json::to_string(&self.photos)?;
        self.host
            .store
            .set(STORAGE_KEY, &blob)
            .map_err(GalleryError::Storage)
    }

    fn store_get(&self) -> Result<Option<String>, GalleryError> {
        self.host
            .store
            .get(STORAGE_KEY)
            .map_err(GalleryError::Storage)
    }
}
