//! Desktop stand-ins for the interactive seams.
//!
//! On a device the camera, crop, and picker steps are UI flows. On a desktop
//! there is no such UI, but the rest of the pipeline — staging, moving,
//! persisting, listing, deleting — is identical, so these adapters replace
//! just the interaction:
//!
//! - [`FileCamera`] "captures" by copying a named image into a staging
//!   directory, exactly the way a real camera writes into its cache dir and
//!   reports the cache path. The original file is never touched by the
//!   subsequent move.
//! - [`PassthroughCropper`] returns the image unchanged; nothing re-encodes,
//!   so the quality option is irrelevant here.
//! - [`PresetPicker`] answers the source question without a dialog.

use super::camera::{Camera, CaptureOptions, CaptureOutcome, CropOptions, Cropper};
use super::{HostError, SourceChoice, SourcePicker};
use std::fs;
use std::path::PathBuf;

/// Camera that stages a fixture file instead of talking to hardware.
#[derive(Debug)]
pub struct FileCamera {
    source: PathBuf,
    staging_dir: PathBuf,
}

impl FileCamera {
    /// `source` is the image to "capture"; `staging_dir` plays the camera
    /// cache directory and is created on first use.
    pub fn new(source: impl Into<PathBuf>, staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            staging_dir: staging_dir.into(),
        }
    }
}

impl Camera for FileCamera {
    fn capture(&self, _options: &CaptureOptions) -> Result<CaptureOutcome, HostError> {
        let name = self
            .source
            .file_name()
            .ok_or_else(|| HostError::Failed(format!("not a file: {}", self.source.display())))?;
        if !self.source.is_file() {
            return Err(HostError::Failed(format!(
                "no such image: {}",
                self.source.display()
            )));
        }
        fs::create_dir_all(&self.staging_dir)?;
        let staged = self.staging_dir.join(name);
        fs::copy(&self.source, &staged)?;
        Ok(CaptureOutcome::Image(staged.to_string_lossy().into_owned()))
    }
}

/// Cropper with no UI: the image passes through untouched.
#[derive(Debug, Default)]
pub struct PassthroughCropper;

impl Cropper for PassthroughCropper {
    fn crop(&self, uri: &str, _options: &CropOptions) -> Result<CaptureOutcome, HostError> {
        Ok(CaptureOutcome::Image(uri.to_string()))
    }
}

/// Picker with a predetermined answer.
#[derive(Debug)]
pub struct PresetPicker(pub SourceChoice);

impl SourcePicker for PresetPicker {
    fn choose_source(&self) -> Result<SourceChoice, HostError> {
        Ok(self.0)
    }
}
