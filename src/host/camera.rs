//! Interactive acquisition seams: camera, crop, and source picker.
//!
//! All three steps put UI in front of the user, so all three can end without
//! an image *and* without anything being wrong — the user changed their mind.
//! That outcome is first-class: [`CaptureOutcome::Cancelled`] and
//! [`SourceChoice::Cancelled`] are ordinary values, not errors, so callers
//! can assert "nothing happened" instead of inferring it from the absence of
//! side effects. [`HostError`] is reserved for real failures (permission
//! denied, hardware unavailable, plugin crash).

use super::HostError;

/// Where a picture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// The device's photo library.
    Library,
    /// A live camera capture.
    Camera,
}

/// Result of asking the user to pick an image source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChoice {
    Library,
    Camera,
    Cancelled,
}

/// Result of an interactive image step (capture or crop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A file URI pointing at the produced image.
    Image(String),
    /// The user backed out; nothing was produced.
    Cancelled,
}

/// Quality setting for lossy JPEG encoding (0-100). Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(100)
    }
}

/// Output encoding for a capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Jpeg,
    Png,
}

/// Options for a still capture.
///
/// The capture contract beyond these knobs: the host writes a still picture
/// to a file of its choosing and reports that file's URI — never inline
/// image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    pub quality: Quality,
    pub source: ImageSource,
    /// Also write the capture to the device's shared photo album.
    pub save_to_album: bool,
    /// Auto-rotate per sensor orientation data.
    pub correct_orientation: bool,
    pub encoding: Encoding,
}

/// Options for the interactive crop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropOptions {
    /// Re-encoding quality for the cropped JPEG.
    pub quality: Quality,
}

/// A still-image capture device: camera hardware or the photo-library picker.
pub trait Camera {
    fn capture(&self, options: &CaptureOptions) -> Result<CaptureOutcome, HostError>;
}

/// Interactive adjustment of an image's bounds before saving.
pub trait Cropper {
    fn crop(&self, uri: &str, options: &CropOptions) -> Result<CaptureOutcome, HostError>;
}

/// The "where from?" dialog shown before acquisition starts.
pub trait SourcePicker {
    fn choose_source(&self) -> Result<SourceChoice, HostError>;
}
