//! Path translation between filesystem space and UI space.
//!
//! A stored file has two addresses: the on-device path the filesystem knows,
//! and the display URI the UI's rendering layer can actually load (webview
//! hosts remap local files into their own addressing scheme). Hosts whose
//! crop step returns indirect content-style URIs additionally expose native
//! resolution, used by the `native-resolve` path style.

use super::HostError;

/// Translates paths for the UI layer and, where the host needs it, resolves
/// indirect URIs to native filesystem paths.
pub trait PathResolver {
    /// A URI the UI rendering layer can load for this on-device path.
    fn to_display_uri(&self, filepath: &str) -> String;

    /// Resolve an indirect (content-style) URI to a native filesystem path.
    ///
    /// The default is the identity: hosts that already hand out native paths
    /// have nothing to resolve.
    fn resolve_native(&self, uri: &str) -> Result<String, HostError> {
        Ok(uri.to_string())
    }
}

/// Resolver for hosts that load local files directly: display URIs are plain
/// `file://` URIs.
#[derive(Debug, Default)]
pub struct FileUriResolver;

impl PathResolver for FileUriResolver {
    fn to_display_uri(&self, filepath: &str) -> String {
        if filepath.starts_with("file://") {
            filepath.to_string()
        } else {
            format!("file://{filepath}")
        }
    }
}
