//! Path and URI splitting for acquired images.
//!
//! The camera and crop steps hand back a URI whose shape depends on the host:
//! most platforms return a plain `file://` URI that can be split directly,
//! while Android's crop step returns an indirect URI (with a cache-busting
//! `?query` suffix) whose real directory is only known after a native
//! resolution call. Which branch applies is a configured strategy
//! ([`PathStyle`](crate::config::PathStyle)), not a platform check scattered
//! through the flow.
//!
//! All functions here are pure string operations; the native resolution call
//! itself lives behind [`PathResolver`](crate::host::PathResolver).

/// Directory/filename pair for a file to be moved.
///
/// `dir` keeps its trailing slash (host file APIs take directory URLs that
/// end in `/`), and may be empty when the input had no separator at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub dir: String,
    pub name: String,
}

/// Split a URI directly at its last `/`: everything up to and including the
/// slash is the directory, the rest is the filename.
pub fn split_source_uri(uri: &str) -> SourceLocation {
    let cut = uri.rfind('/').map(|i| i + 1).unwrap_or(0);
    SourceLocation {
        dir: uri[..cut].to_string(),
        name: uri[cut..].to_string(),
    }
}

/// Split an indirect URI using its natively resolved counterpart.
///
/// The directory comes from the resolved path; the filename comes from the
/// original URI with any trailing `?query` stripped (the crop step appends a
/// cache-busting query to the name it reports).
pub fn split_resolved(uri: &str, native_path: &str) -> SourceLocation {
    SourceLocation {
        dir: parent_dir(native_path).to_string(),
        name: strip_query(&split_source_uri(uri).name).to_string(),
    }
}

/// The directory portion of a path, up to and including the last `/`.
/// Empty when the path contains no separator.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "",
    }
}

/// Strip a `file://` scheme prefix, turning a file URI into a plain path.
/// Paths without the scheme pass through unchanged.
pub fn strip_file_scheme(path: &str) -> &str {
    path.strip_prefix("file://").unwrap_or(path)
}

fn strip_query(segment: &str) -> &str {
    match segment.rfind('?') {
        Some(i) => &segment[..i],
        None => segment,
    }
}
