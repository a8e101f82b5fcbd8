//! File moving and removal.
//!
//! The gallery addresses files the way host file plugins do: a directory URL
//! (trailing slash, possibly `file://`-schemed) plus a bare filename, never a
//! joined path. [`StdFiles`] maps that convention onto `std::fs`.

use super::HostError;
use crate::paths;
use std::fs;
use std::path::PathBuf;

/// Moves and removes files addressed as directory + filename pairs.
pub trait FileMover {
    /// Move `src_dir/src_name` to `dst_dir/dst_name`.
    fn move_file(
        &self,
        src_dir: &str,
        src_name: &str,
        dst_dir: &str,
        dst_name: &str,
    ) -> Result<(), HostError>;

    /// Remove `dir/name`.
    fn remove_file(&self, dir: &str, name: &str) -> Result<(), HostError>;
}

/// `FileMover` over the local filesystem.
///
/// Tries a rename first and falls back to copy+remove, since the camera's
/// cache directory and the app data directory are routinely on different
/// filesystems. The destination directory is created if missing — on a
/// device the data dir always exists, on desktop it appears on first use.
#[derive(Debug, Default)]
pub struct StdFiles;

fn join(dir: &str, name: &str) -> PathBuf {
    PathBuf::from(paths::strip_file_scheme(dir)).join(name)
}

impl FileMover for StdFiles {
    fn move_file(
        &self,
        src_dir: &str,
        src_name: &str,
        dst_dir: &str,
        dst_name: &str,
    ) -> Result<(), HostError> {
        let src = join(src_dir, src_name);
        let dst = join(dst_dir, dst_name);
        fs::create_dir_all(paths::strip_file_scheme(dst_dir))?;
        if fs::rename(&src, &dst).is_ok() {
            return Ok(());
        }
        fs::copy(&src, &dst)?;
        fs::remove_file(&src)?;
        Ok(())
    }

    fn remove_file(&self, dir: &str, name: &str) -> Result<(), HostError> {
        Ok(fs::remove_file(join(dir, name))?)
    }
}
