use std::io;
use std::path::{Path, PathBuf};

/// Resolve a path against the current working directory if it is relative.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
    }
}

/// Probe that `dir` exists and accepts new files, by creating an anonymous
/// temp file inside it (removed automatically on drop).
///
/// # Errors
/// Returns an error if `dir` is not a directory or the probe file cannot be
/// created.
pub fn probe_writable_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", dir.display()),
        ));
    }
    tempfile::tempfile_in(dir).map(drop)
}
