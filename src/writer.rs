//! Writes rendered output to disk.

use crate::error::{Error, Result};
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes `content` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// The write is not atomic: a failure part way through can leave a truncated file.
///
/// # Errors
/// * `Error::WriteError` if a directory cannot be created or the file cannot be written
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::WriteError { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    debug!("Writing file: {}", path.display());
    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(content.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)
}
