//! Writing artifacts to the output directory.
//!
//! Each artifact is written to a temporary file next to its destination and
//! renamed into place once fully written. A failure part-way through leaves
//! the previous artifact (if any) untouched and no half-written file behind.
//!
//! On Unix a new artifact gets mode `0666` less the umask, the same as a
//! plain `File::create`. An artifact that is overwritten keeps its mode.

use crate::naming;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not create output file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `html` as the artifact for `title`, replacing any earlier one.
///
/// Returns the path of the written artifact.
pub fn write_artifact(output_dir: &Path, title: &str, html: &[u8]) -> Result<PathBuf, WriteError> {
    let path = output_dir.join(naming::artifact_name(title));

    let mut tmp = temp_file_for(output_dir, &path).map_err(|source| WriteError::Create {
        path: path.clone(),
        source,
    })?;
    tmp.write_all(html)
        .and_then(|()| tmp.flush())
        .map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;
    tmp.persist(&path).map_err(|err| WriteError::Write {
        path: path.clone(),
        source: err.error,
    })?;

    Ok(path)
}

/// Temporary file in `dir` whose mode matches what `dest` should end up with.
#[cfg(unix)]
fn temp_file_for(dir: &Path, dest: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    let existing = fs::metadata(dest)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    // Creation mode is masked by the umask, like File::create
    let tmp = Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    Ok(tmp)
}

#[cfg(not(unix))]
fn temp_file_for(dir: &Path, _dest: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
