//! Source document discovery.
//!
//! Lists the markdown posts in the source directory. Only regular files
//! directly inside the directory whose name ends in `.md` are posts;
//! everything else (other files, subdirectories, `.md`-named directories)
//! is skipped without comment. The listing is not recursive.
//!
//! Paths come back sorted by file name so that two builds of the same tree
//! process documents in the same order, which matters when two posts collide
//! on a title.

use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("could not read content directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the markdown documents in `source_dir`.
///
/// Fails only when the directory itself cannot be opened or listed. An empty
/// directory yields an empty list.
pub fn scan(source_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut documents = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if naming::is_markdown_name(&entry.file_name()) && path.is_file() {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}
