//! Shared types passed between the pipeline steps.

use maud::PreEscaped;
use std::path::{Path, PathBuf};

/// A markdown source document, read once and never modified.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the document was read from.
    pub path: PathBuf,
    /// Raw bytes as found on disk. Not required to be valid UTF-8.
    pub bytes: Vec<u8>,
}

impl Document {
    /// Read a document from disk.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            bytes: std::fs::read(path)?,
        })
    }

    /// File name of the document, lossily decoded.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A rendered post, ready to be placed into the layout.
///
/// `content` is trusted HTML: posts are written by the site owner, so the
/// rendered fragment is embedded verbatim without escaping or sanitization.
/// Never build a `Page` from content submitted by untrusted users.
#[derive(Debug, Clone)]
pub struct Page {
    /// Document file name with the markdown suffix stripped.
    pub title: String,
    /// Rendered HTML fragment. May be empty for an empty document.
    pub content: PreEscaped<String>,
}
