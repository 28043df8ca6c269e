//! Filename conventions for source documents and their artifacts.
//!
//! A post's title is its file name with the markdown suffix removed, nothing
//! more: no slugification, no case folding, no dash-to-space conversion.
//! The artifact name is the title with `.html` appended.
//!
//! - `hello-world.md` → title `"hello-world"`, artifact `hello-world.html`
//! - `My Post.md` → title `"My Post"`, artifact `My Post.html`
//! - `notes.txt` → not a document
//! - `.md` → a document whose title would be empty (rejected)

use std::ffi::OsStr;

/// Suffix that marks a file as a markdown source document. Case-sensitive.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Suffix appended to a title to name its artifact.
pub const ARTIFACT_SUFFIX: &str = ".html";

/// Whether a file name ends with the markdown suffix.
///
/// Matches on the raw name, so names that aren't valid UTF-8 still count.
pub fn is_markdown_name(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(MARKDOWN_SUFFIX.as_bytes())
}

/// Derive a page title from a document file name.
///
/// Returns `None` when the name does not carry the markdown suffix, or when
/// stripping it leaves nothing (a file literally called `.md`).
pub fn page_title(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(MARKDOWN_SUFFIX)
        .filter(|title| !title.is_empty())
}

/// File name of the artifact generated for `title`.
pub fn artifact_name(title: &str) -> String {
    format!("{title}{ARTIFACT_SUFFIX}")
}
