//! # inkpress
//!
//! Turns a directory of markdown posts into a static HTML blog, then serves it.
//!
//! ```text
//! posts/hello.md  ──render──▶  <h1>Hi</h1>  ──layout──▶  site/hello.html
//! ```
//!
//! Every `.md` file directly inside the source directory becomes one page.
//! The page title is the file name without `.md`, the body is the markdown
//! rendered as CommonMark, and both are placed into a single shared layout
//! template. When the batch is done the output directory is served over HTTP.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the markdown posts in the source directory |
//! | [`naming`] | File name → title → artifact name |
//! | [`render`] | Pluggable markdown renderer, CommonMark by default |
//! | [`types`] | `Document` and `Page` |
//! | [`layout`] | Loads the layout template once and composes pages into it |
//! | [`write`] | Creates the output directory, writes artifacts atomically |
//! | [`generate`] | The pipeline: startup, per-post conversion, batch report |
//! | [`server`] | Static file server over the output directory |
//! | [`config`] | `inkpress.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Failure Handling
//!
//! Problems that leave nothing sensible to build (unreadable layout, missing
//! source directory, output directory that can't be created, port already in
//! use) stop the process. Problems with one post (unreadable file, layout
//! render error, failed write) skip that post and are listed in the
//! [`generate::BatchReport`]; the other posts are still generated.
//!
//! # Trusted Content
//!
//! Rendered markdown is inserted into the layout without escaping or
//! sanitization. Posts are assumed to come from the site owner. Raw HTML in
//! a post, `<script>` included, ends up in the published page as written.

pub mod config;
pub mod generate;
pub mod layout;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod server;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
