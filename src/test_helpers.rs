//! Shared test utilities.
//!
//! [`setup_fixtures`] copies `fixtures/` into a temp directory so each test
//! gets its own mutable site:
//!
//! ```text
//! <tmp>/posts/hello.md            # "# Hi"
//! <tmp>/posts/hello-world.md
//! <tmp>/posts/links.md
//! <tmp>/posts/notes.txt           # not a post
//! <tmp>/templates/layout.html
//! <tmp>/site/                     # output, not created yet
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;

/// An isolated copy of the fixture site.
pub struct FixtureSite {
    tmp: TempDir,
}

impl FixtureSite {
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root().join("posts")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("site")
    }

    pub fn layout_path(&self) -> PathBuf {
        self.root().join("templates/layout.html")
    }

    /// Config pointing at this copy, with port 0 so nothing collides.
    pub fn config(&self) -> SiteConfig {
        let mut config = SiteConfig {
            source_dir: self.source_dir(),
            output_dir: self.output_dir(),
            layout: self.layout_path(),
            ..SiteConfig::default()
        };
        config.server.port = 0;
        config
    }
}

/// Copy `fixtures/` to a temp directory and return it.
pub fn setup_fixtures() -> FixtureSite {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    FixtureSite { tmp }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Sorted file names in the output directory. Panics if it doesn't exist.
pub fn output_names(site: &FixtureSite) -> Vec<String> {
    let dir = site.output_dir();
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("output dir {} unreadable: {e}", dir.display()))
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Contents of `<output>/<title>.html`. Panics if missing.
pub fn read_artifact(site: &FixtureSite, title: &str) -> String {
    let path = site.output_dir().join(format!("{title}.html"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("artifact {} unreadable: {e}", path.display()))
}
