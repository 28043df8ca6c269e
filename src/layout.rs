//! The shared page layout.
//!
//! Every post is wrapped in one layout template, loaded and parsed once at
//! startup and then reused read-only for the whole batch. Layouts use Tera
//! syntax and have two insertion points:
//!
//! ```text
//! {{ title }}    plain-text title, HTML-escaped on insertion
//! {{ content }}  rendered post body, inserted verbatim
//! ```
//!
//! Autoescaping is switched off and the title is escaped by hand, so the
//! trust decision lives in [`Page`] rather than in every layout file: the
//! title is text, the content is trusted HTML. A layout that omits either
//! insertion point renders without it. Referencing any other variable is a
//! render error for every page composed with that layout.

use crate::types::Page;
use maud::{DOCTYPE, PreEscaped, html};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATE_NAME: &str = "layout.html";
const TITLE_SLOT: &str = "{{ title }}";
const CONTENT_SLOT: &str = "{{ content }}";

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("could not read layout {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse layout {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
    #[error("could not render template")]
    Render(#[source] tera::Error),
}

/// A parsed layout template.
#[derive(Debug)]
pub struct Layout {
    tera: Tera,
}

impl Layout {
    /// Read and parse the layout file at `path`.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let source = std::fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source).map_err(|source| LayoutError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a layout from its source text.
    pub fn parse(source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Place `page` into the layout, returning the complete HTML document.
    pub fn compose(&self, page: &Page) -> Result<String, LayoutError> {
        let mut ctx = Context::new();
        ctx.insert("title", &tera::escape_html(&page.title));
        ctx.insert("content", &page.content.0);
        self.tera
            .render(TEMPLATE_NAME, &ctx)
            .map_err(LayoutError::Render)
    }
}

/// A minimal HTML5 layout with both insertion points, printed by
/// `inkpress gen-layout` as a starting point.
pub fn stock_layout() -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE_SLOT) }
            }
            body {
                header {
                    h1 { (TITLE_SLOT) }
                }
                main {
                    (PreEscaped(CONTENT_SLOT))
                }
            }
        }
    }
    .into_string()
}
