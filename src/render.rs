//! Markdown to HTML conversion.
//!
//! The pipeline only needs "bytes in, HTML fragment out", so rendering sits
//! behind [`MarkdownRenderer`]. The stock [`CommonMark`] renderer uses
//! pulldown-cmark with no extensions enabled: plain CommonMark, nothing else.
//! Rendering never fails. Malformed markdown yields best-effort HTML and
//! invalid UTF-8 is decoded lossily.

use pulldown_cmark::{Options, Parser, html as md_html};

/// Converts raw markdown bytes into an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &[u8]) -> String;
}

/// CommonMark renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl MarkdownRenderer for CommonMark {
    fn render(&self, markdown: &[u8]) -> String {
        let text = String::from_utf8_lossy(markdown);
        let parser = Parser::new_ext(&text, Options::empty());
        let mut html = String::with_capacity(text.len() * 3 / 2);
        md_html::push_html(&mut html, parser);
        html
    }
}
