//! The conversion pipeline.
//!
//! A build runs in two steps, each a method on [`Pipeline`]:
//!
//! ```text
//! 1. startup  load layout → list posts → create output dir   (any failure is fatal)
//! 2. run      for each post: read → render → compose → write  (failures skip the post)
//! ```
//!
//! Startup lists the source directory before creating the output directory,
//! so a missing source directory aborts the build without touching the
//! output location.
//!
//! During the run, posts are converted one at a time in discovery order.
//! A post that can't be read, composed, or written is recorded as
//! [`DocumentOutcome::Skipped`] with the reason and the batch moves on; no
//! single post can stop the others from being generated. The returned
//! [`BatchReport`] holds one outcome per discovered post.

use crate::config::SiteConfig;
use crate::layout::{Layout, LayoutError};
use crate::naming;
use crate::output::error_chain;
use crate::render::{CommonMark, MarkdownRenderer};
use crate::scan::{self, ScanError};
use crate::types::{Document, Page};
use crate::write::{self, WriteError};
use maud::PreEscaped;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop a build before any post is converted.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    OutputDir(#[from] WriteError),
}

/// Why a single post was left out of the site.
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("could not read file")]
    Read(#[source] std::io::Error),
    #[error("file name leaves an empty title")]
    EmptyTitle,
    #[error(transparent)]
    Compose(LayoutError),
    #[error(transparent)]
    Write(WriteError),
}

/// What happened to one source document.
#[derive(Debug)]
pub enum DocumentOutcome {
    Generated {
        source: PathBuf,
        title: String,
        artifact: PathBuf,
    },
    Skipped {
        source: PathBuf,
        reason: SkipReason,
    },
}

impl DocumentOutcome {
    pub fn source(&self) -> &Path {
        match self {
            DocumentOutcome::Generated { source, .. } | DocumentOutcome::Skipped { source, .. } => {
                source
            }
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, DocumentOutcome::Generated { .. })
    }
}

/// Outcomes of a finished batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Paths of every artifact written.
    pub fn artifacts(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            DocumentOutcome::Generated { artifact, .. } => Some(artifact.as_path()),
            DocumentOutcome::Skipped { .. } => None,
        })
    }

    /// Source path and reason for every skipped post.
    pub fn skipped(&self) -> impl Iterator<Item = (&Path, &SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            DocumentOutcome::Skipped { source, reason } => Some((source.as_path(), reason)),
            DocumentOutcome::Generated { .. } => None,
        })
    }

    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_generated()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.generated_count()
    }
}

/// A build that has passed startup: layout parsed, posts listed, output
/// directory in place.
#[derive(Debug)]
pub struct Pipeline<R = CommonMark> {
    layout: Layout,
    documents: Vec<PathBuf>,
    output_dir: PathBuf,
    renderer: R,
}

impl Pipeline<CommonMark> {
    /// Prepare a build with the stock CommonMark renderer.
    pub fn startup(config: &SiteConfig) -> Result<Self, PipelineError> {
        Self::with_renderer(config, CommonMark)
    }
}

impl<R: MarkdownRenderer> Pipeline<R> {
    /// Prepare a build that renders posts with `renderer`.
    pub fn with_renderer(config: &SiteConfig, renderer: R) -> Result<Self, PipelineError> {
        let layout = Layout::load(&config.layout)?;
        info!(layout = %config.layout.display(), "loaded layout");

        let documents = scan::scan(&config.source_dir)?;
        info!(
            source = %config.source_dir.display(),
            count = documents.len(),
            "discovered documents"
        );

        write::ensure_output_dir(&config.output_dir)?;

        Ok(Self {
            layout,
            documents,
            output_dir: config.output_dir.clone(),
            renderer,
        })
    }

    /// Posts that will be converted, in order.
    pub fn documents(&self) -> &[PathBuf] {
        &self.documents
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Convert every post.
    pub fn run(&self) -> BatchReport {
        self.run_with(|_| {})
    }

    /// Convert every post, calling `on_outcome` as each one finishes.
    pub fn run_with(&self, mut on_outcome: impl FnMut(&DocumentOutcome)) -> BatchReport {
        let mut report = BatchReport::default();
        for path in &self.documents {
            let outcome = self.convert(path);
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }
        info!(
            generated = report.generated_count(),
            skipped = report.skipped_count(),
            "batch complete"
        );
        report
    }

    /// Convert a single post. Never fails; failures become `Skipped`.
    pub fn convert(&self, path: &Path) -> DocumentOutcome {
        match self.try_convert(path) {
            Ok((title, artifact)) => {
                debug!(source = %path.display(), artifact = %artifact.display(), "generated");
                DocumentOutcome::Generated {
                    source: path.to_path_buf(),
                    title,
                    artifact,
                }
            }
            Err(reason) => {
                warn!(source = %path.display(), error = %error_chain(&reason), "skipping document");
                DocumentOutcome::Skipped {
                    source: path.to_path_buf(),
                    reason,
                }
            }
        }
    }

    fn try_convert(&self, path: &Path) -> Result<(String, PathBuf), SkipReason> {
        let doc = Document::read(path).map_err(SkipReason::Read)?;
        let file_name = doc.file_name();
        let title = naming::page_title(&file_name)
            .ok_or(SkipReason::EmptyTitle)?
            .to_string();

        let page = Page {
            title,
            content: PreEscaped(self.renderer.render(&doc.bytes)),
        };
        let html = self.layout.compose(&page).map_err(SkipReason::Compose)?;
        let artifact = write::write_artifact(&self.output_dir, &page.title, html.as_bytes())
            .map_err(SkipReason::Write)?;

        Ok((page.title, artifact))
    }
}

/// Run a whole build: startup, then convert every post.
pub fn generate(config: &SiteConfig) -> Result<BatchReport, PipelineError> {
    Ok(Pipeline::startup(config)?.run())
}
