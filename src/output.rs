//! CLI output formatting.
//!
//! Each report has a `format_*` function returning lines (pure, testable) and
//! a `print_*` wrapper that writes them to stdout. Diagnostics go through
//! `tracing` on stderr; this module is only the human-facing summary.
//!
//! ```text
//! Generated site/hello-world.html
//! Generated site/hello.html
//! Skipped posts/broken.md: could not read file: Permission denied (os error 13)
//! Blog generated successfully in the 'site' directory.
//!     2 generated, 1 skipped
//! ```

use crate::generate::{BatchReport, DocumentOutcome};
use crate::naming;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Join an error and its sources into one line: `outer: middle: root`.
pub fn error_chain(err: &dyn Error) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}

/// One line per converted or skipped post.
pub fn format_outcome(outcome: &DocumentOutcome) -> String {
    match outcome {
        DocumentOutcome::Generated { artifact, .. } => {
            format!("Generated {}", artifact.display())
        }
        DocumentOutcome::Skipped { source, reason } => {
            format!("Skipped {}: {}", source.display(), error_chain(reason))
        }
    }
}

pub fn print_outcome(outcome: &DocumentOutcome) {
    println!("{}", format_outcome(outcome));
}

/// Closing lines after the batch.
pub fn format_summary(report: &BatchReport, output_dir: &Path) -> Vec<String> {
    vec![
        format!(
            "Blog generated successfully in the '{}' directory.",
            output_dir.display()
        ),
        format!(
            "    {} generated, {} skipped",
            report.generated_count(),
            report.skipped_count()
        ),
    ]
}

pub fn print_summary(report: &BatchReport, output_dir: &Path) {
    for line in format_summary(report, output_dir) {
        println!("{}", line);
    }
}

/// Posts a build would convert, with the artifact each one maps to.
///
/// ```text
/// Posts (2)
///     hello-world.md → hello-world.html
///     .md → (no title, will be skipped)
/// ```
pub fn format_check_output(documents: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![format!("Posts ({})", documents.len())];
    for doc in documents {
        let file_name = doc
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let target = match naming::page_title(&file_name) {
            Some(title) => naming::artifact_name(title),
            None => "(no title, will be skipped)".to_string(),
        };
        lines.push(format!("    {file_name} → {target}"));
    }
    lines
}

pub fn print_check_output(documents: &[PathBuf]) {
    for line in format_check_output(documents) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::SkipReason;
    use crate::write::WriteError;
    use std::io;

    #[test]
    fn error_chain_joins_sources() {
        let err = WriteError::Write {
            path: PathBuf::from("site/a.html"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(
            error_chain(&err),
            "could not write output file site/a.html: disk full"
        );
    }

    #[test]
    fn error_chain_single_error() {
        assert_eq!(error_chain(&SkipReason::EmptyTitle), "file name leaves an empty title");
    }

    #[test]
    fn generated_line() {
        let outcome = DocumentOutcome::Generated {
            source: PathBuf::from("posts/hello.md"),
            title: "hello".into(),
            artifact: PathBuf::from("site/hello.html"),
        };
        assert_eq!(format_outcome(&outcome), "Generated site/hello.html");
    }

    #[test]
    fn skipped_line_includes_reason_chain() {
        let outcome = DocumentOutcome::Skipped {
            source: PathBuf::from("posts/secret.md"),
            reason: SkipReason::Read(io::Error::other("permission denied")),
        };
        assert_eq!(
            format_outcome(&outcome),
            "Skipped posts/secret.md: could not read file: permission denied"
        );
    }

    #[test]
    fn summary_counts() {
        let report = BatchReport {
            outcomes: vec![
                DocumentOutcome::Generated {
                    source: PathBuf::from("posts/a.md"),
                    title: "a".into(),
                    artifact: PathBuf::from("site/a.html"),
                },
                DocumentOutcome::Skipped {
                    source: PathBuf::from("posts/.md"),
                    reason: SkipReason::EmptyTitle,
                },
            ],
        };
        let lines = format_summary(&report, Path::new("site"));
        assert_eq!(
            lines,
            [
                "Blog generated successfully in the 'site' directory.",
                "    1 generated, 1 skipped",
            ]
        );
    }

    #[test]
    fn summary_for_empty_batch() {
        let lines = format_summary(&BatchReport::default(), Path::new("out"));
        assert_eq!(lines[1], "    0 generated, 0 skipped");
    }

    #[test]
    fn check_output_maps_posts_to_artifacts() {
        let docs = vec![PathBuf::from("posts/hello-world.md"), PathBuf::from("posts/.md")];
        let lines = format_check_output(&docs);
        assert_eq!(
            lines,
            [
                "Posts (2)",
                "    hello-world.md → hello-world.html",
                "    .md → (no title, will be skipped)",
            ]
        );
    }
}
