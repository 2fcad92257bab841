use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use super::lines::{Document, LineMode, LineRange};
use super::markers::{find_markers, splice_between};
use crate::error::SplicerResult;

pub const DEFAULT_TRAILER: &str = "\n\n";

/// How the region to replace is chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Boundaries {
    Lines(LineRange),
    Markers { start: String, end: String },
}

/// Everything needed to perform one splice
#[derive(Debug, Clone)]
pub struct SpliceJob {
    pub target: PathBuf,
    pub source: PathBuf,
    pub boundaries: Boundaries,
    pub mode: LineMode,
    /// Appended to the replacement block before insertion
    pub trailer: String,
}

/// Result of splicing in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    pub content: String,
    /// Net bytes that left the target
    pub removed_bytes: usize,
    /// Size of the inserted block, trailer included
    pub inserted_bytes: usize,
    /// Line elements after the splice. `None` for marker splices.
    pub elements: Option<usize>,
}

impl SpliceJob {
    pub fn new(target: impl Into<PathBuf>, source: impl Into<PathBuf>, boundaries: Boundaries) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
            boundaries,
            mode: LineMode::default(),
            trailer: DEFAULT_TRAILER.to_string(),
        }
    }

    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_trailer(mut self, trailer: impl Into<String>) -> Self {
        self.trailer = trailer.into();
        self
    }

    /// The block that takes the removed region's place
    pub fn block(&self, replacement: &str) -> String {
        format!("{}{}", replacement, self.trailer)
    }

    /// Splice `replacement` into `target_text` without touching the disk
    pub fn apply_to(&self, target_text: &str, replacement: &str) -> SplicerResult<SpliceOutcome> {
        let block = self.block(replacement);
        let inserted_bytes = block.len();

        match &self.boundaries {
            Boundaries::Lines(range) => {
                let doc = Document::parse(target_text, self.mode);
                if doc.is_empty() {
                    debug!("Target has no lines; output is the block alone");
                }

                let spliced = doc.splice(*range, block);
                debug!("Line splice {}..{} produced {} elements", range.start, range.end, spliced.len());

                let content = spliced.render(self.mode);
                // Net bytes gone from the target. Split mode drops separators
                // along with the lines, and an inverted range grows the text,
                // which counts as nothing removed.
                let removed_bytes = (target_text.len() + inserted_bytes)
                    .saturating_sub(content.len());

                Ok(SpliceOutcome {
                    content,
                    removed_bytes,
                    inserted_bytes,
                    elements: Some(spliced.len()),
                })
            }
            Boundaries::Markers { start, end } => {
                let span = find_markers(target_text, start, end)?;
                Ok(SpliceOutcome {
                    content: splice_between(target_text, span, &block),
                    removed_bytes: span.removed_len(),
                    inserted_bytes,
                    elements: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_lines() -> String {
        (0..10).map(|i| format!("L{}\n", i)).collect()
    }

    #[test]
    fn test_line_job_keeps_prefix_and_suffix() {
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(3, 6)));
        let outcome = job.apply_to(&ten_lines(), "X\n").unwrap();

        assert_eq!(outcome.elements, Some(8));
        assert_eq!(outcome.content, "L0\nL1\nL2\nX\n\n\nL6\nL7\nL8\nL9\n");
        assert_eq!(outcome.removed_bytes, "L3\nL4\nL5\n".len());
        assert_eq!(outcome.inserted_bytes, "X\n\n\n".len());
    }

    #[test]
    fn test_rerun_is_not_idempotent() {
        // The block adds lines, so the same indices now cover different content
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(2, 6)));
        let once = job.apply_to(&ten_lines(), "X\n").unwrap().content;
        let twice = job.apply_to(&once, "X\n").unwrap().content;

        assert_ne!(once, twice);
        assert!(once.contains("L6\n"));
        assert!(!twice.contains("L6\n"));
    }

    #[test]
    fn test_custom_trailer_and_split_mode() {
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(1, 2)))
            .with_mode(LineMode::Split)
            .with_trailer("");
        let outcome = job.apply_to("a\nb\nc", "B").unwrap();

        assert_eq!(outcome.content, "a\nB\nc");
        assert_eq!(outcome.removed_bytes, 1);
    }

    #[test]
    fn test_split_mode_counts_removed_separators() {
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(1, 3)))
            .with_mode(LineMode::Split)
            .with_trailer("");
        let outcome = job.apply_to("a\nb\nc\nd", "X").unwrap();

        assert_eq!(outcome.content, "a\nX\nd");
        // "b", "\n", "c" are gone
        assert_eq!(outcome.removed_bytes, 3);
        assert_eq!(outcome.inserted_bytes, 1);
    }

    #[test]
    fn test_empty_target_yields_block() {
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(0, 5)));
        let outcome = job.apply_to("", "X\n").unwrap();

        assert_eq!(outcome.content, "X\n\n\n");
        assert_eq!(outcome.elements, Some(1));
        assert_eq!(outcome.removed_bytes, 0);
    }

    #[test]
    fn test_empty_source_inserts_trailer_only() {
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(1, 2)));
        let outcome = job.apply_to("a\nb\nc\n", "").unwrap();

        assert_eq!(outcome.content, "a\n\n\nc\n");
        assert_eq!(outcome.removed_bytes, 2);
        assert_eq!(outcome.inserted_bytes, 2);
    }

    #[test]
    fn test_inverted_range_removes_nothing() {
        let job = SpliceJob::new("t", "s", Boundaries::Lines(LineRange::new(5, 2)));
        let outcome = job.apply_to(&ten_lines(), "X").unwrap();
        assert_eq!(outcome.removed_bytes, 0);
        assert_eq!(outcome.elements, Some(5 + 1 + 8));
    }

    #[test]
    fn test_marker_job() {
        let job = SpliceJob::new(
            "t",
            "s",
            Boundaries::Markers {
                start: "<<".to_string(),
                end: ">>".to_string(),
            },
        );
        let outcome = job.apply_to("a<<old>>b", "new").unwrap();
        assert_eq!(outcome.content, "anew\n\n>>b");
        assert_eq!(outcome.removed_bytes, 5);
        assert_eq!(outcome.elements, None);
    }
}
