// Line-range splicing. Indices past the end clamp, nothing panics, and an
// inverted range duplicates the overlap instead of failing.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the target is broken into lines and put back together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineMode {
    /// Lines keep their terminators ("\n", "\r\n" or a lone "\r");
    /// output is plain concatenation
    #[default]
    KeepEnds,
    /// Split on '\n' dropping terminators; output is joined with '\n'
    Split,
}

/// Zero-based, start inclusive, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert one-based inclusive line numbers (as shown in an editor)
    /// into a zero-based half-open range.
    ///
    /// Removing lines 2540 through 2625 gives `start = 2539, end = 2625`.
    pub fn from_line_numbers(first: usize, last: usize) -> Self {
        Self {
            start: first.saturating_sub(1),
            end: last,
        }
    }

    pub fn check(&self, len: usize) -> RangeCheck {
        if self.start > self.end {
            RangeCheck::Inverted
        } else if self.end > len {
            RangeCheck::PastEnd
        } else {
            RangeCheck::Ordered
        }
    }
}

/// Shape of a range relative to a document. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    Ordered,
    Inverted,
    PastEnd,
}

/// A target file as an ordered list of lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn parse(text: &str, mode: LineMode) -> Self {
        let lines = match mode {
            LineMode::KeepEnds => split_keep_ends(text),
            LineMode::Split => text.split('\n').map(str::to_string).collect(),
        };
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, mode: LineMode) -> String {
        match mode {
            LineMode::KeepEnds => self.lines.concat(),
            LineMode::Split => self.lines.join("\n"),
        }
    }

    /// Replace `range` with a single element holding `block`
    pub fn splice(&self, range: LineRange, block: String) -> Document {
        match range.check(self.len()) {
            RangeCheck::Ordered => {}
            RangeCheck::Inverted => warn!(
                "Splice start {} is after end {}; lines {}..{} will be duplicated",
                range.start, range.end, range.end, range.start
            ),
            RangeCheck::PastEnd => warn!(
                "Splice range {}..{} runs past the end of a {}-line document",
                range.start,
                range.end,
                self.len()
            ),
        }

        Document {
            lines: splice_lines(&self.lines, block, range),
        }
    }
}

/// Break after "\n", "\r\n" or a lone "\r", keeping each terminator as is
fn split_keep_ends(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut begin = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let ends_line = match b {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            lines.push(text[begin..=i].to_string());
            begin = i + 1;
        }
    }
    if begin < text.len() {
        lines.push(text[begin..].to_string());
    }
    lines
}

/// `lines[..start] ++ [block] ++ lines[end..]` with both indices clamped
pub fn splice_lines(lines: &[String], block: String, range: LineRange) -> Vec<String> {
    let len = lines.len();
    let head = &lines[..range.start.min(len)];
    let tail = &lines[range.end.min(len)..];

    debug!(
        "Keeping {} leading and {} trailing lines of {}",
        head.len(),
        tail.len(),
        len
    );

    let mut out = Vec::with_capacity(head.len() + 1 + tail.len());
    out.extend_from_slice(head);
    out.push(block);
    out.extend_from_slice(tail);
    out
}
