// Marker-bounded splicing: the region runs from the first occurrence of the
// start marker up to (not including) the first occurrence of the end marker.

use tracing::{debug, warn};

use crate::error::{MarkerSide, SplicerError, SplicerResult};

/// Byte offsets of a resolved marker pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    pub start: usize,
    pub end: usize,
}

impl MarkerSpan {
    /// Bytes removed from the target. Zero when the markers are inverted.
    pub fn removed_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Locate both markers in `text`
pub fn find_markers(text: &str, start_marker: &str, end_marker: &str) -> SplicerResult<MarkerSpan> {
    if start_marker.is_empty() {
        return Err(SplicerError::invalid_argument("start marker must not be empty"));
    }
    if end_marker.is_empty() {
        return Err(SplicerError::invalid_argument("end marker must not be empty"));
    }

    let start = text
        .find(start_marker)
        .ok_or_else(|| SplicerError::marker_not_found(MarkerSide::Start, start_marker))?;
    let end = text
        .find(end_marker)
        .ok_or_else(|| SplicerError::marker_not_found(MarkerSide::End, end_marker))?;

    debug!("Start marker at byte {}, end marker at byte {}", start, end);
    Ok(MarkerSpan { start, end })
}

/// `text[..start] + block + text[end..]`
pub fn splice_between(text: &str, span: MarkerSpan, block: &str) -> String {
    if span.start > span.end {
        warn!(
            "End marker (byte {}) precedes start marker (byte {}); text between them will be duplicated",
            span.end, span.start
        );
    }

    let mut out = String::with_capacity(span.start + block.len() + (text.len() - span.end));
    out.push_str(&text[..span.start]);
    out.push_str(block);
    out.push_str(&text[span.end..]);
    out
}
