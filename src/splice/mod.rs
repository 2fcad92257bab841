pub mod job;
pub mod lines;
pub mod markers;

pub use job::{Boundaries, SpliceJob, SpliceOutcome, DEFAULT_TRAILER};
pub use lines::{splice_lines, Document, LineMode, LineRange, RangeCheck};
pub use markers::{find_markers, splice_between, MarkerSpan};
