pub mod operations;

pub use operations::{read_source, read_target, run_job, write_target, SpliceReport};
