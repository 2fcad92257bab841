// splicer - replace a region of a text file with the contents of another

pub mod cli;
pub mod config;
pub mod error;
pub mod error_handling;
pub mod file;
pub mod logging;
pub mod splice;

use tracing::debug;

pub use error::{SplicerError, SplicerResult};
pub use file::SpliceReport;
pub use splice::{Boundaries, LineMode, LineRange, SpliceJob};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Resolve the job from flags and config, then run it
pub fn run(cli: &cli::Cli) -> SplicerResult<SpliceReport> {
    let job = cli.loader().resolve(cli.overrides()?)?;
    debug!(
        "Splicing {} into {} ({:?} mode)",
        job.source.display(),
        job.target.display(),
        job.mode
    );
    file::run_job(&job, cli.dry_run)
}
