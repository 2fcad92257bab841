// Configuration for splice jobs: an optional config file merged with
// command-line flags

#[allow(clippy::module_inception)]
pub mod config;
pub mod config_loader;

pub use config::{LinesConfig, MarkersConfig, SpliceConfig, DEFAULT_CONFIG_FILE};
pub use config_loader::{build_job, ConfigLoader, Overrides};
