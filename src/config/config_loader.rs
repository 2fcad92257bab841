use std::path::PathBuf;
use tracing::debug;

use super::config::{LinesConfig, MarkersConfig, SpliceConfig};
use crate::error::{SplicerError, SplicerResult};
use crate::splice::{Boundaries, LineMode, LineRange, SpliceJob};

/// Values supplied on the command line. They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub target: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub lines: Option<LinesConfig>,
    pub markers: Option<MarkersConfig>,
    pub mode: Option<LineMode>,
    pub trailer: Option<String>,
}

/// Finds and reads the config file, then merges command-line overrides
pub struct ConfigLoader {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigLoader {
    /// Use `splicer.toml` in the working directory if it exists
    pub fn new() -> Self {
        Self {
            config_path: SpliceConfig::default_config_path(),
            explicit: false,
        }
    }

    /// Set a custom config path; it must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            explicit: true,
        }
    }

    pub fn load(&self) -> SplicerResult<SpliceConfig> {
        if !self.explicit && !self.config_path.exists() {
            debug!("No config file at {}", self.config_path.display());
            return Ok(SpliceConfig::default());
        }

        debug!("Loading config from {}", self.config_path.display());
        SpliceConfig::load(&self.config_path)
    }

    /// Load the file and build the job, command line first
    pub fn resolve(&self, overrides: Overrides) -> SplicerResult<SpliceJob> {
        let file = self.load()?;
        build_job(file, overrides)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn boundaries_of(
    lines: Option<LinesConfig>,
    markers: Option<MarkersConfig>,
    layer: &str,
) -> SplicerResult<Option<Boundaries>> {
    match (lines, markers) {
        (Some(_), Some(_)) => Err(SplicerError::invalid_argument(format!(
            "{} sets both a line range and markers; pick one",
            layer
        ))),
        (Some(l), None) => {
            let range = if l.line_numbers {
                LineRange::from_line_numbers(l.start, l.end)
            } else {
                LineRange::new(l.start, l.end)
            };
            Ok(Some(Boundaries::Lines(range)))
        }
        (None, Some(m)) => Ok(Some(Boundaries::Markers {
            start: m.start,
            end: m.end,
        })),
        (None, None) => Ok(None),
    }
}

pub fn build_job(file: SpliceConfig, overrides: Overrides) -> SplicerResult<SpliceJob> {
    let target = overrides
        .target
        .or(file.target)
        .ok_or_else(|| SplicerError::invalid_argument("no target file given"))?;
    let source = overrides
        .source
        .or(file.source)
        .ok_or_else(|| SplicerError::invalid_argument("no source file given"))?;

    let boundaries = match boundaries_of(overrides.lines, overrides.markers, "command line")? {
        Some(b) => b,
        None => boundaries_of(file.lines, file.markers, "config file")?.ok_or_else(|| {
            SplicerError::invalid_argument("no splice boundaries given (line range or markers)")
        })?,
    };

    let mut job = SpliceJob::new(target, source, boundaries);
    if let Some(mode) = overrides.mode.or(file.mode) {
        job = job.with_mode(mode);
    }
    if let Some(trailer) = overrides.trailer.or(file.trailer) {
        job = job.with_trailer(trailer);
    }

    debug!("Resolved splice job: {:?}", job);
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splice::DEFAULT_TRAILER;
    use tempfile::TempDir;

    fn file_config() -> SpliceConfig {
        SpliceConfig {
            target: Some(PathBuf::from("file-target.tsx")),
            source: Some(PathBuf::from("file-source.tsx")),
            lines: Some(LinesConfig {
                start: 2539,
                end: 2625,
                line_numbers: false,
            }),
            markers: None,
            mode: Some(LineMode::Split),
            trailer: None,
        }
    }

    #[test]
    fn test_file_values_used_when_no_overrides() {
        let job = build_job(file_config(), Overrides::default()).unwrap();
        assert_eq!(job.target, PathBuf::from("file-target.tsx"));
        assert_eq!(job.boundaries, Boundaries::Lines(LineRange::new(2539, 2625)));
        assert_eq!(job.mode, LineMode::Split);
        assert_eq!(job.trailer, DEFAULT_TRAILER);
    }

    #[test]
    fn test_command_line_wins() {
        let overrides = Overrides {
            target: Some(PathBuf::from("cli-target.tsx")),
            markers: Some(MarkersConfig {
                start: "function A(".to_string(),
                end: "function B(".to_string(),
            }),
            trailer: Some(String::new()),
            ..Overrides::default()
        };
        let job = build_job(file_config(), overrides).unwrap();

        assert_eq!(job.target, PathBuf::from("cli-target.tsx"));
        assert_eq!(job.source, PathBuf::from("file-source.tsx"));
        assert!(matches!(job.boundaries, Boundaries::Markers { .. }));
        assert_eq!(job.trailer, "");
    }

    #[test]
    fn test_line_numbers_are_converted() {
        let overrides = Overrides {
            lines: Some(LinesConfig {
                start: 2540,
                end: 2625,
                line_numbers: true,
            }),
            ..Overrides::default()
        };
        let job = build_job(file_config(), overrides).unwrap();
        assert_eq!(job.boundaries, Boundaries::Lines(LineRange::new(2539, 2625)));
    }

    #[test]
    fn test_missing_pieces_are_invalid_arguments() {
        let err = build_job(SpliceConfig::default(), Overrides::default()).unwrap_err();
        assert!(matches!(err, SplicerError::InvalidArgument { .. }));

        let mut config = file_config();
        config.lines = None;
        let err = build_job(config, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("no splice boundaries"));

        let mut config = file_config();
        config.markers = Some(MarkersConfig {
            start: "a".to_string(),
            end: "b".to_string(),
        });
        let err = build_job(config, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("both a line range and markers"));
    }

    #[test]
    fn test_absent_default_config_is_empty() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader {
            config_path: dir.path().join("splicer.toml"),
            explicit: false,
        };
        assert_eq!(loader.load().unwrap(), SpliceConfig::default());

        let loader = ConfigLoader::with_path(dir.path().join("nope.toml"));
        assert!(loader.load().is_err());
    }
}
