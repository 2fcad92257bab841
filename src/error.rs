use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for splicer
#[derive(Error, Debug)]
pub enum SplicerError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("File is not valid UTF-8: {}", path.display())]
    Encoding { path: PathBuf },

    #[error("Could not find {which} marker: {marker:?}")]
    MarkerNotFound { which: MarkerSide, marker: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

/// Which end of a marker-bounded region failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSide {
    Start,
    End,
}

impl fmt::Display for MarkerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerSide::Start => write!(f, "start"),
            MarkerSide::End => write!(f, "end"),
        }
    }
}

impl SplicerError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn encoding(path: impl Into<PathBuf>) -> Self {
        Self::Encoding { path: path.into() }
    }

    pub fn marker_not_found(which: MarkerSide, marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            which,
            marker: marker.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// The file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SplicerError::Io { path, .. } => path.as_deref(),
            SplicerError::NotFound { path }
            | SplicerError::PermissionDenied { path }
            | SplicerError::Encoding { path } => Some(path.as_path()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SplicerError {
    fn from(error: std::io::Error) -> Self {
        SplicerError::io_error(error, None::<PathBuf>)
    }
}

impl From<serde_json::Error> for SplicerError {
    fn from(error: serde_json::Error) -> Self {
        SplicerError::parse_error(error.to_string())
    }
}

impl From<serde_yaml::Error> for SplicerError {
    fn from(error: serde_yaml::Error) -> Self {
        SplicerError::parse_error(error.to_string())
    }
}

impl From<toml::de::Error> for SplicerError {
    fn from(error: toml::de::Error) -> Self {
        SplicerError::parse_error(error.to_string())
    }
}

/// Result type alias using SplicerError
pub type SplicerResult<T> = Result<T, SplicerError>;
