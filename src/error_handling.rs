use crate::error::{SplicerError, SplicerResult};
use std::io::ErrorKind;
use std::path::Path;
use tracing::error;

/// Handles file operation errors with file path context
pub fn with_file_context<T, F>(operation: F, path: impl AsRef<Path>) -> SplicerResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        error!("File operation failed on {}: {}", path_ref.display(), e);
        SplicerError::io_error(e, Some(path_ref))
    })
}

/// Runs a filesystem operation and sorts its failure into the error variant
/// matching the io error kind
pub fn fs_operation<T, F>(operation: F, path: impl AsRef<Path>, operation_name: &str) -> SplicerResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        error!(
            "{} failed on {}: {} (at {}:{})",
            operation_name,
            path_ref.display(),
            e,
            file!(),
            line!()
        );

        match e.kind() {
            ErrorKind::NotFound => SplicerError::not_found(path_ref),
            ErrorKind::PermissionDenied => SplicerError::permission_denied(path_ref),
            ErrorKind::InvalidData => SplicerError::encoding(path_ref),
            _ => SplicerError::io_error(e, Some(path_ref)),
        }
    })
}
