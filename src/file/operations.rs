use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::SplicerResult;
use crate::error_handling::fs_operation;
use crate::splice::SpliceJob;

/// What a splice run did, suitable for printing or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct SpliceReport {
    pub target: PathBuf,
    pub source: PathBuf,
    pub removed_bytes: usize,
    pub inserted_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<usize>,
    /// SHA-256 of the target before the splice
    pub digest_before: String,
    /// SHA-256 of the spliced content
    pub digest_after: String,
    pub written: bool,
    #[serde(skip)]
    pub content: String,
}

impl SpliceReport {
    pub fn summary(&self) -> String {
        format!(
            "Successfully spliced {} into {}: replaced {} bytes with {} bytes.",
            self.source.display(),
            self.target.display(),
            self.removed_bytes,
            self.inserted_bytes
        )
    }
}

pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Read the whole target file as UTF-8
pub fn read_target(path: &Path) -> SplicerResult<String> {
    let content = fs_operation(|| fs::read_to_string(path), path, "Read target")?;
    debug!("Read target {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Read the replacement block; its content is not interpreted
pub fn read_source(path: &Path) -> SplicerResult<String> {
    let content = fs_operation(|| fs::read_to_string(path), path, "Read source")?;
    debug!("Read source {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Overwrite the target in place. No backup is taken.
pub fn write_target(path: &Path, content: &str) -> SplicerResult<()> {
    fs_operation(|| fs::write(path, content), path, "Write target")?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Read both files, splice, and write the target back unless `dry_run`
pub fn run_job(job: &SpliceJob, dry_run: bool) -> SplicerResult<SpliceReport> {
    let target_text = read_target(&job.target)?;
    let replacement = read_source(&job.source)?;

    let outcome = job.apply_to(&target_text, &replacement)?;

    if dry_run {
        info!("Dry run: leaving {} untouched", job.target.display());
    } else {
        write_target(&job.target, &outcome.content)?;
        info!(
            "Spliced {} into {} ({} bytes removed, {} inserted)",
            job.source.display(),
            job.target.display(),
            outcome.removed_bytes,
            outcome.inserted_bytes
        );
    }

    Ok(SpliceReport {
        target: job.target.clone(),
        source: job.source.clone(),
        removed_bytes: outcome.removed_bytes,
        inserted_bytes: outcome.inserted_bytes,
        elements: outcome.elements,
        digest_before: content_digest(&target_text),
        digest_after: content_digest(&outcome.content),
        written: !dry_run,
        content: outcome.content,
    })
}
