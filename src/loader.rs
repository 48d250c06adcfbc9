// src/loader.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::core::FsOps;
use crate::types::ResumeRecord;

/// Load a resume record from a YAML file. No schema validation happens here.
pub fn load_resume(path: &Path) -> Result<ResumeRecord> {
    let content = FsOps::read_file_safe(path)?;
    let record = ResumeRecord::from_yaml_str(&content)
        .with_context(|| format!("Failed to load resume data from {}", path.display()))?;

    debug!(
        "Loaded resume data from {} (name: {})",
        path.display(),
        record.name().unwrap_or("<missing>")
    );
    Ok(record)
}
