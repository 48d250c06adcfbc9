// src/core/fs_ops.rs
//! File system helpers shared by the loader and the renderers

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            debug!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Create the parent directory of a file about to be written
    pub fn ensure_parent_dir(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) => Self::ensure_dir_exists(parent),
            None => Ok(()),
        }
    }

    pub fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write text, creating parent directories first
    pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        Self::ensure_parent_dir(path)?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        debug!("Written file: {}", path.display());
        Ok(())
    }

    /// Create a file for writing, creating parent directories first
    pub fn create_file_safe(path: &Path) -> Result<fs::File> {
        Self::ensure_parent_dir(path)?;

        fs::File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))
    }

    /// Resolve `relative` against `base` unless it is already absolute
    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }

    /// Size in bytes of an existing file, `None` when it does not exist
    pub fn file_size(path: &Path) -> Option<u64> {
        fs::metadata(path).ok().filter(|m| m.is_file()).map(|m| m.len())
    }
}
