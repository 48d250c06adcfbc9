// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::FsOps;
use crate::render::pdf::PdfEngine;

/// Output formats produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Pdf,
    Docx,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Html,
        OutputFormat::Pdf,
        OutputFormat::Docx,
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub data_path: PathBuf,
    pub template_dir: PathBuf,
    pub template: PathBuf,
    pub html_output: PathBuf,
    pub pdf_output: PathBuf,
    pub docx_output: PathBuf,
    pub pdf_engine: PdfEngine,
    pub formats: Vec<OutputFormat>,
    #[serde(skip)]
    pub root_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        // Capture the current directory at creation time
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            data_path: PathBuf::from("resume.yaml"),
            template_dir: PathBuf::from("."),
            template: PathBuf::from("templates/html_template.jinja2"),
            html_output: PathBuf::from("output/resume.html"),
            pdf_output: PathBuf::from("output/resume.pdf"),
            docx_output: PathBuf::from("output/resume.docx"),
            pdf_engine: PdfEngine::default(),
            formats: OutputFormat::ALL.to_vec(),
            root_dir: current_dir,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML configuration file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = FsOps::read_file_safe(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.formats.is_empty() {
            anyhow::bail!("`formats` must name at least one output format");
        }
        Ok(config)
    }

    pub fn with_root_dir(mut self, dir: PathBuf) -> Self {
        self.root_dir = dir;
        self
    }

    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = path;
        self
    }

    pub fn with_template_dir(mut self, dir: PathBuf) -> Self {
        self.template_dir = dir;
        self
    }

    pub fn with_template(mut self, template: PathBuf) -> Self {
        self.template = template;
        self
    }

    pub fn with_html_output(mut self, path: PathBuf) -> Self {
        self.html_output = path;
        self
    }

    pub fn with_pdf_output(mut self, path: PathBuf) -> Self {
        self.pdf_output = path;
        self
    }

    pub fn with_docx_output(mut self, path: PathBuf) -> Self {
        self.docx_output = path;
        self
    }

    pub fn with_pdf_engine(mut self, engine: PdfEngine) -> Self {
        self.pdf_engine = engine;
        self
    }

    pub fn with_formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = formats;
        self
    }

    pub fn wants(&self, format: OutputFormat) -> bool {
        self.formats.contains(&format)
    }

    fn absolute_path(&self, path: &Path) -> PathBuf {
        FsOps::normalize_path(&self.root_dir, path)
    }

    pub fn data_path_absolute(&self) -> PathBuf {
        self.absolute_path(&self.data_path)
    }

    pub fn template_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.template_dir)
    }

    pub fn html_output_absolute(&self) -> PathBuf {
        self.absolute_path(&self.html_output)
    }

    pub fn pdf_output_absolute(&self) -> PathBuf {
        self.absolute_path(&self.pdf_output)
    }

    pub fn docx_output_absolute(&self) -> PathBuf {
        self.absolute_path(&self.docx_output)
    }
}
