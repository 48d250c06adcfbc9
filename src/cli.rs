// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{OutputFormat, RenderConfig};
use crate::render::PdfEngine;

#[derive(Parser, Debug)]
#[command(name = "resume-render")]
#[command(about = "Render a YAML resume to HTML, PDF and DOCX")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resume data file
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Directory templates are looked up in
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// HTML template, relative to the template directory
    #[arg(long)]
    pub template: Option<PathBuf>,

    #[arg(long)]
    pub html_output: Option<PathBuf>,

    #[arg(long)]
    pub pdf_output: Option<PathBuf>,

    #[arg(long)]
    pub docx_output: Option<PathBuf>,

    /// HTML-to-PDF program, called as `<program> <input> <output>`
    #[arg(long)]
    pub pdf_engine: Option<String>,

    /// Only produce these formats (repeatable)
    #[arg(long = "format", value_enum)]
    pub formats: Vec<OutputFormat>,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags
    pub fn into_config(self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::new(),
        };

        if let Some(path) = self.data {
            config = config.with_data_path(path);
        }
        if let Some(dir) = self.template_dir {
            config = config.with_template_dir(dir);
        }
        if let Some(template) = self.template {
            config = config.with_template(template);
        }
        if let Some(path) = self.html_output {
            config = config.with_html_output(path);
        }
        if let Some(path) = self.pdf_output {
            config = config.with_pdf_output(path);
        }
        if let Some(path) = self.docx_output {
            config = config.with_docx_output(path);
        }
        if let Some(program) = self.pdf_engine {
            config = config.with_pdf_engine(PdfEngine::new(&program));
        }
        if !self.formats.is_empty() {
            config = config.with_formats(self.formats);
        }

        Ok(config)
    }
}
