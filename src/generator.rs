// src/generator.rs
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::config::{OutputFormat, RenderConfig};
use crate::loader::load_resume;
use crate::render::{render_docx, render_html, render_pdf};

/// Paths written by one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub html: Option<PathBuf>,
    pub pdf: Option<PathBuf>,
    pub docx: Option<PathBuf>,
}

pub struct ResumeGenerator {
    pub config: RenderConfig,
}

impl ResumeGenerator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Load the record, then render HTML, PDF and DOCX in that order.
    /// The first failure stops the run; files already written are left in place.
    pub fn generate(&self) -> Result<GeneratedFiles> {
        let config = &self.config;
        let mut files = GeneratedFiles::default();

        let data_path = config.data_path_absolute();
        info!("Loading resume data from {}", data_path.display());
        let record = load_resume(&data_path)?;

        // PDF is converted from the HTML output
        if config.wants(OutputFormat::Html) || config.wants(OutputFormat::Pdf) {
            let html = render_html(
                &record,
                &config.template_dir_absolute(),
                &config.template,
                &config.html_output_absolute(),
            )
            .context("HTML rendering failed")?;
            files.html = Some(html);
        }

        if config.wants(OutputFormat::Pdf) {
            if let Some(html) = &files.html {
                let pdf = render_pdf(html, &config.pdf_output_absolute(), &config.pdf_engine)
                    .context("PDF rendering failed")?;
                files.pdf = Some(pdf);
            }
        }

        if config.wants(OutputFormat::Docx) {
            let docx = render_docx(&record, &config.docx_output_absolute())
                .context("DOCX rendering failed")?;
            files.docx = Some(docx);
        }

        info!(
            "Resume generated for {}",
            record.name().unwrap_or("<unnamed>")
        );
        Ok(files)
    }
}

/// Convenience function for a full run
pub fn generate_resume(config: RenderConfig) -> Result<GeneratedFiles> {
    ResumeGenerator::new(config).generate()
}
