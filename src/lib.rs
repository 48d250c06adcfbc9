//! Render a YAML resume into HTML, PDF and DOCX.

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod loader;
pub mod render;
pub mod types;
pub mod utils;

pub use config::{OutputFormat, RenderConfig};
pub use generator::{generate_resume, GeneratedFiles, ResumeGenerator};
pub use loader::load_resume;
pub use render::{render_docx, render_html, render_pdf, PdfEngine};
pub use types::{Resume, ResumeRecord};
