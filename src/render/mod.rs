// src/render/mod.rs
//! One renderer per output format

pub mod docx;
pub mod html;
pub mod pdf;

pub use docx::render_docx;
pub use html::render_html;
pub use pdf::{render_pdf, PdfEngine};
