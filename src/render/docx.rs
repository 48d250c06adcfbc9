// src/render/docx.rs
//! Word document rendering.
//!
//! The document is first laid out as an [`Outline`] of blocks straight from
//! the typed resume, then written with `docx-rs`.

use anyhow::Result;
use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::FsOps;
use crate::types::{Resume, ResumeRecord};
use crate::utils::skill_category_label;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";
const BULLET_STYLE: &str = "ListBullet";

// ===== Outline Model =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text { text: String, bold: bool },
    LineBreak,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Text {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span::Text {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Paragraph(Vec<Span>),
    Bullet(String),
}

impl Block {
    fn text(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Span::plain(text)])
    }

    /// Concatenated text of the block, line breaks as `\n`
    pub fn plain_text(&self) -> String {
        match self {
            Block::Title(text) | Block::Heading(text) | Block::Bullet(text) => text.clone(),
            Block::Paragraph(spans) => spans
                .iter()
                .map(|span| match span {
                    Span::Text { text, .. } => text.as_str(),
                    Span::LineBreak => "\n",
                })
                .collect(),
        }
    }
}

pub type Outline = Vec<Block>;

/// Lay out the resume sections in their fixed order
pub fn build_outline(resume: &Resume) -> Outline {
    let mut blocks = vec![
        Block::Title(resume.name.clone()),
        Block::text(format!(
            "{} | {} | {}",
            resume.contact.email, resume.contact.phone, resume.contact.linkedin
        )),
        Block::Heading("Summary".to_string()),
        Block::text(resume.summary.clone()),
        Block::Heading("Technical Skills".to_string()),
    ];

    for (category, skills) in &resume.technical_skills {
        blocks.push(Block::text(format!(
            "{}: {}",
            skill_category_label(category),
            skills.join(", ")
        )));
    }

    blocks.push(Block::Heading("Experience".to_string()));
    for exp in &resume.experience {
        blocks.push(Block::Paragraph(vec![
            Span::bold(format!(
                "{} – {} ({} to {})",
                exp.title, exp.company, exp.start, exp.end
            )),
            Span::LineBreak,
            Span::plain(exp.location.clone()),
        ]));
        for bullet in &exp.bullets {
            blocks.push(Block::Bullet(format!("• {}", bullet)));
        }
    }

    blocks.push(Block::Heading("Education".to_string()));
    for edu in &resume.education {
        blocks.push(Block::text(format!(
            "{}, {} ({})",
            edu.degree, edu.institution, edu.year
        )));
    }

    blocks
}

// ===== Writer =====

fn run_for(span: &Span) -> Run {
    match span {
        Span::Text { text, bold: true } => Run::new().add_text(text.as_str()).bold(),
        Span::Text { text, bold: false } => Run::new().add_text(text.as_str()),
        Span::LineBreak => Run::new().add_break(BreakType::TextWrapping),
    }
}

fn paragraph_for(block: &Block) -> Paragraph {
    match block {
        Block::Title(text) => Paragraph::new()
            .style(TITLE_STYLE)
            .add_run(Run::new().add_text(text.as_str())),
        Block::Heading(text) => Paragraph::new()
            .style(HEADING_STYLE)
            .add_run(Run::new().add_text(text.as_str())),
        Block::Bullet(text) => Paragraph::new()
            .style(BULLET_STYLE)
            .add_run(Run::new().add_text(text.as_str())),
        Block::Paragraph(spans) => spans
            .iter()
            .fold(Paragraph::new(), |p, span| p.add_run(run_for(span))),
    }
}

fn build_document(outline: &[Block]) -> Docx {
    let docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(Style::new(BULLET_STYLE, StyleType::Paragraph).name("List Bullet"));

    outline
        .iter()
        .fold(docx, |docx, block| docx.add_paragraph(paragraph_for(block)))
}

/// Build the Word document for a record and save it to `output`
pub fn render_docx(record: &ResumeRecord, output: &Path) -> Result<PathBuf> {
    let resume = record.to_resume()?;
    let outline = build_outline(&resume);

    let file = FsOps::create_file_safe(output)?;
    build_document(&outline)
        .build()
        .pack(file)
        .map_err(|e| anyhow::anyhow!("Failed to write DOCX {}: {}", output.display(), e))?;

    info!(
        "Word DOCX generated: {} ({} blocks)",
        output.display(),
        outline.len()
    );
    println!("✅ Word DOCX generated: {}", output.display());
    Ok(output.to_path_buf())
}
