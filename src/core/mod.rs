// src/core/mod.rs
//! Shared services used by the loader and the renderers

pub mod fs_ops;
pub mod template_engine;

pub use fs_ops::FsOps;
pub use template_engine::TemplateEngine;
