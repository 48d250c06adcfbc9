// src/core/template_engine.rs
//! Template processing engine backed by minijinja

use anyhow::{Context, Result};
use minijinja::{path_loader, AutoEscape, Environment, UndefinedBehavior, Value};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub struct TemplateEngine {
    templates_dir: PathBuf,
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine that loads templates from `templates_dir`
    pub fn new(templates_dir: PathBuf) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir.clone()));
        // Missing fields are errors unless the template asks for a default
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Output is written as-is whatever the template's file name
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { templates_dir, env }
    }

    /// Render the named template with `ctx`
    pub fn render(&self, template: &Path, ctx: Value) -> Result<String> {
        let name = template_name(template)?;
        debug!(
            "Rendering template '{}' from {}",
            name,
            self.templates_dir.display()
        );

        let tmpl = self.env.get_template(&name).with_context(|| {
            format!(
                "Template '{}' not found in {}",
                name,
                self.templates_dir.display()
            )
        })?;

        tmpl.render(ctx)
            .with_context(|| format!("Failed to render template '{}'", name))
    }
}

/// Loader names always use forward slashes, relative to the search directory
fn template_name(template: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in template.components() {
        match component {
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| anyhow::anyhow!("Template path is not valid UTF-8"))?,
            ),
            Component::CurDir => {}
            _ => anyhow::bail!(
                "Template path must be relative to the template directory: {}",
                template.display()
            ),
        }
    }

    if parts.is_empty() {
        anyhow::bail!("Template path is empty");
    }
    Ok(parts.join("/"))
}
