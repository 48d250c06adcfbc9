// src/render/html.rs
use anyhow::Result;
use minijinja::{context, Value};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{FsOps, TemplateEngine};
use crate::types::ResumeRecord;

/// Render `template` (relative to `template_dir`) with the record bound to
/// `resume`, and write the result to `output`.
pub fn render_html(
    record: &ResumeRecord,
    template_dir: &Path,
    template: &Path,
    output: &Path,
) -> Result<PathBuf> {
    let engine = TemplateEngine::new(template_dir.to_path_buf());
    let html = engine.render(
        template,
        context! { resume => Value::from_serialize(record.template_value()) },
    )?;

    FsOps::write_file_safe(output, &html)?;

    info!("HTML rendered: {} ({} bytes)", output.display(), html.len());
    println!("✅ HTML rendered: {}", output.display());
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str = r#"<h1>{{ resume.name }}</h1>
<p>{{ resume.contact.email }} | {{ resume.contact.phone }} | {{ resume.contact.linkedin }}</p>
<p>{{ resume.summary }}</p>
{% for category, skills in resume.technical_skills | items %}
<li>{{ category }}: {{ skills | join(", ") }}</li>
{% endfor %}"#;

    const RESUME: &str = r#"
name: Jane Doe
contact:
  email: jane@example.com
  phone: "+1 555 0100"
  linkedin: linkedin.com/in/janedoe
summary: Backend engineer who likes boring technology.
technical_skills:
  zeta: [Z]
  alpha: [A, B]
"#;

    fn setup(resume: &str) -> (TempDir, ResumeRecord) {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("templates").join("resume.jinja2");
        fs::create_dir_all(template.parent().unwrap()).unwrap();
        fs::write(&template, TEMPLATE).unwrap();
        (dir, ResumeRecord::from_yaml_str(resume).unwrap())
    }

    fn render(dir: &TempDir, record: &ResumeRecord, output: &Path) -> Result<PathBuf> {
        render_html(
            record,
            dir.path(),
            Path::new("templates/resume.jinja2"),
            output,
        )
    }

    #[test]
    fn test_output_contains_fields_verbatim() {
        let (dir, record) = setup(RESUME);
        let output = dir.path().join("output").join("nested").join("resume.html");

        let written = render(&dir, &record, &output).unwrap();
        assert_eq!(written, output);

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("+1 555 0100"));
        assert!(html.contains("linkedin.com/in/janedoe"));
        assert!(html.contains("Backend engineer who likes boring technology."));
    }

    #[test]
    fn test_skill_categories_keep_file_order() {
        let (dir, record) = setup(RESUME);
        let output = dir.path().join("resume.html");
        render(&dir, &record, &output).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        let zeta = html.find("zeta: Z").unwrap();
        let alpha = html.find("alpha: A, B").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let (dir, record) = setup(RESUME);
        let output = dir.path().join("resume.html");

        render(&dir, &record, &output).unwrap();
        let first = fs::read(&output).unwrap();
        render(&dir, &record, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_summary_fails() {
        let (dir, record) = setup(&RESUME.replace(
            "summary: Backend engineer who likes boring technology.\n",
            "",
        ));
        let output = dir.path().join("resume.html");

        assert!(render(&dir, &record, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_null_summary_renders_as_none() {
        let (dir, record) = setup(&RESUME.replace(
            "summary: Backend engineer who likes boring technology.",
            "summary: ~",
        ));
        let output = dir.path().join("resume.html");
        render(&dir, &record, &output).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<p>None</p>"));
    }

    #[test]
    fn test_html_named_template_is_not_escaped() {
        let (dir, record) = setup(
            &RESUME.replace("name: Jane Doe", "name: \"Jane <b>Doe</b> & Co\""),
        );
        fs::write(dir.path().join("page.html"), "{{ resume.name }}").unwrap();
        let output = dir.path().join("resume.html");

        render_html(&record, dir.path(), Path::new("page.html"), &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Jane <b>Doe</b> & Co");
    }

    #[test]
    fn test_missing_template_fails() {
        let (dir, record) = setup(RESUME);
        let result = render_html(
            &record,
            dir.path(),
            Path::new("templates/missing.jinja2"),
            &dir.path().join("resume.html"),
        );
        assert!(result.is_err());
    }
}
