// src/render/pdf.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::core::FsOps;

const INPUT_PLACEHOLDER: &str = "{input}";
const OUTPUT_PLACEHOLDER: &str = "{output}";

/// External HTML-to-PDF converter, invoked as `program args...` with
/// `{input}` and `{output}` substituted in each argument.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PdfEngine {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PdfEngine {
    fn default() -> Self {
        Self::new("weasyprint")
    }
}

impl PdfEngine {
    /// Engine taking the input and output paths as its two arguments
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: vec![INPUT_PLACEHOLDER.to_string(), OUTPUT_PLACEHOLDER.to_string()],
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        for arg in &self.args {
            cmd.arg(substitute(arg, input, output));
        }
        cmd
    }
}

/// Expand the placeholders in one argument. Paths are spliced in as OS
/// strings so non-UTF-8 paths reach the engine unchanged.
fn substitute(arg: &str, input: &Path, output: &Path) -> OsString {
    let mut out = OsString::new();
    let mut rest = arg;
    loop {
        let next = [(INPUT_PLACEHOLDER, input), (OUTPUT_PLACEHOLDER, output)]
            .into_iter()
            .filter_map(|(placeholder, path)| {
                rest.find(placeholder).map(|at| (at, placeholder, path))
            })
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, placeholder, path)) => {
                out.push(&rest[..at]);
                out.push(path.as_os_str());
                rest = &rest[at + placeholder.len()..];
            }
            None => {
                out.push(rest);
                return out;
            }
        }
    }
}

/// Convert an existing HTML file to PDF with the external engine
pub fn render_pdf(html_file: &Path, output: &Path, engine: &PdfEngine) -> Result<PathBuf> {
    if !html_file.is_file() {
        anyhow::bail!("HTML input not found: {}", html_file.display());
    }
    FsOps::ensure_parent_dir(output)?;

    let mut cmd = engine.command(html_file, output);
    debug!("Running PDF engine: {:?}", cmd);

    let result = cmd
        .output()
        .with_context(|| format!("Failed to execute PDF engine '{}'", engine.program))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let stdout = String::from_utf8_lossy(&result.stdout);
        anyhow::bail!(
            "PDF conversion failed ({}): stderr={}, stdout={}",
            result.status,
            stderr.trim(),
            stdout.trim()
        );
    }

    let size = FsOps::file_size(output).ok_or_else(|| {
        anyhow::anyhow!(
            "PDF engine '{}' finished without writing {}",
            engine.program,
            output.display()
        )
    })?;

    info!("PDF generated: {} ({} bytes)", output.display(), size);
    println!("✅ PDF generated: {}", output.display());
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn html_fixture(dir: &TempDir) -> PathBuf {
        let html = dir.path().join("resume.html");
        fs::write(&html, "<html><body><h1>Jane Doe</h1></body></html>").unwrap();
        html
    }

    #[test]
    fn test_command_substitutes_placeholders() {
        let engine = PdfEngine::new("wkhtmltopdf").with_args(vec![
            "--quiet".to_string(),
            "{input}".to_string(),
            "--out={output}".to_string(),
        ]);
        let cmd = engine.command(Path::new("in.html"), Path::new("out.pdf"));

        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(cmd.get_program(), "wkhtmltopdf");
        assert_eq!(args, vec!["--quiet", "in.html", "--out=out.pdf"]);
    }

    #[test]
    fn test_substitute_repeated_placeholders() {
        let arg = substitute(
            "{output}:{input}:{output}",
            Path::new("a.html"),
            Path::new("b.pdf"),
        );
        assert_eq!(arg, OsString::from("b.pdf:a.html:b.pdf"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_pass_through() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"cv-\xff.html"));
        let engine = PdfEngine::new("weasyprint").with_args(vec!["--in={input}".to_string()]);
        let cmd = engine.command(input, Path::new("out.pdf"));

        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![OsStr::from_bytes(b"--in=cv-\xff.html")]);
    }

    #[test]
    fn test_missing_input_fails_before_spawning() {
        let dir = TempDir::new().unwrap();
        let engine = PdfEngine::new("program-that-does-not-exist");

        let err = render_pdf(
            &dir.path().join("missing.html"),
            &dir.path().join("resume.pdf"),
            &engine,
        )
        .unwrap_err();
        assert!(err.to_string().contains("HTML input not found"));
    }

    #[test]
    fn test_unknown_engine_fails() {
        let dir = TempDir::new().unwrap();
        let html = html_fixture(&dir);
        let engine = PdfEngine::new("program-that-does-not-exist");

        assert!(render_pdf(&html, &dir.path().join("resume.pdf"), &engine).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_output_is_written() {
        let dir = TempDir::new().unwrap();
        let html = html_fixture(&dir);
        let output = dir.path().join("output").join("resume.pdf");

        // `cp` stands in for a converter taking `input output`
        let written = render_pdf(&html, &output, &PdfEngine::new("cp")).unwrap();

        assert_eq!(written, output);
        assert!(fs::metadata(&output).unwrap().len() > 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_engine_reports_status() {
        let dir = TempDir::new().unwrap();
        let html = html_fixture(&dir);
        let engine = PdfEngine::new("sh").with_args(vec![
            "-c".to_string(),
            "echo broken >&2; exit 3".to_string(),
        ]);

        let err = render_pdf(&html, &dir.path().join("resume.pdf"), &engine).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_without_output_fails() {
        let dir = TempDir::new().unwrap();
        let html = html_fixture(&dir);

        let engine = PdfEngine::new("true");
        assert!(render_pdf(&html, &dir.path().join("resume.pdf"), &engine).is_err());
    }

    #[test]
    #[ignore = "requires weasyprint on PATH"]
    fn test_weasyprint_produces_pdf() {
        let dir = TempDir::new().unwrap();
        let html = html_fixture(&dir);
        let output = dir.path().join("resume.pdf");

        render_pdf(&html, &output, &PdfEngine::default()).unwrap();
        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
