use anyhow::Result;
use clap::Parser;
use resume_render::cli::Cli;
use resume_render::generate_resume;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = cli.into_config()?;
    tracing::info!(
        "Rendering {} with formats {:?}",
        config.data_path_absolute().display(),
        config.formats
    );

    generate_resume(config)?;
    Ok(())
}
