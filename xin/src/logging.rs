use std::io;

use anyhow::Context;
use tracing::subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber and routes `log` records into it.
///
/// `RUST_LOG` takes precedence over `default_level`. Output goes to stderr so
/// sampled data on stdout stays machine readable.
pub fn init(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("invalid log level `{default_level}`"))?;

    let fmt_subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    subscriber::set_global_default(fmt_subscriber)
        .context("a global tracing subscriber is already installed")?;
    LogTracer::init().context("a global logger is already installed")?;

    Ok(())
}
