//! embedfs CLI - bundle files into an embeddable asset manifest
//!
//! Usage: embedfs [OPTIONS] [FILES]...

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use embedfs::application::BuildUseCase;
use embedfs::config::{self, BuildConfig};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_up_logging(cli.log_level());

    let config = resolve_config(&cli)?;
    let result = BuildUseCase::new(config)
        .execute()
        .context("failed to embed files")?;

    if result.written_to.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(result.rendered.as_bytes())
            .context("failed to write to stdout")?;
    }
    Ok(())
}

/// Defaults < config file < EMBEDFS_* environment < flags.
fn resolve_config(cli: &Cli) -> Result<BuildConfig> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let (file_config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    Ok(cli.apply(file_config.with_env_overrides()))
}

/// Logs go to stderr so they never mix with output on stdout. `RUST_LOG`
/// wins over the `-v` level.
fn set_up_logging(default_level: &str) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
