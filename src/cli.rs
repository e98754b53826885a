use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use embedfs::config::{BuildConfig, ModTimeSetting, OutputFormat};

/// embedfs - bundle files into an embeddable asset manifest
#[derive(Parser, Debug)]
#[command(name = "embedfs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files and directories to embed
    pub files: Vec<PathBuf>,

    /// Config file (defaults to ./embedfs.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prefix removed from every path before it becomes a key
    #[arg(long)]
    pub prefix: Option<String>,

    /// Regex of paths to skip, together with their descendants
    #[arg(long)]
    pub ignore: Option<String>,

    /// Regex a file must match to be embedded
    #[arg(long)]
    pub include: Option<String>,

    /// Unix timestamp forced onto every file
    #[arg(long)]
    pub modtime: Option<String>,

    /// Store payloads base64 encoded only
    #[arg(long)]
    pub no_compression: bool,

    /// gzip level (0-9)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: Option<u32>,

    /// Generate crate-private accessors
    #[arg(long)]
    pub private: bool,

    /// Module name recorded in the generated file
    #[arg(long)]
    pub module: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Command line recorded in the generated header
    #[arg(long)]
    pub invocation: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Rust,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Rust => OutputFormat::Rust,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Lay the flags that were given over `config`.
    pub fn apply(&self, mut config: BuildConfig) -> BuildConfig {
        if !self.files.is_empty() {
            config.files = self.files.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(ignore) = &self.ignore {
            config.ignore = Some(ignore.clone());
        }
        if let Some(include) = &self.include {
            config.include = Some(include.clone());
        }
        if let Some(modtime) = &self.modtime {
            config.modtime = Some(ModTimeSetting::Text(modtime.clone()));
        }
        if self.no_compression {
            config.no_compression = true;
        }
        if let Some(level) = self.level {
            config.level = Some(level);
        }
        if self.private {
            config.private = true;
        }
        if let Some(module) = &self.module {
            config.module = module.clone();
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(invocation) = &self.invocation {
            config.invocation = Some(invocation.clone());
        }
        config
    }

    /// Log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
