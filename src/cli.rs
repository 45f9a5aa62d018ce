use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::AppConfig;
use crate::report::{OutputFormat, ReportView};
use commands::{fetch, report};

#[derive(Parser)]
#[command(name = "farmhelp")]
#[command(about = "FarmHelp prediction history tools")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    ///
    /// Defaults to `farmhelp.toml` in the working directory when present.
    /// Every key can also be set through `FARMHELP_*` environment variables.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the raw prediction history and save it as JSON
    Fetch {
        /// Output file, `-` for standard output
        #[arg(short, long)]
        output: PathBuf,

        /// Bearer token, overrides `access_token` from the configuration
        #[arg(long, env = "FARMHELP_ACCESS_TOKEN")]
        token: Option<String>,
    },
    /// Print charts data and statistics for a prediction history
    ///
    /// Reads a saved history file when `--input` is given, otherwise fetches
    /// the history from the backend.
    Report {
        /// Saved history file (a JSON array as returned by the backend)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Projection to print
        #[arg(short, long, value_enum, default_value_t = ReportView::All)]
        view: ReportView,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Bearer token, overrides `access_token` from the configuration
        #[arg(long, env = "FARMHELP_ACCESS_TOKEN")]
        token: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Fetch { output, token } => {
                fetch(&config, &output, token.as_deref()).await?;
            }
            Commands::Report {
                input,
                view,
                format,
                token,
            } => {
                report(&config, input.as_deref(), view, format, token.as_deref()).await?;
            }
        }
        Ok(())
    }
}
