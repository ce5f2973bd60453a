use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(about = "Terminal comment board")]
struct Args {
    /// TOML settings file; defaults to ./board.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    comments_url: Option<String>,
    #[arg(long)]
    log_filter: Option<String>,
    /// Start signed in (`true`) or signed out (`false`).
    #[arg(long, action = clap::ArgAction::Set)]
    signed_in: Option<bool>,
    /// View to open first, `/` or `/posts`.
    #[arg(long)]
    path: Option<String>,
}

impl Args {
    fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.comments_url {
            settings.comments_url = v;
        }
        if let Some(v) = self.log_filter {
            settings.log_filter = v;
        }
        if let Some(v) = self.signed_in {
            settings.signed_in = v;
        }
        if let Some(v) = self.path {
            settings.start_path = v;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply(&mut settings);
    settings.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(comments_url = %settings.comments_url, "starting comment board");
    ui::app::run(settings)
}
